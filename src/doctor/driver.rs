use super::{CheckResult, Probe, ProbeReport};
use crate::exec;

/// The active Vulkan driver must be RADV, not AMDVLK or a proprietary stack.
/// Case-sensitive: vulkaninfo reports the RADV driver name in lowercase.
const REQUIRED_DRIVER: &str = "radv";

pub struct DriverIdentity;

/// Pull the first `driverName` and `driverInfo` values out of
/// `vulkaninfo --summary` output. Lines look like
/// `	driverName         = radv`.
fn parse_driver_fields(output: &str) -> (Option<String>, Option<String>) {
    let field = |key: &str| {
        output
            .lines()
            .find(|line| line.contains(key))
            .and_then(|line| line.split_once('='))
            .map(|(_, value)| value.trim().to_string())
    };
    (field("driverName"), field("driverInfo"))
}

impl Probe for DriverIdentity {
    fn label(&self) -> &'static str {
        "Vulkan driver"
    }

    fn run(&self) -> ProbeReport {
        let Some(output) = exec::run("vulkaninfo", &["--summary"]) else {
            return ProbeReport::from_checks(vec![CheckResult::fail(
                "vulkaninfo not available (install vulkan-tools)",
            )]);
        };

        let (name, info) = parse_driver_fields(&output);
        let name = name.unwrap_or_default();
        let info = info.unwrap_or_default();

        let checks = if name.contains(REQUIRED_DRIVER) {
            vec![
                CheckResult::pass(format!("driverName = {name}")),
                CheckResult::pass(format!("driverInfo = {info}")),
            ]
        } else {
            vec![
                CheckResult::fail(format!("driverName = {name}")),
                CheckResult::fail(format!("driverInfo = {info}")),
            ]
        };
        ProbeReport::from_checks(checks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUMMARY: &str = "\
GPU0:
\tapiVersion         = 1.3.274
\tdriverName         = radv
\tdriverInfo         = Mesa 24.0.3
\tdeviceName         = AMD Radeon RX 7800 XT (RADV NAVI32)
";

    #[test]
    fn extracts_driver_name_and_info() {
        let (name, info) = parse_driver_fields(SUMMARY);
        assert_eq!(name.as_deref(), Some("radv"));
        assert_eq!(info.as_deref(), Some("Mesa 24.0.3"));
    }

    #[test]
    fn first_match_wins_across_gpus() {
        let two_gpus = format!("{SUMMARY}\tdriverName         = llvmpipe\n");
        let (name, _) = parse_driver_fields(&two_gpus);
        assert_eq!(name.as_deref(), Some("radv"));
    }

    #[test]
    fn missing_fields_parse_as_none() {
        let (name, info) = parse_driver_fields("no vulkan here");
        assert!(name.is_none());
        assert!(info.is_none());
    }

    #[test]
    fn required_match_is_case_sensitive() {
        assert!(!"RADV".contains(REQUIRED_DRIVER));
        assert!("radv".contains(REQUIRED_DRIVER));
    }
}
