use super::{CheckResult, Probe, ProbeReport};
use crate::exec;

/// Packages a RADV + Steam setup needs installed.
const REQUIRED_PACKAGES: &[&str] = &[
    "mesa",
    "vulkan-radeon",
    "lib32-vulkan-radeon",
    "gamemode",
    "steam",
];

pub struct Packages;

fn check_package(name: &str, installed: bool) -> CheckResult {
    if installed {
        CheckResult::pass(format!("{name} installed"))
    } else {
        CheckResult::fail(format!("{name} missing"))
    }
}

impl Probe for Packages {
    fn label(&self) -> &'static str {
        "Required packages"
    }

    fn run(&self) -> ProbeReport {
        let checks = REQUIRED_PACKAGES
            .iter()
            .map(|pkg| check_package(pkg, exec::succeeds("pacman", &["-Qi", pkg])))
            .collect();
        ProbeReport::from_checks(checks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Status;

    #[test]
    fn missing_package_fails_without_affecting_others() {
        let installed = |name: &str| name != "lib32-vulkan-radeon";
        let results: Vec<CheckResult> = REQUIRED_PACKAGES
            .iter()
            .map(|pkg| check_package(pkg, installed(pkg)))
            .collect();

        assert_eq!(
            results
                .iter()
                .filter(|r| r.status == Status::Fail)
                .count(),
            1
        );
        assert!(results
            .iter()
            .any(|r| r.message == "lib32-vulkan-radeon missing"));
        assert!(results.iter().any(|r| r.message == "steam installed"));
    }
}
