use super::{CheckResult, Probe, ProbeReport};

/// Environment variables a tuned RADV/Proton session is expected to carry.
const TRACKED_VARS: &[&str] = &[
    "AMD_VULKAN_ICD",
    "RADV_PERFTEST",
    "VKD3D_CONFIG",
    "PROTON_NO_ESYNC",
    "PROTON_NO_FSYNC",
];

pub struct EnvVars;

fn check_var(name: &str, value: Option<&str>) -> CheckResult {
    match value {
        Some(v) if !v.is_empty() => CheckResult::pass(format!("{name}={v}")),
        _ => CheckResult::fail(format!("{name} not set")),
    }
}

impl Probe for EnvVars {
    fn label(&self) -> &'static str {
        "Environment"
    }

    fn run(&self) -> ProbeReport {
        let checks = TRACKED_VARS
            .iter()
            .map(|name| {
                let value = std::env::var(name).ok();
                check_var(name, value.as_deref())
            })
            .collect();
        ProbeReport::from_checks(checks)
    }
}
