mod driver;
mod env_vars;
mod feature_flags;
mod hardware;
mod kernel;
mod kernel_log;
mod packages;
mod services;
mod shader_cache;

use crate::output::{self, Status};

/// Outcome of one diagnostic probe.
pub struct CheckResult {
    pub status: Status,
    pub message: String,
}

impl CheckResult {
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            status: Status::Pass,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: Status::Fail,
            message: message.into(),
        }
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            status: Status::Warn,
            message: message.into(),
        }
    }
}

/// What one probe group produced: classified checks plus any verbatim
/// informational output.
pub struct ProbeReport {
    pub checks: Vec<CheckResult>,
    pub notes: Vec<String>,
}

impl ProbeReport {
    pub fn from_checks(checks: Vec<CheckResult>) -> Self {
        Self {
            checks,
            notes: Vec::new(),
        }
    }
}

/// The trait every probe module implements. Probes are independent:
/// a Fail or Warn in one never skips or alters any other.
pub trait Probe {
    /// Human-readable section label (e.g. "Vulkan driver").
    fn label(&self) -> &'static str;

    /// Run the probe. Never mutates system state.
    fn run(&self) -> ProbeReport;
}

pub fn all_probes() -> Vec<Box<dyn Probe>> {
    vec![
        Box::new(env_vars::EnvVars),
        Box::new(driver::DriverIdentity),
        Box::new(kernel::KernelGpu),
        Box::new(shader_cache::ShaderCache),
        Box::new(hardware::Gpu),
        Box::new(hardware::Vram),
        Box::new(hardware::CpuGovernor),
        Box::new(kernel_log::KernelLog),
        Box::new(services::Services),
        Box::new(packages::Packages),
        Box::new(feature_flags::FeatureFlags),
    ]
}

/// Run the full battery, print one line per check, and report whether
/// any check failed. Warns never count as failures.
pub fn run_doctor() -> bool {
    output::print_banner("system diagnostics");

    let mut any_failed = false;
    for probe in all_probes() {
        output::print_section(probe.label());
        let report = probe.run();
        for check in &report.checks {
            output::print_check(check.status, &check.message);
            if check.status == Status::Fail {
                any_failed = true;
            }
        }
        for note in &report.notes {
            output::print_note(note);
        }
        println!();
    }

    any_failed
}
