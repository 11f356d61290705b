use super::{CheckResult, Probe, ProbeReport};
use crate::exec;

const LOG_KEYWORD: &str = "amdgpu";

pub struct KernelLog;

/// Last kernel-log line mentioning the GPU driver.
fn last_match<'a>(log: &'a str, keyword: &str) -> Option<&'a str> {
    log.lines().filter(|line| line.contains(keyword)).next_back()
}

impl Probe for KernelLog {
    fn label(&self) -> &'static str {
        "Kernel log"
    }

    fn run(&self) -> ProbeReport {
        let check = match exec::run("dmesg", &[]) {
            Some(log) => match last_match(&log, LOG_KEYWORD) {
                Some(line) => CheckResult::pass(line.trim().to_string()),
                None => CheckResult::warn(
                    "no amdgpu messages in the kernel log (dmesg may need root)",
                ),
            },
            None => CheckResult::warn(
                "no amdgpu messages in the kernel log (dmesg may need root)",
            ),
        };
        ProbeReport::from_checks(vec![check])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_the_last_matching_line() {
        let log = "\
[    1.0] amdgpu 0000:03:00.0: enabling device
[    2.0] snd_hda_intel: probe ok
[    3.0] amdgpu: ring gfx_0.0.0 uses VM inv eng 0
";
        assert_eq!(
            last_match(log, "amdgpu"),
            Some("[    3.0] amdgpu: ring gfx_0.0.0 uses VM inv eng 0")
        );
    }

    #[test]
    fn no_match_yields_none() {
        assert_eq!(last_match("[    1.0] usb 1-1: new device\n", "amdgpu"), None);
    }
}
