use super::{CheckResult, Probe, ProbeReport};
use crate::exec;
use std::path::Path;

const VRAM_USED: &str = "/sys/class/drm/card0/device/mem_info_vram_used";
const VRAM_TOTAL: &str = "/sys/class/drm/card0/device/mem_info_vram_total";
const GOVERNOR: &str = "/sys/devices/system/cpu/cpu0/cpufreq/scaling_governor";

/// lspci device classes that mean "this is a GPU".
const GPU_CLASSES: &[&str] = &["vga", "3d", "display"];

pub struct Gpu;

fn gpu_lines(lspci_output: &str) -> Vec<&str> {
    lspci_output
        .lines()
        .filter(|line| {
            let lower = line.to_lowercase();
            GPU_CLASSES.iter().any(|class| lower.contains(class))
        })
        .collect()
}

impl Probe for Gpu {
    fn label(&self) -> &'static str {
        "GPU hardware"
    }

    fn run(&self) -> ProbeReport {
        let check = match exec::run("lspci", &[]) {
            Some(out) => match gpu_lines(&out).first() {
                Some(line) => CheckResult::pass(line.trim().to_string()),
                None => CheckResult::fail("no GPU found in lspci output"),
            },
            None => CheckResult::warn("lspci not available"),
        };
        ProbeReport::from_checks(vec![check])
    }
}

pub struct Vram;

fn read_counter(path: &Path) -> Option<u64> {
    std::fs::read_to_string(path).ok()?.trim().parse().ok()
}

/// Used in MB, total in GB, both integer division.
fn format_vram(used: u64, total: u64) -> String {
    format!(
        "VRAM: {} MB used / {} GB total",
        used / (1024 * 1024),
        total / (1024 * 1024 * 1024)
    )
}

impl Probe for Vram {
    fn label(&self) -> &'static str {
        "VRAM"
    }

    fn run(&self) -> ProbeReport {
        let used = read_counter(Path::new(VRAM_USED));
        let total = read_counter(Path::new(VRAM_TOTAL));
        let check = match (used, total) {
            (Some(used), Some(total)) => CheckResult::pass(format_vram(used, total)),
            _ => CheckResult::warn("VRAM counters not available under /sys/class/drm"),
        };
        ProbeReport::from_checks(vec![check])
    }
}

pub struct CpuGovernor;

impl Probe for CpuGovernor {
    fn label(&self) -> &'static str {
        "CPU governor"
    }

    fn run(&self) -> ProbeReport {
        let check = match std::fs::read_to_string(GOVERNOR) {
            Ok(value) => CheckResult::pass(format!("scaling_governor = {}", value.trim())),
            Err(_) => CheckResult::warn("cpufreq scaling_governor not readable"),
        };
        ProbeReport::from_checks(vec![check])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LSPCI: &str = "\
00:1f.3 Audio device: Intel Corporation Device 7a50
03:00.0 VGA compatible controller: Advanced Micro Devices [AMD/ATI] Navi 32
04:00.0 Display controller: Advanced Micro Devices [AMD/ATI] Raphael
";

    #[test]
    fn filters_gpu_class_lines_case_insensitively() {
        let lines = gpu_lines(LSPCI);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("VGA compatible controller"));
    }

    #[test]
    fn audio_devices_are_not_gpus() {
        assert!(gpu_lines("00:1f.3 Audio device: Intel\n").is_empty());
    }

    #[test]
    fn vram_formats_used_mb_total_gb_integer_division() {
        let used = 512 * 1024 * 1024;
        let total = 8 * 1024 * 1024 * 1024u64;
        assert_eq!(format_vram(used, total), "VRAM: 512 MB used / 8 GB total");
        // integer division truncates
        assert_eq!(
            format_vram(used + 1024, total - 1),
            "VRAM: 512 MB used / 7 GB total"
        );
    }
}
