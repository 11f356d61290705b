use super::{CleanTask, TargetReport, TaskReport};
use crate::exec;

/// Journal entries older than this are vacuumed on every run.
const RETENTION: &str = "7d";

pub struct Journal;

impl CleanTask for Journal {
    fn label(&self) -> &'static str {
        "systemd journal"
    }

    fn run(&self, dry_run: bool) -> TaskReport {
        let mut report = TaskReport::new();

        match exec::run("journalctl", &["--disk-usage"]) {
            Some(out) => report
                .targets
                .push(TargetReport::info("usage:", out.trim().to_string())),
            None => report
                .targets
                .push(TargetReport::skipped("journalctl", "not available")),
        }

        if dry_run {
            report.targets.push(TargetReport::info(
                "would run:",
                format!("journalctl --vacuum-time={RETENTION}"),
            ));
            return report;
        }

        let vacuum_arg = format!("--vacuum-time={RETENTION}");
        match exec::run("journalctl", &[vacuum_arg.as_str()]) {
            Some(out) => {
                if let Some(line) = out.lines().last() {
                    report
                        .targets
                        .push(TargetReport::info("vacuum:", line.trim().to_string()));
                }
            }
            None => report
                .errors
                .push("journal vacuum failed (needs root?)".to_string()),
        }

        report
    }
}
