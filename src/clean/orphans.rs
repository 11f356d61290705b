use super::{CleanTask, TargetReport, TaskReport};
use crate::exec;

/// Report-only: orphans are listed with a suggested command, never
/// removed automatically.
pub struct OrphanedPackages;

impl CleanTask for OrphanedPackages {
    fn label(&self) -> &'static str {
        "Orphaned packages (report only)"
    }

    fn run(&self, _dry_run: bool) -> TaskReport {
        let mut report = TaskReport::new();

        // pacman -Qdtq exits non-zero when there are no orphans.
        let orphans: Vec<String> = exec::run("pacman", &["-Qdtq"])
            .map(|out| {
                out.lines()
                    .filter(|l| !l.trim().is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        if orphans.is_empty() {
            report
                .targets
                .push(TargetReport::info("orphans:", "none".to_string()));
            return report;
        }

        for name in &orphans {
            report.targets.push(TargetReport::info("orphan:", name.clone()));
        }
        report.targets.push(TargetReport::info(
            "remove with:",
            "sudo pacman -Rns $(pacman -Qdtq)".to_string(),
        ));
        report
    }
}
