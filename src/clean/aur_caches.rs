use super::{CleanTask, TargetReport, TaskReport};
use crate::utils;

/// AUR helper build caches, home-relative. Each is handled independently.
const BUILD_CACHES: &[(&str, &str)] = &[(".cache/yay", "yay"), (".cache/paru", "paru")];

pub struct AurBuildCaches;

impl CleanTask for AurBuildCaches {
    fn label(&self) -> &'static str {
        "AUR build caches"
    }

    fn run(&self, dry_run: bool) -> TaskReport {
        let mut report = TaskReport::new();
        let home = utils::home_dir();

        for (rel, label) in BUILD_CACHES {
            let dir = home.join(rel);
            if !dir.is_dir() {
                report.targets.push(TargetReport::skipped(*label, "not found"));
                continue;
            }

            if dry_run {
                let size = utils::dir_size(&dir);
                report.targets.push(TargetReport::cleared(*label, size, true));
            } else {
                let stats = utils::clear_dir_contents(&dir);
                report
                    .targets
                    .push(TargetReport::cleared(*label, stats.freed, false));
                report.errors.extend(stats.errors);
            }
        }

        report
    }
}
