use super::{CleanTask, TargetReport, TaskReport};
use crate::utils;

/// User-level caches, home-relative. Trash is cleared via its files/
/// subdirectory so the trash structure itself stays intact.
const USER_CACHES: &[(&str, &str)] = &[
    (".cache/thumbnails", "Thumbnail cache"),
    (".local/share/Trash/files", "Trash"),
];

pub struct UserCaches;

impl CleanTask for UserCaches {
    fn label(&self) -> &'static str {
        "User caches"
    }

    fn run(&self, dry_run: bool) -> TaskReport {
        let mut report = TaskReport::new();
        let home = utils::home_dir();

        for (rel, label) in USER_CACHES {
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
