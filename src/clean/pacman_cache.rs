use super::{CleanTask, TargetReport, TaskReport};
use crate::exec;
use crate::output::format_size;
use crate::utils;
use std::path::Path;

const PKG_CACHE: &str = "/var/cache/pacman/pkg";
const KEEP_VERSIONS: &str = "-rk3";
const DROP_UNINSTALLED: &str = "-ruk0";

pub struct PacmanCache;

impl CleanTask for PacmanCache {
    fn label(&self) -> &'static str {
        "Pacman package cache"
    }

    fn run(&self, dry_run: bool) -> TaskReport {
        let mut report = TaskReport::new();

        if !exec::command_exists("paccache") {
            report.targets.push(TargetReport::skipped(
                "paccache",
                "not installed (pacman-contrib)",
            ));
            return report;
        }

        let cache = Path::new(PKG_CACHE);
        let before = utils::dir_size(cache);
        report
            .targets
            .push(TargetReport::info("cache size:", format_size(before)));

        if dry_run {
            report.targets.push(TargetReport::info(
                "would run:",
                format!("paccache {KEEP_VERSIONS} && paccache {DROP_UNINSTALLED}"),
            ));
            return report;
        }

        // Keep the 3 most recent versions, then drop every version of
        // packages no longer installed. Both need root.
        for args in [KEEP_VERSIONS, DROP_UNINSTALLED] {
            if exec::run("paccache", &[args]).is_none() {
                report
                    .errors
                    .push(format!("paccache {args} failed (needs root?)"));
            }
        }

        let after = utils::dir_size(cache);
        report.targets.push(TargetReport::cleared(
            "package cache",
            before.saturating_sub(after),
            false,
        ));
        report
    }
}
