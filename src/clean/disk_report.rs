use super::{CleanTask, TargetReport, TaskReport};
use crate::disk_info;
use crate::exec;
use crate::output::format_size;
use crate::utils;
use std::path::Path;

const TOP_N: usize = 10;

/// Report-only: overall disk picture after cleanup.
pub struct DiskReport;

impl CleanTask for DiskReport {
    fn label(&self) -> &'static str {
        "Disk usage (report only)"
    }

    fn run(&self, _dry_run: bool) -> TaskReport {
        let mut report = TaskReport::new();

        match disk_info::get_disk_info(Path::new("/")) {
            Some(info) => report.targets.push(TargetReport::info(
                "root filesystem:",
                format!(
                    "{} used / {} total ({} available)",
                    format_size(info.used),
                    format_size(info.total),
                    format_size(info.available)
                ),
            )),
            None => report
                .targets
                .push(TargetReport::skipped("root filesystem", "statvfs failed")),
        }

        let home = utils::home_dir();
        if exec::command_exists("dust") {
            let top_n = TOP_N.to_string();
            let home_str = home.to_string_lossy();
            if let Some(out) = exec::run("dust", &["-d", "1", "-n", &top_n, home_str.as_ref()])
            {
                for line in out.lines().filter(|l| !l.trim().is_empty()) {
                    report.targets.push(TargetReport::info("", line.to_string()));
                }
                return report;
            }
        }

        // Fallback: measure and sort top-level home entries ourselves.
        for (path, size) in utils::largest_entries(&home, TOP_N) {
            report.targets.push(TargetReport::info(
                format_size(size),
                utils::display_path(&path),
            ));
        }
        report
    }
}
