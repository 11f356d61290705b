use super::{CleanTask, TargetReport, TaskReport};
use crate::utils;
use std::path::Path;

const COREDUMP_DIR: &str = "/var/lib/systemd/coredump";

pub struct Coredumps;

/// Delete iff the directory holds any bytes. The shell original compared
/// the du-formatted size against the literal string "0", which an empty
/// directory rendered as "0B" never equals; gating on the raw byte count
/// removes that hole.
fn should_clear(size_bytes: u64) -> bool {
    size_bytes != 0
}

impl CleanTask for Coredumps {
    fn label(&self) -> &'static str {
        "Coredumps"
    }

    fn run(&self, dry_run: bool) -> TaskReport {
        let mut report = TaskReport::new();
        let dir = Path::new(COREDUMP_DIR);

        if !dir.is_dir() {
            report
                .targets
                .push(TargetReport::skipped("coredump directory", "not found"));
            return report;
        }

        let size = utils::dir_size(dir);
        if !should_clear(size) {
            report
                .targets
                .push(TargetReport::info("coredumps:", "none".to_string()));
            return report;
        }

        if dry_run {
            report
                .targets
                .push(TargetReport::cleared("coredumps", size, true));
        } else {
            let stats = utils::clear_dir_contents(dir);
            report
                .targets
                .push(TargetReport::cleared("coredumps", stats.freed, false));
            report.errors.extend(stats.errors);
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::format_size;

    #[test]
    fn empty_directory_is_never_cleared() {
        assert!(!should_clear(0));
        assert!(should_clear(1));
    }

    #[test]
    fn literal_string_rule_would_have_cleared_an_empty_directory() {
        // Documented quirk of the original: `format_size(0)` is "0B",
        // which differs from the literal "0" the original compared
        // against, so the old rule would have run the deletion anyway.
        let formatted = format_size(0);
        assert_ne!(formatted, "0");
        assert!(!should_clear(0));
    }
}
