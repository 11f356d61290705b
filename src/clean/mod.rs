mod aur_caches;
mod coredumps;
mod disk_report;
mod journal;
mod orphans;
mod pacman_cache;
mod shader_cache;
mod steam;
mod user_caches;

use crate::output::{self, format_size};
use crate::utils;

/// What happened to one cleanup target.
pub enum Outcome {
    /// Contents deleted, this many bytes freed.
    Cleared { bytes: u64 },
    /// Dry run: this many bytes would be freed.
    WouldClear { bytes: u64 },
    /// Target absent or tool missing; nothing measured, nothing deleted.
    Skipped { reason: String },
    /// Measured but deliberately left alone.
    ReportOnly { bytes: u64 },
    /// Report-only detail line, never a deletion.
    Info { detail: String },
}

pub struct TargetReport {
    pub label: String,
    pub outcome: Outcome,
}

impl TargetReport {
    pub fn cleared(label: impl Into<String>, bytes: u64, dry_run: bool) -> Self {
        let outcome = if dry_run {
            Outcome::WouldClear { bytes }
        } else {
            Outcome::Cleared { bytes }
        };
        Self {
            label: label.into(),
            outcome,
        }
    }

    pub fn skipped(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            outcome: Outcome::Skipped {
                reason: reason.into(),
            },
        }
    }

    pub fn report_only(label: impl Into<String>, bytes: u64) -> Self {
        Self {
            label: label.into(),
            outcome: Outcome::ReportOnly { bytes },
        }
    }

    pub fn info(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            outcome: Outcome::Info {
                detail: detail.into(),
            },
        }
    }
}

/// Result of running one cleanup task: per-target lines plus any
/// non-fatal errors. Errors never abort the run.
pub struct TaskReport {
    pub targets: Vec<TargetReport>,
    pub errors: Vec<String>,
}

impl TaskReport {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Bytes this task freed (or would free).
    pub fn reclaimed(&self) -> u64 {
        self.targets
            .iter()
            .map(|t| match t.outcome {
                Outcome::Cleared { bytes } | Outcome::WouldClear { bytes } => bytes,
                _ => 0,
            })
            .sum()
    }

    /// Bytes measured but deliberately left in place.
    pub fn reported(&self) -> u64 {
        self.targets
            .iter()
            .map(|t| match t.outcome {
                Outcome::ReportOnly { bytes } => bytes,
                _ => 0,
            })
            .sum()
    }
}

/// The trait every cleanup task implements. Tasks are independent and
/// run in a fixed order; a missing target or tool degrades that task
/// to a skip, never aborts the sequence.
pub trait CleanTask {
    /// Human-readable section label (e.g. "Steam caches").
    fn label(&self) -> &'static str;

    /// Measure and (unless dry_run) delete. Best effort: OS-level
    /// failures are collected into the report's error list.
    fn run(&self, dry_run: bool) -> TaskReport;
}

pub fn all_tasks() -> Vec<Box<dyn CleanTask>> {
    vec![
        Box::new(steam::SteamCaches::new(utils::home_dir())),
        Box::new(steam::CompatData::new(utils::home_dir())),
        Box::new(shader_cache::MesaShaderCache),
        Box::new(pacman_cache::PacmanCache),
        Box::new(aur_caches::AurBuildCaches),
        Box::new(journal::Journal),
        Box::new(coredumps::Coredumps),
        Box::new(user_caches::UserCaches),
        Box::new(orphans::OrphanedPackages),
        Box::new(disk_report::DiskReport),
    ]
}

/// Run the full sequence top to bottom and print the summary.
pub fn run_clean(confirm: bool) {
    let dry_run = !confirm;

    output::print_banner("cache and log cleanup");
    if dry_run {
        output::print_no_confirm_warning();
    }

    let mut totals: Vec<(&'static str, u64, bool)> = Vec::new();
    for task in all_tasks() {
        output::print_section(task.label());
        let report = task.run(dry_run);

        for target in &report.targets {
            match &target.outcome {
                Outcome::Cleared { bytes } => {
                    output::print_cleared(&target.label, &format_size(*bytes))
                }
                Outcome::WouldClear { bytes } => {
                    output::print_would_clear(&target.label, &format_size(*bytes))
                }
                Outcome::Skipped { reason } => output::print_skipped(&target.label, reason),
                Outcome::ReportOnly { bytes } => {
                    output::print_note(&format!("{} {}", target.label, format_size(*bytes)))
                }
                Outcome::Info { detail } => {
                    output::print_note(&format!("{} {}", target.label, detail))
                }
            }
        }
        for err in &report.errors {
            output::print_warning(err);
        }
        println!();

        let reclaimed = report.reclaimed();
        if reclaimed > 0 {
            totals.push((task.label(), reclaimed, false));
        }
        let reported = report.reported();
        if reported > 0 {
            totals.push((task.label(), reported, true));
        }
    }

    output::print_summary_header();
    let mut grand_total = 0u64;
    for (label, bytes, report_only) in &totals {
        if *report_only {
            output::print_summary_row_report_only(label, &format_size(*bytes));
        } else {
            output::print_summary_row(label, &format_size(*bytes));
            grand_total += bytes;
        }
    }
    output::print_separator();
    output::print_grand_total(&format_size(grand_total));

    if dry_run {
        output::print_dry_run_footer();
    } else {
        output::print_clean_complete(&format_size(grand_total));
    }
}
