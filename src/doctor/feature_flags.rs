use super::{CheckResult, Probe, ProbeReport};
use crate::exec;

/// RADV dumps its known debug/perftest options when the variable is
/// set to "help". Informational only, no pass/fail classification.
const HELP_TOGGLES: &[&str] = &["RADV_DEBUG", "RADV_PERFTEST"];
const MAX_LINES: usize = 20;

pub struct FeatureFlags;

/// One captured output per help toggle; None means the tool could not
/// be run at all for that toggle.
fn build_report(outputs: Vec<Option<String>>) -> ProbeReport {
    let tool_ran = outputs.iter().any(|o| o.is_some());

    let notes: Vec<String> = outputs
        .iter()
        .flatten()
        .flat_map(|out| {
            out.lines()
                .filter(|l| !l.trim().is_empty())
                .take(MAX_LINES / HELP_TOGGLES.len())
                .map(String::from)
                .collect::<Vec<_>>()
        })
        .collect();

    if notes.is_empty() {
        let message = if tool_ran {
            "vulkaninfo produced no RADV option listing"
        } else {
            "vulkaninfo not available, cannot list RADV options"
        };
        return ProbeReport::from_checks(vec![CheckResult::warn(message)]);
    }

    ProbeReport {
        checks: Vec::new(),
        notes,
    }
}

impl Probe for FeatureFlags {
    fn label(&self) -> &'static str {
        "RADV feature flags"
    }

    fn run(&self) -> ProbeReport {
        let outputs = HELP_TOGGLES
            .iter()
            .map(|toggle| exec::run_with_env("vulkaninfo", &["--summary"], toggle, "help"))
            .collect();
        build_report(outputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Status;

    #[test]
    fn missing_tool_warns_not_available() {
        let report = build_report(vec![None, None]);
        assert_eq!(report.checks.len(), 1);
        assert_eq!(report.checks[0].status, Status::Warn);
        assert_eq!(
            report.checks[0].message,
            "vulkaninfo not available, cannot list RADV options"
        );
    }

    #[test]
    fn empty_output_warns_differently_from_missing_tool() {
        let report = build_report(vec![Some("\n   \n".to_string()), None]);
        assert_eq!(report.checks.len(), 1);
        assert_eq!(
            report.checks[0].message,
            "vulkaninfo produced no RADV option listing"
        );
    }

    #[test]
    fn listings_are_passed_through_bounded() {
        let listing: String = (0..30).map(|i| format!("option_{i}\n")).collect();
        let report = build_report(vec![Some(listing.clone()), Some(listing)]);
        assert!(report.checks.is_empty());
        assert_eq!(report.notes.len(), MAX_LINES);
        assert_eq!(report.notes[0], "option_0");
    }
}
