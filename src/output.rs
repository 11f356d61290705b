use colored::Colorize;

/// Outcome of a single diagnostic check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pass,
    Fail,
    Warn,
}

/// Format byte count the way `du -h` does: single-letter unit, no space.
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "K", "M", "G", "T"];
    if bytes < 1024 {
        return format!("{bytes}B");
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if value < 10.0 {
        format!("{:.1}{}", value, UNITS[unit])
    } else {
        format!("{:.0}{}", value, UNITS[unit])
    }
}

pub fn status_line(status: Status, message: &str) -> String {
    let tag = match status {
        Status::Pass => "PASS".green().bold(),
        Status::Fail => "FAIL".red().bold(),
        Status::Warn => "WARN".yellow().bold(),
    };
    format!("  [{tag}] {message}")
}

pub fn print_check(status: Status, message: &str) {
    println!("{}", status_line(status, message));
}

pub fn print_banner(subtitle: &str) {
    println!("{}", format!("tidyarch — {subtitle}").bold().cyan());
    println!();
}

pub fn print_section(label: &str) {
    println!("{}", format!("=== {label} ===").bold().white());
}

/// Verbatim informational line, no classification.
pub fn print_note(line: &str) {
    println!("  {}", line.dimmed());
}

pub fn print_cleared(label: &str, size: &str) {
    println!("  {} {}  {}", "Cleared".red(), label, size.yellow());
}

pub fn print_would_clear(label: &str, size: &str) {
    println!(
        "  {} {}  {}",
        "Would clear".yellow(),
        label,
        size.yellow()
    );
}

pub fn print_skipped(label: &str, reason: &str) {
    println!("  {} {}", label, reason.dimmed());
}

pub fn print_warning(msg: &str) {
    println!("  {} {}", "Warning:".red().bold(), msg.red());
}

pub fn print_summary_header() {
    println!("{}", "=== Summary ===".bold().white());
}

pub fn print_summary_row(label: &str, size: &str) {
    println!("  {:<30} {}", label, size.green());
}

pub fn print_summary_row_report_only(label: &str, size: &str) {
    println!(
        "  {:<30} {}  {}",
        label,
        size.green(),
        "[report only]".dimmed()
    );
}

pub fn print_separator() {
    println!("  {}", "─".repeat(45).dimmed());
}

pub fn print_grand_total(total: &str) {
    println!(
        "  {:<30} {}",
        "Total reclaimable:".bold(),
        total.green().bold()
    );
    println!();
}

pub fn print_dry_run_footer() {
    println!(
        "{}",
        "This was a dry run. Run `tidyarch clean --confirm` to delete."
            .yellow()
            .bold()
    );
}

pub fn print_clean_complete(freed: &str) {
    println!(
        "{} {}",
        "Cleaned!".green().bold(),
        format!("{freed} freed.").green()
    );
}

pub fn print_no_confirm_warning() {
    println!(
        "{}",
        "No --confirm flag provided. Running as dry-run scan."
            .yellow()
            .bold()
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_size_uses_du_style_units() {
        assert_eq!(format_size(42 * 1024 * 1024), "42M");
        assert_eq!(format_size(512), "512B");
        assert_eq!(format_size(1536), "1.5K");
        assert_eq!(format_size(8 * 1024 * 1024 * 1024), "8.0G");
    }

    #[test]
    fn format_size_of_empty_is_0b() {
        // The shell original compared a formatted size against the literal
        // string "0", which a "0B" rendering never equals. Deletion gating
        // now compares raw byte counts instead (see clean::coredumps).
        assert_eq!(format_size(0), "0B");
        assert_ne!(format_size(0), "0");
    }
}
