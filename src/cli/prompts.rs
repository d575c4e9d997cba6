//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use passgauge::StrengthReport;

use super::quiet;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print a warning to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error to stderr (red) - always shown
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        println!("*** -COPIED {count} PASSWORD(S) TO CLIPBOARD- ***");
    }
}

/// Ask whether to print to the terminal when the clipboard is unavailable.
/// Quiet or non-interactive runs fall back silently.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}

pub fn settings_saved(path: &str) {
    if !quiet::enabled() {
        eprintln!("Settings saved \u{2192} {path}");
    }
}

/// Strength report for `--check`. Quiet mode prints only the label.
pub fn report(report: &StrengthReport) {
    println!("{}", format_report(report, quiet::enabled()));
}

pub fn format_report(report: &StrengthReport, brief: bool) -> String {
    if brief {
        return report.label.to_string();
    }
    let mut out = format!("Strength: {} (score {})", report.label, report.score);
    for (name, ok) in report.checks.list() {
        let mark = if ok { 'x' } else { ' ' };
        out.push_str(&format!("\n  [{mark}] {name}"));
    }
    out
}
