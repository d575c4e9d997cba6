use passgauge::pass::entropy;
use passgauge::{CharClass, MAX_LENGTH, MIN_LENGTH, StrengthReport};

use super::session::{Session, Status};
use crate::settings::Theme;
use crate::terminal::{
    RESET, UNDERLINE, accent, box_bottom, box_line, box_line_center, box_opt, box_top, flush,
    label_color, print_error, print_rule, print_success, strength_bar,
};

pub fn enter_prompt() -> &'static str {
    "Enter menu option (or press Enter to generate)"
}

fn checkbox(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}

pub fn print_main_menu(session: &Session) {
    let settings = &session.settings;
    let theme = settings.theme;
    let report = session.report();

    print!("{}", accent(theme));
    box_top("Password");
    box_line("");
    box_line_center(&session.display_password());
    box_line("");
    box_bottom();
    print!("{RESET}");
    strength_bar(report.score, report.label, theme);

    let bits = session.entropy_bits();
    box_top("Settings");
    box_line(&format!(
        "Entropy: {:.1} bits ({}) • Source: {}",
        bits,
        entropy::rating(bits),
        settings.entropy_source().name()
    ));
    box_line("");
    box_line(&format!("{UNDERLINE}Length{RESET}:"));
    box_line(&format!(
        "  1) Characters: {}   (+/- to adjust, {}-{})",
        settings.length, MIN_LENGTH, MAX_LENGTH
    ));
    box_line("");
    box_line(&format!("{UNDERLINE}Include{RESET}:"));
    for (n, class) in CharClass::ALL.iter().enumerate() {
        box_line(&format!(
            "  {}) {} {}",
            n + 2,
            checkbox(settings.classes.contains(*class)),
            class.name()
        ));
    }
    box_line("");
    box_line(&format!("Theme: {}", theme.name()));
    print_rule();
    box_line("  v) show/hide  |  c) copy  |  t) theme  |  k) check a password");
    box_line("  u) toggle OS entropy  |  s) save  |  h) help  |  q) quit");
    box_bottom();

    match &session.status {
        Some(Status::Error(msg)) => print_error(msg),
        Some(Status::Info(msg)) => print_success(msg),
        None => println!(),
    }
    flush();
}

/// Full breakdown after checking a typed password.
pub fn print_report(report: &StrengthReport, theme: Theme) {
    let color = label_color(report.label, theme);
    box_top("Strength Check");
    box_line(&format!(
        "{color}{}{RESET} • score {}",
        report.label.description(),
        report.score
    ));
    box_line("");
    for (name, ok) in report.checks.list() {
        box_line(&format!("  {} {}", checkbox(ok), name));
    }
    box_bottom();
}

pub fn print_help() {
    box_top("Passgauge");
    box_line_center("Password generator with strength scoring");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. Opens this menu.");
    box_line("  2) Client: Pass flags directly (e.g., -l 20 -n 5) to generate");
    box_line("     passwords without the menu.");
    box_line("");
    box_line("MENU KEYS:");
    box_opt("  Enter", "Generate a password with the current settings");
    box_opt("  1", "Type a new length");
    box_opt("  + / -", "Lengthen or shorten by one character");
    box_opt("  2-5", "Toggle lowercase, uppercase, numbers, symbols");
    box_opt("  v", "Show or hide the current password");
    box_opt("  c", "Copy the current password to the clipboard");
    box_opt("  t", "Switch between dark and light theme (saved)");
    box_opt("  k", "Check a typed password; the rating updates as you type");
    box_opt("  u", "Toggle the OS cryptographic entropy source");
    box_opt("  s", "Save settings");
    box_line("");
    box_line("SCORING:");
    box_line("  One point each for: 8+ chars, lowercase, uppercase, digit,");
    box_line("  symbol, no triple repeats, 12+ chars, 16+ chars. One bonus");
    box_line("  point at 12+ chars and another at 16+.");
    box_line("  0-4 Weak  |  5-9 Medium  |  10 Strong");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passgauge -l 16            One password, 16 characters");
    box_line("  passgauge -l 20 -n 3 -S    Three passwords with ratings");
    box_line("  passgauge --no-symbols     Alphanumeric only");
    box_line("  passgauge --check -        Score a password read from stdin");
    box_line("");
    box_bottom();
    println!();
}
