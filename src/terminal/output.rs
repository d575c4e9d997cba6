//! Terminal output utilities.
//!
//! Box drawing, the strength bar, theme colours, ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

use passgauge::StrengthLabel;
use passgauge::pass::strength::MAX_SCORE;

use crate::settings::Theme;

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const DIM: &str = "\x1b[2m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("\x1b[0m");
    flush();
}

// ============================================================================
// Styled Output Helpers
// ============================================================================

/// Print error message in red.
pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

pub fn print_success(msg: &str) {
    println!("{GREEN}{msg}{RESET}");
}

/// Print a horizontal rule (box style).
pub fn print_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

// ============================================================================
// Theme
// ============================================================================

/// Foreground colour for a strength label under a theme.
pub fn label_color(label: StrengthLabel, theme: Theme) -> &'static str {
    match (theme, label) {
        (_, StrengthLabel::None) => DIM,
        (Theme::Dark, StrengthLabel::Weak) => "\x1b[38;5;203m",
        (Theme::Dark, StrengthLabel::Medium) => "\x1b[38;5;221m",
        (Theme::Dark, StrengthLabel::Strong) => "\x1b[38;5;114m",
        (Theme::Light, StrengthLabel::Weak) => "\x1b[38;5;124m",
        (Theme::Light, StrengthLabel::Medium) => "\x1b[38;5;130m",
        (Theme::Light, StrengthLabel::Strong) => "\x1b[38;5;28m",
    }
}

/// Colour used for box frames and headings.
pub fn accent(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "\x1b[38;5;252m",
        Theme::Light => "\x1b[38;5;236m",
    }
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - title_part.chars().count();
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let padding = inner_width - display_len;
        println!("│ {}{} │", content, " ".repeat(padding));
    } else {
        println!("│ {} │", content);
    }
}

/// Print centered box content line: │          content          │
pub fn box_line_center(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let total_padding = inner_width - display_len;
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        println!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        );
    } else {
        println!("│ {} │", content);
    }
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Print a help option with flag and description, auto-wrapping if needed.
pub fn box_opt(flag: &str, desc: &str) {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 27;
    let desc_col = inner_width - flag_col;

    let flag_padded = if flag.len() < flag_col {
        format!("{}{}", flag, " ".repeat(flag_col - flag.len()))
    } else {
        flag[..flag_col].to_string()
    };

    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in desc.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= desc_col {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }

    let first = lines.first().map(String::as_str).unwrap_or("");
    let padding = desc_col.saturating_sub(first.len());
    println!("│ {}{}{} │", flag_padded, first, " ".repeat(padding));

    let indent = " ".repeat(flag_col);
    for line in lines.iter().skip(1) {
        let padding = desc_col.saturating_sub(line.len());
        println!("│ {}{}{} │", indent, line, " ".repeat(padding));
    }
}

/// Display width, skipping ANSI escape sequences.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Strength Bar
// ============================================================================

/// Filled cells for a score on a bar of `width` cells.
pub fn bar_fill(score: u32, width: usize) -> usize {
    let score = score.min(MAX_SCORE) as usize;
    score * width / MAX_SCORE as usize
}

/// Render the strength meter inside a box with the label centered (3 lines).
pub fn strength_bar(score: u32, label: StrengthLabel, theme: Theme) {
    let inner_width = BOX_WIDTH - 2;
    let filled = bar_fill(score, inner_width);
    let color = label_color(label, theme);

    let text = if label == StrengthLabel::None {
        label.description().to_string()
    } else {
        format!("{} • score {}/{}", label.description(), score, MAX_SCORE)
    };
    let text_chars: Vec<char> = text.chars().collect();
    let padding = inner_width.saturating_sub(text_chars.len()) / 2;

    let mut content: Vec<char> = vec![' '; inner_width];
    for (i, ch) in text_chars.iter().enumerate() {
        if padding + i < inner_width {
            content[padding + i] = *ch;
        }
    }

    // Top border
    print!("┌{color}{}{RESET}", "▄".repeat(filled));
    println!("{}┐", "─".repeat(inner_width - filled));

    // Middle
    let filled_str: String = content[..filled].iter().collect();
    let unfilled_str: String = content[filled..].iter().collect();
    println!("│{color}\x1b[7m{filled_str}{RESET}{unfilled_str}│");

    // Bottom border
    print!("└{color}{}{RESET}", "▀".repeat(filled));
    println!("{}┘", "─".repeat(inner_width - filled));

    flush();
}
