//! Line input in raw mode: plain text, digits, and passwords with a live
//! strength readout.

use std::io;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, read};
use zeroize::Zeroize;

use passgauge::classify;

use crate::settings::Theme;
use crate::terminal::{RESET, RawModeGuard, console_width, flush, label_color, reset_terminal};

/// What a key press did to the line.
#[derive(Debug, PartialEq, Eq)]
enum Edit {
    Changed,
    Submit,
    Cancel,
    Ignored,
}

/// Editable line with a cursor. Cursor is a char index, 0 = before first.
#[derive(Debug, Default)]
struct Line {
    chars: Vec<char>,
    cursor: usize,
}

impl Line {
    fn new(initial: &str) -> Self {
        let chars: Vec<char> = initial.chars().collect();
        let cursor = chars.len();
        Self { chars, cursor }
    }

    fn text(&self) -> String {
        self.chars.iter().collect()
    }

    fn apply(&mut self, key: KeyEvent, accept: impl Fn(char) -> bool) -> Edit {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                // process::exit skips destructors
                reset_terminal();
                println!();
                std::process::exit(0);
            }
            KeyCode::Char('q') if ctrl => Edit::Cancel,
            KeyCode::Esc => Edit::Cancel,
            KeyCode::Char('u') if ctrl => {
                self.chars.zeroize();
                self.chars.clear();
                self.cursor = 0;
                Edit::Changed
            }
            KeyCode::Enter => Edit::Submit,
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                self.chars.remove(self.cursor);
                Edit::Changed
            }
            KeyCode::Delete if self.cursor < self.chars.len() => {
                self.chars.remove(self.cursor);
                Edit::Changed
            }
            KeyCode::Left if self.cursor > 0 => {
                self.cursor -= 1;
                Edit::Changed
            }
            KeyCode::Right if self.cursor < self.chars.len() => {
                self.cursor += 1;
                Edit::Changed
            }
            KeyCode::Home => {
                self.cursor = 0;
                Edit::Changed
            }
            KeyCode::End => {
                self.cursor = self.chars.len();
                Edit::Changed
            }
            KeyCode::Char(c) if accept(c) => {
                self.chars.insert(self.cursor, c);
                self.cursor += 1;
                Edit::Changed
            }
            _ => Edit::Ignored,
        }
    }
}

impl Drop for Line {
    fn drop(&mut self) {
        self.chars.zeroize();
    }
}

/// Read a line. `render` turns the current text into what is shown after
/// the prompt. Returns `Ok(None)` on Esc / Ctrl+Q and an error when the
/// terminal cannot be put in raw mode or stops delivering events.
fn read_line(
    prompt: &str,
    initial: &str,
    accept: impl Fn(char) -> bool,
    render: impl Fn(&str) -> String,
) -> io::Result<Option<String>> {
    let mut line = Line::new(initial);
    let mut guard = RawModeGuard::new()?;

    let mut shown = render(&line.text());
    print!("{}: {}", prompt, shown);
    flush();

    let submitted = loop {
        match read() {
            Ok(Event::Key(key)) => match line.apply(key, &accept) {
                Edit::Submit => break true,
                Edit::Cancel => break false,
                Edit::Ignored => {}
                Edit::Changed => {
                    let mut text = line.text();
                    let blank = " ".repeat(console_width(&shown) + 1);
                    shown.zeroize();
                    shown = render(&text);
                    text.zeroize();
                    print!("\r{}: {}", prompt, blank);
                    print!("\r{}: {}", prompt, shown);
                    // Cursor column is 1-based
                    print!("\x1b[{}G", prompt.chars().count() + 3 + line.cursor);
                    flush();
                }
            },
            Ok(_) => {}
            Err(e) => {
                shown.zeroize();
                guard.release();
                println!();
                return Err(e);
            }
        }
    };
    shown.zeroize();

    guard.release();
    println!();
    Ok(submitted.then(|| line.text()))
}

pub fn get_editable_input(prompt: &str, initial_value: &str) -> io::Result<Option<String>> {
    read_line(prompt, initial_value, |_| true, str::to_string)
}

/// Digits only. Empty input keeps `initial_value`.
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> io::Result<Option<usize>> {
    let initial = initial_value.to_string();
    let Some(input) = read_line(prompt, &initial, |c| c.is_ascii_digit(), str::to_string)? else {
        return Ok(None);
    };
    if input.is_empty() {
        Ok(Some(initial_value))
    } else {
        Ok(input.parse().ok())
    }
}

/// Password entry with the strength label redrawn on every keystroke.
pub fn get_password_input(
    prompt: &str,
    visible: bool,
    theme: Theme,
) -> io::Result<Option<String>> {
    read_line(prompt, "", |c| !c.is_control(), |text| {
        live_strength(text, visible, theme)
    })
}

fn live_strength(text: &str, visible: bool, theme: Theme) -> String {
    let report = classify(text);
    let shown = if visible {
        text.to_string()
    } else {
        "•".repeat(text.chars().count())
    };
    let color = label_color(report.label, theme);
    format!(
        "{shown}  {color}[{} {}/10]{RESET}",
        report.label, report.score
    )
}
