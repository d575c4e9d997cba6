//! CLI context - bundles settings, arguments, and clipboard state.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use zeroize::Zeroizing;

use passgauge::{
    CharClass, GenerateError, GenerationRequest, ValidationError, classify, generate_from,
};

use super::{Args, prompts};
use crate::clipboard::{Clipboard, ClipboardError};
use crate::settings::{Settings, SettingsError, default_path};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error("failed to read password from stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to write passwords: {0}")]
    Output(#[source] io::Error),

    #[error("at most {max} passwords can be copied at once, got {count}")]
    BatchTooLarge { count: usize, max: usize },

    #[error("aborted")]
    Aborted,
}

/// Clipboard batches are held in memory until copied.
pub const MAX_CLIPBOARD_BATCH: usize = 10_000;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<Clipboard>,
    args: Args,
}

impl Context {
    pub fn new(args: Args) -> Result<Self, CliError> {
        let settings = if args.saved {
            Settings::load()?
        } else {
            Settings::default()
        };

        Ok(Self {
            settings,
            clipboard: None,
            args,
        })
    }

    pub fn run(&mut self) -> Result<(), CliError> {
        if let Some(input) = self.args.check.clone() {
            return check(&input);
        }
        self.apply_flags()?;
        self.save_if_requested()?;
        self.generate_output()
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) -> Result<(), CliError> {
        if let Some(ref raw) = self.args.length {
            self.settings.length = GenerationRequest::parse_length(raw)?;
        }
        if let Some(number) = self.args.number {
            self.settings.number_of_passwords = number;
        }

        let excluded = [
            (CharClass::Lowercase, self.args.no_lower),
            (CharClass::Uppercase, self.args.no_upper),
            (CharClass::Number, self.args.no_numbers),
            (CharClass::Symbol, self.args.no_symbols),
        ];
        for (class, off) in excluded {
            if off {
                self.settings.classes.set(class, false);
            }
        }

        if self.args.urandom {
            self.settings.urandom = true;
        }

        let count = self.settings.number_of_passwords;
        if self.args.clipboard && count > MAX_CLIPBOARD_BATCH {
            return Err(CliError::BatchTooLarge {
                count,
                max: MAX_CLIPBOARD_BATCH,
            });
        }

        if self.args.clipboard {
            match Clipboard::new() {
                Ok(c) => self.clipboard = Some(c),
                Err(e) => {
                    tracing::debug!(error = %e, "clipboard init failed");
                    if !prompts::clipboard_fallback_prompt() {
                        return Err(CliError::Aborted);
                    }
                }
            }
        }
        Ok(())
    }

    /// Persist settings, refusing a request that could never generate.
    fn save_if_requested(&self) -> Result<(), CliError> {
        if !self.args.save {
            return Ok(());
        }
        self.settings.request().validate()?;
        self.settings.save()?;
        prompts::settings_saved(&default_path().display().to_string());
        Ok(())
    }

    /// Generate passwords and handle output.
    pub fn generate_output(&mut self) -> Result<(), CliError> {
        let stdout = io::stdout();
        self.write_passwords(&mut stdout.lock())
    }

    /// Stream passwords to `out`, or collect them for the clipboard. A
    /// reader that goes away stops generation without an error.
    fn write_passwords<W: Write>(&mut self, out: &mut W) -> Result<(), CliError> {
        let request = self.settings.request();
        let source = self.settings.entropy_source();
        let count = self.settings.number_of_passwords.max(1);
        request.validate()?;

        let mut batch = Zeroizing::new(String::new());

        for _ in 0..count {
            let password = generate_from(&request, source)?;
            let label = classify(&password).label;
            tracing::info!(length = request.length, strength = %label, "password generated");

            if self.clipboard.is_some() {
                batch.push_str(&password);
                batch.push('\n');
                continue;
            }

            let mut line = Zeroizing::new(Vec::with_capacity(password.len() + 10));
            line.extend_from_slice(password.as_bytes());
            if self.args.strength {
                line.push(b'\t');
                line.extend_from_slice(label.to_string().as_bytes());
            }
            line.push(b'\n');
            if let Err(e) = out.write_all(&line) {
                return closed_or(e);
            }
        }
        if let Err(e) = out.flush() {
            return closed_or(e);
        }

        if let Some(clipboard) = self.clipboard.as_mut() {
            clipboard.copy(batch.trim_end_matches('\n'))?;
            prompts::clipboard_copied(count);
        }
        Ok(())
    }
}

fn closed_or(e: io::Error) -> Result<(), CliError> {
    if e.kind() == io::ErrorKind::BrokenPipe {
        tracing::debug!("output closed, stopping early");
        Ok(())
    } else {
        Err(CliError::Output(e))
    }
}

/// `--check`: score a password given inline or on stdin.
fn check(input: &str) -> Result<(), CliError> {
    let password = if input == "-" {
        read_stdin_line()?
    } else {
        Zeroizing::new(input.to_owned())
    };

    let report = classify(&password);
    tracing::info!(score = report.score, strength = %report.label, "password checked");
    prompts::report(&report);
    Ok(())
}

fn read_stdin_line() -> Result<Zeroizing<String>, CliError> {
    let mut line = Zeroizing::new(String::new());
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(CliError::Stdin)?;
    let len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(len);
    Ok(line)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn context(argv: &[&str]) -> Context {
        let args = Args::try_parse_from(std::iter::once("passgauge").chain(argv.iter().copied()))
            .unwrap();
        Context::new(args).unwrap()
    }

    #[test]
    fn flags_shape_settings() {
        let mut ctx = context(&["-l", "32", "-n", "4", "--no-symbols", "-u"]);
        ctx.apply_flags().unwrap();
        assert_eq!(ctx.settings.length, 32);
        assert_eq!(ctx.settings.number_of_passwords, 4);
        assert!(!ctx.settings.classes.symbols);
        assert!(ctx.settings.classes.lowercase);
        assert!(ctx.settings.urandom);
    }

    #[test]
    fn non_numeric_length_is_invalid() {
        let mut ctx = context(&["-l", "long"]);
        assert!(matches!(
            ctx.apply_flags(),
            Err(CliError::Validation(ValidationError::InvalidLength { min: 4, max: 128 }))
        ));
    }

    #[test]
    fn no_classes_stops_before_output() {
        let mut ctx = context(&["--no-lower", "--no-upper", "--no-numbers", "--no-symbols"]);
        ctx.apply_flags().unwrap();
        assert!(matches!(
            ctx.generate_output(),
            Err(CliError::Validation(ValidationError::NoCharacterClassSelected))
        ));
    }

    /// Accepts `ok_writes` writes, then fails every call with `kind`.
    struct FailingWriter {
        ok_writes: usize,
        writes: usize,
        kind: io::ErrorKind,
    }

    impl FailingWriter {
        fn new(ok_writes: usize, kind: io::ErrorKind) -> Self {
            Self {
                ok_writes,
                writes: 0,
                kind,
            }
        }
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.writes += 1;
            if self.writes > self.ok_writes {
                return Err(io::Error::from(self.kind));
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            if self.writes > self.ok_writes {
                return Err(io::Error::from(self.kind));
            }
            Ok(())
        }
    }

    #[test]
    fn writes_one_line_per_password() {
        let mut ctx = context(&["-l", "12", "-n", "3", "-S"]);
        ctx.apply_flags().unwrap();
        let mut out = Vec::new();
        ctx.write_passwords(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in lines {
            let (password, label) = line.split_once('\t').unwrap();
            assert_eq!(password.chars().count(), 12);
            assert_eq!(label, classify(password).label.to_string());
        }
    }

    #[test]
    fn closed_reader_stops_generation() {
        let mut ctx = context(&["-l", "8", "-n", "100000"]);
        ctx.apply_flags().unwrap();
        let mut out = FailingWriter::new(1, io::ErrorKind::BrokenPipe);

        assert!(ctx.write_passwords(&mut out).is_ok());
        assert_eq!(out.writes, 2);
    }

    #[test]
    fn write_failure_is_reported() {
        let mut ctx = context(&["-n", "5"]);
        ctx.apply_flags().unwrap();
        let mut out = FailingWriter::new(0, io::ErrorKind::StorageFull);

        match ctx.write_passwords(&mut out) {
            Err(CliError::Output(e)) => assert_eq!(e.kind(), io::ErrorKind::StorageFull),
            other => panic!("expected output error, got {other:?}"),
        }
        assert_eq!(out.writes, 1);
    }

    #[test]
    fn oversized_clipboard_batch_is_refused() {
        let mut ctx = context(&["-b", "-n", "10001"]);
        assert!(matches!(
            ctx.apply_flags(),
            Err(CliError::BatchTooLarge { count: 10_001, max: MAX_CLIPBOARD_BATCH })
        ));
        assert!(ctx.clipboard.is_none());
    }

    #[test]
    fn out_of_range_length_is_not_saved() {
        let mut ctx = context(&["-l", "300", "--save"]);
        ctx.apply_flags().unwrap();
        assert!(matches!(
            ctx.save_if_requested(),
            Err(CliError::Validation(ValidationError::InvalidLength { .. }))
        ));
    }
}
