//! Global quiet mode state for CLI.

use std::sync::atomic::{AtomicBool, Ordering};

/// Suppresses warnings and prompts
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

pub fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

/// Skip interactive prompts when quiet or when stdin is not a tty.
pub fn skip_prompt() -> bool {
    enabled() || !is_interactive()
}
