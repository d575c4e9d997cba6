//! Interactive TUI menus.

mod input;
mod options;
mod session;
mod text;

pub use input::*;
pub use options::*;
pub use text::*;

/// Run TUI interactive mode.
pub fn run() -> std::io::Result<()> {
    gen_main_menu()
}
