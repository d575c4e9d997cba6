use std::env;
use std::process::ExitCode;

mod cli;
mod clipboard;
mod exits;
mod logging;
mod settings;
mod terminal;
mod tui;

fn main() -> ExitCode {
    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();

    if env::args_os().len() > 1 {
        return cli::run();
    }

    if let Err(e) = logging::init(logging::tui_filter()) {
        eprintln!("{e}");
    }
    match tui::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: terminal input unavailable: {e}");
            ExitCode::FAILURE
        }
    }
}
