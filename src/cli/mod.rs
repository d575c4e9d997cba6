//! Non-interactive mode.

mod args;
mod context;
mod prompts;
mod quiet;

use std::process::ExitCode;

use clap::Parser;

pub use args::Args;
pub use context::{CliError, Context};

use crate::logging;

pub fn run() -> ExitCode {
    let args = Args::parse();
    quiet::set(args.quiet);

    let filter = if args.quiet { "off" } else { args.log.as_str() };
    if let Err(e) = logging::init(filter) {
        prompts::warn(&e.to_string());
    }

    match Context::new(args).and_then(|mut ctx| ctx.run()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Aborted) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "cli run failed");
            prompts::error(&format!("Error: {e}"));
            ExitCode::FAILURE
        }
    }
}
