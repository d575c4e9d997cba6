//! Tracing subscriber setup. Logs always go to stderr so passwords on
//! stdout stay pipeable.

use std::io::stderr;

use tracing_subscriber::{
    EnvFilter,
    filter::ParseError,
    fmt::layer,
    layer::SubscriberExt,
    registry,
    util::{SubscriberInitExt, TryInitError},
};

pub const ENV_VAR: &str = "PASSGAUGE_LOG";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to initialize logging: {0}")]
    Init(#[from] TryInitError),

    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),
}

pub fn init<F: Into<String>>(filter: F) -> Result<(), Error> {
    let filter = EnvFilter::builder().parse(filter.into())?;
    let sub = layer().with_writer(stderr).with_target(false);
    registry().with(filter).with(sub).try_init()?;
    Ok(())
}

/// Filter for interactive mode: silent unless asked for, since log lines
/// would tear the menu.
pub fn tui_filter() -> String {
    std::env::var(ENV_VAR).unwrap_or_else(|_| "off".into())
}
