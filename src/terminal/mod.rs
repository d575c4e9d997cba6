//! Shared terminal utilities.
//!
//! Box drawing, the strength meter, theme colours, raw mode management.

mod output;
mod raw_mode;

pub use output::*;
pub use raw_mode::*;
