//! Password pool building, generation, and strength scoring.

pub mod charset;
pub mod entropy;
pub mod generate;
pub mod strength;
