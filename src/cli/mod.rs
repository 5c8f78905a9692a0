//! Console commands - the user-facing shell around locating and calculating

mod commands;

pub use commands::{calculate, interactive, parse_decimal, show};
