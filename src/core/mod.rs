//! Core calculation - the allowance formula and its input validation

pub mod allowance;

pub use allowance::{personal_allowance, FTE_MAX, FTE_MIN, PERCENT_MAX, PERCENT_MIN};
