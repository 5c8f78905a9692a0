//! Priplatek - osobní příplatek calculator over the Czech pay tables
//!
//! This library locates the class/degree rate table inside the official
//! pay-table spreadsheet (an untrusted, human-edited document of unknown
//! layout) and computes the personal allowance from the located ceilings.
//!
//! # Features
//!
//! - Heuristic rate-table discovery across arbitrarily laid-out sheets
//! - Container-format agnostic input (.ods, .xlsx, .xls, .xlsb)
//! - Pay classes 1-16, ceiling taken at pay degree 12
//! - Allowance formula with validated percent and workload inputs
//!
//! # Example
//!
//! ```no_run
//! use priplatek::core::personal_allowance;
//! use priplatek::tables::load_rate_table;
//! use std::path::Path;
//!
//! let maxima = load_rate_table(Path::new("platove-tabulky-2025.ods"))?;
//! println!("found {} classes on sheet {}", maxima.len(), maxima.sheet());
//!
//! let allowance = personal_allowance(&maxima, 12, 20.0, 100.0)?;
//! println!("monthly allowance: {:.0} Kč", allowance.amount);
//! # Ok::<(), priplatek::error::PriplatekError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod tables;
pub mod types;

// Re-export commonly used types
pub use error::{PriplatekError, PriplatekResult};
pub use types::{Allowance, ClassMaxima};
