//! Tariff-table handling: workbook access and rate-table discovery
//!
//! Two layers:
//! - `workbook`: opening documents and deciding which file to open
//! - `locator`: scanning sheets for the class/degree rate table

pub mod locator;
pub mod workbook;

pub use locator::{locate_rate_table, SheetSource};
pub use workbook::{load_rate_table, resolve_document, TariffWorkbook, DEFAULT_DOCUMENT};
