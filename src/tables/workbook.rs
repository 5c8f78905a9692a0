//! Document access - opening tariff workbooks and resolving which file to
//! open in the first place.
//!
//! Format detection is delegated to calamine, so `.ods`, `.xlsx`, `.xls` and
//! `.xlsb` exports all work without the caller caring which one the ministry
//! published this year.

use crate::error::{PriplatekError, PriplatekResult};
use crate::tables::locator::{locate_rate_table, SheetSource};
use crate::types::ClassMaxima;
use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name the tool looks for when no document is given on the command
/// line.
pub const DEFAULT_DOCUMENT: &str = "platove-tabulky-2025.ods";

/// An opened tariff document.
pub struct TariffWorkbook {
    sheets: Sheets<BufReader<File>>,
}

impl std::fmt::Debug for TariffWorkbook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TariffWorkbook").finish_non_exhaustive()
    }
}

impl TariffWorkbook {
    /// Open a spreadsheet, auto-detecting the format from its content.
    pub fn open(path: &Path) -> PriplatekResult<Self> {
        let sheets = open_workbook_auto(path).map_err(|source| PriplatekError::WorkbookOpen {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "workbook opened");
        Ok(Self { sheets })
    }
}

impl SheetSource for TariffWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names().to_vec()
    }

    fn sheet_range(&mut self, name: &str) -> PriplatekResult<Range<Data>> {
        self.sheets
            .worksheet_range(name)
            .map_err(|source| PriplatekError::SheetRead {
                sheet: name.to_string(),
                source,
            })
    }
}

/// Open `path` and locate the rate table inside it.
pub fn load_rate_table(path: &Path) -> PriplatekResult<ClassMaxima> {
    let mut workbook = TariffWorkbook::open(path)?;
    let maxima = locate_rate_table(&mut workbook)?;
    info!(
        path = %path.display(),
        sheet = maxima.sheet(),
        classes = maxima.len(),
        "rate table loaded"
    );
    Ok(maxima)
}

/// Decide which document to open.
///
/// An explicit path is taken as-is and must exist. Without one the default
/// document name is tried in the working directory first and next to the
/// executable second, which covers both "run from the data directory" and
/// "ship the binary alongside the tables" setups.
pub fn resolve_document(explicit: Option<&Path>) -> PriplatekResult<PathBuf> {
    if let Some(path) = explicit {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        return Err(PriplatekError::DocumentNotFound(path.to_path_buf()));
    }

    let in_cwd = PathBuf::from(DEFAULT_DOCUMENT);
    if in_cwd.exists() {
        return Ok(in_cwd);
    }

    if let Some(beside_exe) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_DOCUMENT)))
    {
        if beside_exe.exists() {
            return Ok(beside_exe);
        }
    }

    Err(PriplatekError::DocumentNotFound(in_cwd))
}
