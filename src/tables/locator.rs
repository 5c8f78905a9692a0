//! Rate-table discovery - finds the class/degree tariff grid inside an
//! arbitrarily laid-out spreadsheet.
//!
//! The tables ship as human-edited exports: title sheets, legend sheets and
//! merged-cell artifacts surround the one grid that matters. Nothing about a
//! sheet is trusted up front; each sheet is probed through a pipeline of
//! structural gates and the first one that passes all of them wins.

use crate::error::{PriplatekError, PriplatekResult};
use crate::types::{
    ClassMaxima, ACCEPTANCE_THRESHOLD, CLASS_HEADER_COLUMN, CLASS_MAX, CLASS_MIN,
    MIN_CLASS_HEADERS, MIN_SHEET_COLUMNS, MIN_SHEET_ROWS, REFERENCE_DEGREE,
};
use calamine::{Data, Range};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Source of sheets for the locator: an ordered list of sheet names plus the
/// ability to materialize any sheet as a cell grid. Implemented by
/// [`TariffWorkbook`](crate::tables::TariffWorkbook) for real documents and
/// by in-memory fakes in tests.
pub trait SheetSource {
    /// Sheet names in document order.
    fn sheet_names(&self) -> Vec<String>;

    /// Materialize one sheet as a grid of typed cells.
    fn sheet_range(&mut self, name: &str) -> PriplatekResult<Range<Data>>;
}

/// Scan the document sheet by sheet and return the first grid that looks
/// like the class/degree rate table, reduced to class -> tariff at the
/// reference degree.
///
/// Sheets that cannot be read are skipped, not fatal: a single scan either
/// produces an accepted mapping or exhausts the document and fails with
/// [`PriplatekError::TableNotFound`].
pub fn locate_rate_table<S: SheetSource>(source: &mut S) -> PriplatekResult<ClassMaxima> {
    for name in source.sheet_names() {
        let grid = match source.sheet_range(&name) {
            Ok(grid) => grid,
            Err(err) => {
                debug!(sheet = %name, error = %err, "sheet not readable, skipping");
                continue;
            }
        };

        if let Some(maxima) = scan_grid(&name, &grid) {
            debug!(sheet = %name, classes = maxima.len(), "rate table accepted");
            return Ok(maxima);
        }
    }

    Err(PriplatekError::TableNotFound)
}

/// Probe a single materialized sheet. `None` means "not the rate table";
/// the reason is logged, never raised.
fn scan_grid(name: &str, grid: &Range<Data>) -> Option<ClassMaxima> {
    let (rows, columns) = grid.get_size();

    // Gate 1: shape. Too narrow or too short to hold classes 1-16 over
    // degrees 1-12.
    if columns < MIN_SHEET_COLUMNS || rows < MIN_SHEET_ROWS {
        trace!(sheet = %name, rows, columns, "sheet too small, skipping");
        return None;
    }

    // Gate 2: the header row. Class numbers sit in row 0 from column 2 on;
    // columns 0 and 1 carry row labels and units. Cells that do not convert
    // are tolerated - a partially corrupted header still counts.
    let mut numeric_headers = 0usize;
    let mut class_columns: BTreeMap<u8, usize> = BTreeMap::new();
    for column in CLASS_HEADER_COLUMN..columns {
        let Some(value) = grid.get((0, column)).and_then(cell_as_int) else {
            continue;
        };
        numeric_headers += 1;
        // Only plausible class numbers enter the index; a duplicate header
        // overwrites, so the right-most occurrence of a class wins.
        if let Ok(class) = u8::try_from(value) {
            if (CLASS_MIN..=CLASS_MAX).contains(&class) {
                class_columns.insert(class, column);
            }
        }
    }
    if numeric_headers < MIN_CLASS_HEADERS {
        debug!(
            sheet = %name,
            numeric_headers,
            "header row has too few class numbers, skipping"
        );
        return None;
    }

    // Gate 3: the reference-degree row.
    let Some(degree_row) = find_degree_row(grid, REFERENCE_DEGREE) else {
        debug!(sheet = %name, degree = REFERENCE_DEGREE, "no degree row, skipping");
        return None;
    };

    // Extraction: one tariff per indexed class. Empty or unparseable cells
    // drop that class only - the acceptance gate decides whether enough
    // survived.
    let mut amounts: BTreeMap<u8, i64> = BTreeMap::new();
    for (&class, &column) in &class_columns {
        let Some(tariff) = grid
            .get((degree_row, column))
            .and_then(cell_as_float)
            .filter(|tariff| tariff.is_finite())
        else {
            trace!(sheet = %name, class, column, "no tariff value for class");
            continue;
        };
        amounts.insert(class, tariff as i64);
    }

    // Gate 4: acceptance. Lookalike grids (calendar sheets, percentage
    // matrices) rarely yield ten classes with values.
    if amounts.len() < ACCEPTANCE_THRESHOLD {
        debug!(
            sheet = %name,
            classes = amounts.len(),
            threshold = ACCEPTANCE_THRESHOLD,
            "too few classes with values, skipping"
        );
        return None;
    }

    Some(ClassMaxima::new(name.to_string(), amounts))
}

/// Row whose column-0 cell equals `degree`. Integer cells are matched in a
/// first pass, float cells (`12.0` instead of `12`) in a second, so an exact
/// integer row is always preferred regardless of position.
fn find_degree_row(grid: &Range<Data>, degree: i64) -> Option<usize> {
    let (rows, _) = grid.get_size();
    (0..rows)
        .find(|&row| matches!(grid.get((row, 0)), Some(Data::Int(n)) if *n == degree))
        .or_else(|| {
            (0..rows).find(|&row| {
                matches!(grid.get((row, 0)), Some(Data::Float(f)) if *f == degree as f64)
            })
        })
}

/// Total integer reading of a cell: `None` for anything that is not a whole
/// number in disguise. Finite floats truncate; text must parse as a plain
/// decimal integer.
fn cell_as_int(cell: &Data) -> Option<i64> {
    match cell {
        Data::Int(n) => Some(*n),
        Data::Float(f) if f.is_finite() => Some(*f as i64),
        Data::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Total float reading of a cell, the value-side counterpart of
/// [`cell_as_int`].
fn cell_as_float(cell: &Data) -> Option<f64> {
    match cell {
        Data::Int(n) => Some(*n as f64),
        Data::Float(f) => Some(*f),
        Data::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
