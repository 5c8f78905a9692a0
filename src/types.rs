use serde::Serialize;
use std::collections::BTreeMap;

//==============================================================================
// Domain constants
//==============================================================================

/// Lowest pay class (platová třída) the tariff tables define.
pub const CLASS_MIN: u8 = 1;

/// Highest pay class the tariff tables define.
pub const CLASS_MAX: u8 = 16;

/// Pay degree (platový stupeň) whose tariff is the 100 % allowance ceiling.
pub const REFERENCE_DEGREE: i64 = 12;

/// Sheets narrower than this cannot hold a class table and are skipped
/// without parsing.
pub const MIN_SHEET_COLUMNS: usize = 10;

/// Sheets shorter than this cannot hold a degree table and are skipped
/// without parsing.
pub const MIN_SHEET_ROWS: usize = 5;

/// First grid column that may carry a class-number header. Columns 0 and 1
/// are label/unit columns in every known layout.
pub const CLASS_HEADER_COLUMN: usize = 2;

/// A header row must convert to at least this many integers to count as a
/// class header row rather than an incidental numeric row.
pub const MIN_CLASS_HEADERS: usize = 5;

/// A scanned sheet is accepted once at least this many classes carry a
/// tariff value. Distinguishes the genuine rate table from lookalike grids.
pub const ACCEPTANCE_THRESHOLD: usize = 10;

//==============================================================================
// Located rate table
//==============================================================================

/// The located rate table: monthly tariff at the reference degree, per pay
/// class, in whole crowns.
///
/// Built once per successful scan and immutable afterwards. Every key is
/// within [`CLASS_MIN`]..=[`CLASS_MAX`] and at least [`ACCEPTANCE_THRESHOLD`]
/// classes are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassMaxima {
    /// Name of the sheet the table was found on.
    sheet: String,
    /// Class number -> tariff in whole crowns, sorted by class.
    amounts: BTreeMap<u8, i64>,
}

impl ClassMaxima {
    pub(crate) fn new(sheet: String, amounts: BTreeMap<u8, i64>) -> Self {
        Self { sheet, amounts }
    }

    /// Sheet the table was located on.
    pub fn sheet(&self) -> &str {
        &self.sheet
    }

    /// Tariff for `class`, if the located table carries it.
    pub fn amount(&self, class: u8) -> Option<i64> {
        self.amounts.get(&class).copied()
    }

    pub fn contains(&self, class: u8) -> bool {
        self.amounts.contains_key(&class)
    }

    /// Classes present in the table, ascending.
    pub fn classes(&self) -> impl Iterator<Item = u8> + '_ {
        self.amounts.keys().copied()
    }

    /// Class/tariff pairs, ascending by class.
    pub fn iter(&self) -> impl Iterator<Item = (u8, i64)> + '_ {
        self.amounts.iter().map(|(class, amount)| (*class, *amount))
    }

    /// Number of classes present.
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}

//==============================================================================
// Computed allowance
//==============================================================================

/// One computed personal allowance, inputs included for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Allowance {
    /// Pay class the amount was computed for.
    pub class: u8,
    /// Tariff at the reference degree, i.e. the 100 % ceiling in crowns.
    pub base: i64,
    /// Chosen allowance as a percentage of the ceiling, 0-100.
    pub percent: f64,
    /// Workload as a percentage of full time, 1-200.
    pub fte: f64,
    /// Monthly amount in crowns, unrounded.
    pub amount: f64,
}
