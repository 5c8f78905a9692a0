//! Workbook tests against real spreadsheet files
//!
//! Fixtures are generated with rust_xlsxwriter into a temp directory and
//! read back through the production calamine path, so format detection,
//! sheet ordering and cell typing are exercised for real.

use priplatek::error::PriplatekError;
use priplatek::tables::{
    load_rate_table, resolve_document, SheetSource, TariffWorkbook, DEFAULT_DOCUMENT,
};
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Degree-12 tariffs for classes 1..=16, the values the locator must
/// recover from the fixture.
const DEGREE_12_TARIFFS: [i64; 16] = [
    16_390, 17_370, 18_590, 19_960, 21_590, 23_350, 25_280, 27_370, 29_620, 32_060, 34_700,
    38_110, 41_840, 45_920, 50_410, 55_340,
];

/// Write a realistic tariff workbook: a title sheet, a notes sheet, then
/// the rate table. `classes_in_degree_12` limits which classes get a value
/// in the degree-12 row, so sparse tables can be produced too.
fn write_fixture(path: &Path, classes_in_degree_12: u8) {
    let mut workbook = Workbook::new();

    let intro = workbook.add_worksheet();
    intro.set_name("Úvod").unwrap();
    intro.write_string(0, 0, "Platové tabulky 2025").unwrap();
    intro.write_string(1, 0, "příloha č. 1").unwrap();

    let notes = workbook.add_worksheet();
    notes.set_name("Poznámky").unwrap();
    for row in 0..6u32 {
        for col in 0..12u16 {
            notes.write_string(row, col, "viz nařízení vlády").unwrap();
        }
    }

    let table = workbook.add_worksheet();
    table.set_name("Tabulka 1").unwrap();
    table.write_string(0, 0, "Platový stupeň").unwrap();
    table.write_string(0, 1, "Počet let praxe").unwrap();
    for class in 1..=16u16 {
        table.write_number(0, class + 1, f64::from(class)).unwrap();
    }
    for degree in 1..=12u32 {
        table.write_number(degree, 0, f64::from(degree)).unwrap();
        table
            .write_string(degree, 1, format!("do {} let", degree * 2))
            .unwrap();
        for class in 1..=16u16 {
            if degree == 12 && class as u8 > classes_in_degree_12 {
                continue;
            }
            let tariff = DEGREE_12_TARIFFS[class as usize - 1] as f64
                - f64::from(12 - degree) * 700.0;
            table.write_number(degree, class + 1, tariff).unwrap();
        }
    }

    workbook.save(path).unwrap();
}

// ═══════════════════════════════════════════════════════════════════════════
// LOADING
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_load_rate_table_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tabulky.xlsx");
    write_fixture(&path, 16);

    let maxima = load_rate_table(&path).expect("fixture should contain a rate table");

    assert_eq!(maxima.sheet(), "Tabulka 1", "decoy sheets should be passed over");
    assert_eq!(maxima.len(), 16);
    for (class, expected) in (1u8..).zip(DEGREE_12_TARIFFS) {
        assert_eq!(
            maxima.amount(class),
            Some(expected),
            "class {class} tariff should survive the spreadsheet round trip"
        );
    }
}

#[test]
fn test_load_sparse_table() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sparse.xlsx");
    write_fixture(&path, 11);

    let maxima = load_rate_table(&path).expect("eleven classes pass the acceptance gate");

    assert_eq!(maxima.len(), 11);
    assert!(maxima.contains(11));
    assert!(!maxima.contains(12), "classes without a degree-12 value are absent");
}

#[test]
fn test_document_without_rate_table() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bez-tabulky.xlsx");

    let mut workbook = Workbook::new();
    let intro = workbook.add_worksheet();
    intro.set_name("Úvod").unwrap();
    intro.write_string(0, 0, "Platové tabulky 2025").unwrap();
    workbook.save(&path).unwrap();

    let err = load_rate_table(&path).expect_err("nothing to locate");
    assert!(matches!(err, PriplatekError::TableNotFound));
}

// ═══════════════════════════════════════════════════════════════════════════
// OPENING
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_sheet_names_keep_workbook_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tabulky.xlsx");
    write_fixture(&path, 16);

    let workbook = TariffWorkbook::open(&path).expect("fixture should open");
    assert_eq!(workbook.sheet_names(), vec!["Úvod", "Poznámky", "Tabulka 1"]);
}

#[test]
fn test_open_unreadable_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tabulky.xlsx");
    std::fs::write(&path, b"<html>not a spreadsheet</html>").unwrap();

    let err = TariffWorkbook::open(&path).expect_err("garbage should not open");
    assert!(matches!(err, PriplatekError::WorkbookOpen { .. }));
}

// ═══════════════════════════════════════════════════════════════════════════
// DOCUMENT RESOLUTION
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_default_document_beside_the_executable() {
    let exe_dir = std::env::current_exe()
        .expect("test binary path")
        .parent()
        .expect("binary has a parent directory")
        .to_path_buf();
    let beside_exe = exe_dir.join(DEFAULT_DOCUMENT);
    std::fs::write(&beside_exe, b"placeholder").unwrap();

    // Only the copy next to the executable exists.
    let resolved_exe_only = resolve_document(None);

    // With a copy in the working directory as well, that one wins.
    let in_cwd = PathBuf::from(DEFAULT_DOCUMENT);
    std::fs::write(&in_cwd, b"placeholder").unwrap();
    let resolved_both = resolve_document(None);

    std::fs::remove_file(&beside_exe).unwrap();
    std::fs::remove_file(&in_cwd).unwrap();

    assert_eq!(
        resolved_exe_only.expect("copy beside the executable should resolve"),
        beside_exe
    );
    assert_eq!(
        resolved_both.expect("copy in the working directory should resolve"),
        in_cwd,
        "working directory should take precedence over the executable directory"
    );
}
