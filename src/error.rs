use std::path::PathBuf;
use thiserror::Error;

pub type PriplatekResult<T> = Result<T, PriplatekError>;

#[derive(Error, Debug)]
pub enum PriplatekError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("tariff document not found: {0}")]
    DocumentNotFound(PathBuf),

    #[error("cannot open spreadsheet {path}: {source}")]
    WorkbookOpen {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("cannot read sheet '{sheet}': {source}")]
    SheetRead {
        sheet: String,
        #[source]
        source: calamine::Error,
    },

    #[error("rate table not locatable; the document may be malformed or have an unexpected layout")]
    TableNotFound,

    #[error("pay class {0} is not present in the located rate table")]
    ClassNotFound(u8),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{what} {value} is out of range, expected {min} to {max}")]
    OutOfRange {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl PriplatekError {
    /// Process exit code reported by the shell, kept stable for scripts:
    /// 2 missing document, 3 unusable document, 4 class not in the table.
    pub fn exit_code(&self) -> u8 {
        match self {
            PriplatekError::DocumentNotFound(_) => 2,
            PriplatekError::WorkbookOpen { .. } | PriplatekError::TableNotFound => 3,
            PriplatekError::ClassNotFound(_) => 4,
            _ => 1,
        }
    }
}
