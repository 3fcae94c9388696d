use thiserror::Error;

#[derive(Error, Debug)]
pub enum RekapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Statement is missing the '{0}' column (check the export format)")]
    MissingColumn(String),

    #[error("Unsupported statement format: {0} (expected .xlsx or .csv)")]
    UnsupportedFormat(String),

    #[error("No transaction rows found below the header row")]
    EmptyStatement,

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, RekapError>;
