use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF error: {0}")]
    Pdf(#[from] pdf_extract::OutputError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("watch error: {0}")]
    Watch(#[from] notify::Error),

    #[error("{0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
