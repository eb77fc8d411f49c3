/// Classified failures of invoice operations
#[derive(Debug, thiserror::Error)]
pub enum InvoiceError {
    #[error("invalid invoice id: {0}")]
    InvalidId(String),

    #[error("invoice not found")]
    NotFound,

    #[error("validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
