#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error("Ingestion failed with: {0}")]
    Ingestion(String),

    #[error("Amount is not numeric: {0:?}")]
    InvalidAmount(String),

    #[error("Amount is out of range: {0:?}")]
    AmountOutOfRange(String),

    #[error("Balance would overflow")]
    Overflow,

    #[error("Notification failed with: {0}")]
    Notification(String),

    #[error("Invalid value for {key}: {message}")]
    Config { key: String, message: String },
}
