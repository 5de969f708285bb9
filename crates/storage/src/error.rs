use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReceiptError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid purchase date: {0}")]
    InvalidDate(String),

    #[error("Invalid purchase time: {0}")]
    InvalidTime(String),

    #[error("Points total does not fit in an unsigned 64-bit integer")]
    PointsOverflow,
}

pub type Result<T> = std::result::Result<T, ReceiptError>;

