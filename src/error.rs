use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Unknown payment status given: '{0}'")]
    InvalidStatus(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Unknown payment: '{0}'")]
    UnknownPayment(String),
    #[error("Payment '{0}' already exists")]
    DuplicatePayment(String),
    #[error("Payment '{payment}' has no transaction '{transaction}'")]
    UnknownTransaction { payment: String, transaction: String },
    #[error("Payment '{payment}' already has a transaction '{transaction}'")]
    DuplicateTransaction { payment: String, transaction: String },
    #[error("Transaction '{transaction}' of payment '{payment}' is not being processed")]
    TransactionNotProcessing { payment: String, transaction: String },
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),
    #[error("Payment '{0}' already has a transaction in flight")]
    TransactionInFlight(String),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
