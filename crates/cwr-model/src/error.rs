use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown CWR version: {0}")]
    UnknownVersion(String),
    #[error("unknown transaction type: {0}")]
    UnknownTransactionType(String),
    #[error("unknown writer role: {0}")]
    UnknownWriterRole(String),
    #[error("unknown publisher role: {0}")]
    UnknownPublisherRole(String),
    #[error("unknown ACK status code: {0}")]
    UnknownAckStatus(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
