use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardViewError>;

#[derive(Debug, Error)]
pub enum BoardViewError {
    #[error("Card not found: {0}")]
    CardNotFound(String),

    #[error("Property not found: {0}")]
    PropertyNotFound(String),

    #[error("Property option not found: {0}")]
    OptionNotFound(String),

    #[error("Property {0} is not a select property")]
    NotSelectProperty(String),

    #[error("No grouping property is active for this view")]
    NoGroupingProperty,

    #[error("Invalid card ID format: {0}")]
    InvalidCardId(String),

    #[error("Mutation '{label}' was rejected: {reason}")]
    DispatchFailed { label: String, reason: String },

    #[error("Board not initialized")]
    BoardNotInitialized,

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("{0}")]
    Other(String),
}
