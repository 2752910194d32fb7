use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to decode {field} of {event}: {message}")]
    Decode {
        event: String,
        field: &'static str,
        message: String,
    },

    #[error("Missing field {field} in {event}")]
    MissingField { event: String, field: &'static str },

    #[error("Invalid field {field} in {event}")]
    InvalidField { event: String, field: &'static str },

    #[error("Removal index {index} out of range for {len} selected mutators")]
    RemovalOutOfRange { index: usize, len: usize },

    #[error("Catalog index {index} out of range for {len} catalog entries")]
    CatalogIndexOutOfRange { index: usize, len: usize },

    #[error("Invalid mutator tables: {0}")]
    Tables(String),

    #[error("Failed to parse event on line {line}: {source}")]
    EventParse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
