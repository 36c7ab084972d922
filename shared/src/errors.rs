//! Shared error types for the tender dashboard

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("Invalid offer for vendor '{vendor}': {reason}")]
    InvalidOffer { vendor: String, reason: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
