//! Error handling for the offer recorder
//!
//! Defines the failure kinds the collector and store can raise and keeps
//! a unified Result type using anyhow for context chaining.

use thiserror::Error;

/// Core error types for offer collection and storage
#[derive(Error, Debug)]
pub enum OfferError {
    #[error("could not parse {field} from {input:?}")]
    Parse { field: &'static str, input: String },

    #[error("input closed before 'done' was entered")]
    InputClosed,

    #[error("io error")]
    Io(#[from] std::io::Error),
}

/// Result type alias for offer operations
pub type Result<T> = anyhow::Result<T>;
