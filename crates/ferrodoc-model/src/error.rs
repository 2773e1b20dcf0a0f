//! Error types for loading documents.
//!
//! Rendering itself cannot fail; errors only arise when reading a document
//! from an external source.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
