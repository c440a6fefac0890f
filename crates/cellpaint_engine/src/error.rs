//! Unified error type for cellpaint_engine.
//!
//! Editing actions never fail (invalid operations are ignored by the store);
//! these errors only surface from the fallible leaf utilities.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid hex color: {value}")]
    InvalidHexColor { value: String },

    #[error("Invalid background image data: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    #[error("Parse int error: {0}")]
    ParseInt(#[from] std::num::ParseIntError),
}

/// Result type alias for cellpaint_engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
