//! Error types for the poster-gen CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for poster generation.
///
/// Every variant is fatal to the current run. Missing optional inputs (such as
/// a product screenshot that cannot be found) never surface as errors.
#[derive(Error, Debug)]
pub enum PosterError {
    /// No API key from the flag, the environment, or any config file.
    #[error(
        "no API key found; pass --api-key, set GEMINI_API_KEY, or add one to ~/.config/bxz-poster-gen/config.ini"
    )]
    MissingApiKey,

    /// The user declined the confirmation prompt.
    #[error("cancelled by user")]
    Cancelled,

    /// The input record is malformed or fails validation.
    #[error("invalid poster request: {0}")]
    InvalidRequest(String),

    /// A prompt template failed to render.
    #[error("prompt template error: {0}")]
    Template(String),

    /// Transport, status, or decoding failure talking to the image API.
    #[error("image API call failed: {0}")]
    Api(String),

    /// The API answered successfully but carried no inline image data.
    #[error("image API response contained no image data")]
    EmptyResponse,

    /// Decoding, stacking, or encoding the generated panels failed.
    #[error("image composition failed: {0}")]
    Compose(String),

    /// Filesystem operation failed.
    #[error("{0}")]
    Io(String),
}

impl PosterError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        exit_codes::FAILURE
    }

    /// Returns true when the failure happened while talking to the image API.
    pub fn is_generation_failure(&self) -> bool {
        matches!(self, PosterError::Api(_) | PosterError::EmptyResponse)
    }
}

/// Result type alias for poster-gen operations.
pub type Result<T> = std::result::Result<T, PosterError>;
