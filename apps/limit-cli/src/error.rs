//! # CLI Error Type
//!
//! Unified error type for the command-line boundary.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in limit-cli                              │
//! │                                                                         │
//! │  malformed JSON ───────────── BadRequest ──────┐                        │
//! │  ValidationError ─ CoreError::InvalidInput ────┼──► exit 2  (client)    │
//! │                                                │                        │
//! │  CoreError::Computation ───────────────────────┼──► exit 70 (server)    │
//! │  io / serialization failure ── Internal ───────┤                        │
//! │                                                │                        │
//! │  ConfigError ──────────────────────────────────┴──► exit 78 (config)    │
//! │                                                                         │
//! │  stderr: { "code": "VALIDATION_ERROR", "message": "..." }              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use furusato_core::CoreError;
use serde::Serialize;

use crate::config::ConfigError;

/// Exit code for malformed or invalid requests.
pub const EXIT_CLIENT_ERROR: u8 = 2;

/// Exit code for computation and internal faults (sysexits `EX_SOFTWARE`).
pub const EXIT_SERVER_ERROR: u8 = 70;

/// Exit code for bad configuration (sysexits `EX_CONFIG`).
pub const EXIT_CONFIG_ERROR: u8 = 78;

/// Everything that can go wrong at the boundary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Malformed request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize response: {0}")]
    Serialize(serde_json::Error),
}

/// Machine-readable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Body is not a well-formed request (400)
    BadRequest,

    /// Request failed validation (400)
    ValidationError,

    /// The pipeline hit an undefined computation (500)
    ComputationError,

    /// Configuration could not be loaded
    ConfigError,

    /// Anything else (500)
    Internal,
}

/// What is written to stderr when a request fails.
///
/// ```json
/// { "code": "VALIDATION_ERROR", "message": "Invalid input: annualIncome must not be negative (got -1)" }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
}

impl CliError {
    /// The machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            CliError::BadRequest(_) => ErrorCode::BadRequest,
            CliError::Core(CoreError::InvalidInput(_)) => ErrorCode::ValidationError,
            CliError::Core(CoreError::Computation { .. }) => ErrorCode::ComputationError,
            CliError::Config(_) => ErrorCode::ConfigError,
            CliError::Io(_) | CliError::Serialize(_) => ErrorCode::Internal,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self.code() {
            ErrorCode::BadRequest | ErrorCode::ValidationError => EXIT_CLIENT_ERROR,
            ErrorCode::ComputationError | ErrorCode::Internal => EXIT_SERVER_ERROR,
            ErrorCode::ConfigError => EXIT_CONFIG_ERROR,
        }
    }

    /// Serializable form of this error.
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

impl From<furusato_core::ValidationError> for CliError {
    fn from(err: furusato_core::ValidationError) -> Self {
        CliError::Core(CoreError::InvalidInput(err))
    }
}
