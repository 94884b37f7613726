//! Error types for the income engine.
//!
//! The calculator itself cannot fail on validated input. Every variant here
//! belongs to the layers around it: configuration loading, request
//! validation and the HTTP server.

use thiserror::Error;

/// The main error type for the income engine.
///
/// # Example
///
/// ```
/// use income_engine::error::EngineError;
///
/// let error = EngineError::MissingRequiredField {
///     field: "annual_salary".to_string(),
///     income_type: "annual".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "annual_salary is required when income_type is 'annual'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A service setting read from the environment was invalid.
    #[error("Invalid setting '{key}': {message}")]
    InvalidConfig {
        /// The environment key holding the bad value.
        key: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A field required by the selected income type was absent.
    #[error("{field} is required when income_type is '{income_type}'")]
    MissingRequiredField {
        /// The missing field.
        field: String,
        /// The income type that requires it.
        income_type: String,
    },

    /// A numeric field was outside its permitted range.
    #[error("{field} must be {constraint}, got {value}")]
    OutOfRangeValue {
        /// The offending field.
        field: String,
        /// The value as received.
        value: String,
        /// The range the value must satisfy.
        constraint: String,
    },

    /// The income type was not one of the supported values.
    #[error("Unknown income_type '{value}': expected 'hourly' or 'annual'")]
    UnknownIncomeType {
        /// The value as received.
        value: String,
    },

    /// A breakdown could not be rendered as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The HTTP server could not bind or failed while serving.
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

impl EngineError {
    /// Returns true for errors caused by the caller's input rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            EngineError::MissingRequiredField { .. }
                | EngineError::OutOfRangeValue { .. }
                | EngineError::UnknownIncomeType { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
