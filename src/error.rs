//! Error types for Switchyard
//!
//! Uses `thiserror` for library errors. One variant per failure class;
//! policy can change the class of a failure, not only its message.

use thiserror::Error;

/// Result type alias for Switchyard operations
pub type SwitchyardResult<T> = Result<T, SwitchyardError>;

/// Main error type for Switchyard operations
#[derive(Error, Debug)]
pub enum SwitchyardError {
    /// Broken or incomplete workflow configuration. Always fatal.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Malformed or empty run input (labels, branch mapping). Reported as a
    /// failure, never raised past a use-case boundary.
    #[error("{message}")]
    InputValidation { message: String },

    /// Safety gate hard failure under strict policy. Carries the full
    /// formatted multi-line block for CI display.
    #[error("{message}")]
    SafetyViolation { message: String },

    /// A git command, filesystem check, or code-host call failed.
    #[error("{component}: {message}")]
    ExternalOperation { component: String, message: String },
}

impl SwitchyardError {
    /// Configuration failure with the given message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Input validation failure with the given message.
    pub fn input(message: impl Into<String>) -> Self {
        Self::InputValidation {
            message: message.into(),
        }
    }

    /// External operation failure tagged with the originating component.
    pub fn external(component: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExternalOperation {
            component: component.into(),
            message: message.into(),
        }
    }
}
