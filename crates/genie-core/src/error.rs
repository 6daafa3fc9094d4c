//! Failure taxonomy and the structured error envelope
//!
//! Every fallible operation propagates errors unmodified to the CLI entry
//! point, which performs a single centralized translation into
//! [`ErrorEnvelope`] before logging and exiting. Typed failures travel
//! through `anyhow::Error` and are recovered here by downcast.

use serde::Serialize;
use thiserror::Error;

/// A single field-level issue attached to a validation failure
#[derive(Debug, Clone, Serialize)]
pub struct FieldIssue {
    pub path: String,
    pub message: String,
}

/// Typed failures raised by the setup workflow
#[derive(Debug, Error)]
pub enum SetupError {
    /// Malformed user input, with per-field details
    #[error("{message}")]
    Validation {
        message: String,
        details: Vec<FieldIssue>,
    },

    /// A precondition violated by calling code
    #[error("{0}")]
    BadRequest(String),

    /// Missing or under-versioned external tool
    #[error("{0}")]
    RequirementNotMet(String),

    /// Target project directory collision
    #[error("{0}")]
    AlreadyExists(String),
}

impl SetupError {
    pub fn validation(message: impl Into<String>, path: impl Into<String>) -> Self {
        let message = message.into();
        Self::Validation {
            details: vec![FieldIssue {
                path: path.into(),
                message: message.clone(),
            }],
            message,
        }
    }
}

/// Extra detail attached to an error body
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ErrorDetails {
    Fields(Vec<FieldIssue>),
    Text(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ErrorDetails>,
}

/// The structured envelope printed on failure: `{ body: { code, message, details? } }`
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub body: ErrorBody,
}

impl ErrorEnvelope {
    /// Translate any propagated error into its envelope.
    ///
    /// In production mode the internal catch-all omits the original error
    /// text; otherwise it is included under `details`.
    pub fn from_error(err: &anyhow::Error, production: bool) -> Self {
        if let Some(setup) = err.downcast_ref::<SetupError>() {
            let body = match setup {
                SetupError::Validation { message, details } => ErrorBody {
                    code: "VALIDATION_ERROR".to_string(),
                    message: message.clone(),
                    details: Some(ErrorDetails::Fields(details.clone())),
                },
                SetupError::BadRequest(message) => ErrorBody {
                    code: "BAD_REQUEST".to_string(),
                    message: message.clone(),
                    details: None,
                },
                SetupError::RequirementNotMet(message) => ErrorBody {
                    code: "Requirement not met".to_string(),
                    message: message.clone(),
                    details: None,
                },
                SetupError::AlreadyExists(message) => ErrorBody {
                    code: "Project Already Exists".to_string(),
                    message: message.clone(),
                    details: None,
                },
            };
            return Self { body };
        }

        Self {
            body: ErrorBody {
                code: "INTERNAL_SERVER_ERROR".to_string(),
                message: "An unexpected error occurred".to_string(),
                details: if production {
                    None
                } else {
                    // `{:#}` includes the whole context chain
                    Some(ErrorDetails::Text(format!("{:#}", err)))
                },
            },
        }
    }

    /// Envelope for the current process, honoring `NODE_ENV`
    pub fn capture(err: &anyhow::Error) -> Self {
        let production = std::env::var("NODE_ENV").is_ok_and(|v| v == "production");
        Self::from_error(err, production)
    }

    /// Render the envelope as pretty JSON for the log surface
    pub fn render(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.body.message.clone())
    }
}
