use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while talking to a Healthcare API FHIR store
#[derive(Debug, Error)]
pub enum HealthcareError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Resource is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("Invalid resource: {0}")]
    InvalidResource(String),

    #[error("Failed to read fixture {}: {source}", path.display())]
    Fixture {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("HTTP request failed: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Healthcare API error ({status}): {message}")]
    Status { status: u16, message: String },
}

impl HealthcareError {
    /// HTTP status of a rejected request, if this error came from one
    pub fn status(&self) -> Option<u16> {
        match self {
            HealthcareError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T, E = HealthcareError> = std::result::Result<T, E>;
