//! Error bodies returned by the Healthcare API
//!
//! FHIR interactions that fail return an `OperationOutcome`; failures
//! outside the FHIR layer (auth, unknown store) use the standard Google
//! error envelope instead.

use serde::Deserialize;

/// Severity of the issue
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Fatal,
    Error,
    Warning,
    Information,
}

/// Type of issue
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum IssueType {
    Invalid,
    Structure,
    Required,
    Value,
    Invariant,
    Security,
    Login,
    Expired,
    Forbidden,
    Suppressed,
    Processing,
    NotSupported,
    Duplicate,
    NotFound,
    MultipleMatches,
    Deleted,
    TooLong,
    CodeInvalid,
    Extension,
    TooCostly,
    BusinessRule,
    Conflict,
    Incomplete,
    Transient,
    LockError,
    NoStore,
    Exception,
    Timeout,
    Throttled,
    Informational,
    /// Also stands in for codes this enum does not list
    #[serde(other)]
    Unknown,
}

/// A single issue within an OperationOutcome
#[derive(Debug, Clone, Deserialize)]
pub struct OperationOutcomeIssue {
    pub severity: IssueSeverity,
    pub code: IssueType,
    #[serde(default)]
    pub diagnostics: Option<String>,
}

/// FHIR OperationOutcome resource (the subset the store returns)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationOutcome {
    pub resource_type: String,
    #[serde(default)]
    pub issue: Vec<OperationOutcomeIssue>,
}

impl OperationOutcome {
    /// Parse a response body, accepting only actual OperationOutcomes
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str::<Self>(body)
            .ok()
            .filter(|o| o.resource_type == "OperationOutcome")
    }

    /// One-line description built from the issues
    pub fn summary(&self) -> String {
        let parts: Vec<String> = self
            .issue
            .iter()
            .map(|i| match &i.diagnostics {
                Some(d) => d.clone(),
                None => format!("{:?}", i.code).to_lowercase(),
            })
            .collect();
        if parts.is_empty() {
            "OperationOutcome without issues".to_string()
        } else {
            parts.join("; ")
        }
    }
}

/// Standard Google API error envelope
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleApiError {
    pub error: GoogleApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleApiErrorDetail {
    #[serde(default)]
    pub code: u16,
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Best human-readable message for an error response body
pub fn describe_error_body(body: &str) -> String {
    if let Some(outcome) = OperationOutcome::parse(body) {
        return outcome.summary();
    }
    if let Ok(api_err) = serde_json::from_str::<GoogleApiError>(body) {
        return match api_err.error.status {
            Some(status) => format!("{}: {}", status, api_err.error.message),
            None => api_err.error.message,
        };
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "empty response body".to_string()
    } else {
        trimmed.to_string()
    }
}
