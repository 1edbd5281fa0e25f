//! Resource identifiers and opaque resource bodies
//!
//! Bodies stay as `serde_json::Value`; only `resourceType` and `id` are
//! ever looked at.

use std::fmt;
use std::path::Path;

use serde_json::Value as JsonValue;

use crate::error::{HealthcareError, Result};

/// A (resourceType, logical id) pair addressing one resource in a store
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId {
    pub resource_type: String,
    pub id: String,
}

impl ResourceId {
    pub fn new(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }

    /// Take the target of an update (or read) from the body itself
    pub fn from_body(body: &JsonValue) -> Result<Self> {
        let resource_type = resource_type(body)?;
        let id = string_field(body, "id")?;
        Ok(Self::new(resource_type, id))
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.resource_type, self.id)
    }
}

/// The `resourceType` of a body destined for create or update
pub fn resource_type(body: &JsonValue) -> Result<&str> {
    string_field(body, "resourceType")
}

fn string_field<'a>(body: &'a JsonValue, field: &'static str) -> Result<&'a str> {
    match body.get(field) {
        Some(JsonValue::String(s)) if !s.is_empty() => Ok(s),
        Some(JsonValue::String(_)) | None => Err(HealthcareError::MissingField(field)),
        Some(other) => Err(HealthcareError::InvalidResource(format!(
            "`{}` must be a string, got {}",
            field, other
        ))),
    }
}

/// Read a JSON fixture file into a request body
pub fn load_fixture(path: impl AsRef<Path>) -> Result<JsonValue> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| HealthcareError::Fixture {
        path: path.to_path_buf(),
        source,
    })?;
    let value: JsonValue = serde_json::from_str(&raw)?;
    if !value.is_object() {
        return Err(HealthcareError::InvalidResource(format!(
            "{} does not contain a JSON object",
            path.display()
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_from_body() {
        let body = json!({"resourceType": "Patient", "id": "123", "active": true});
        let id = ResourceId::from_body(&body).unwrap();
        assert_eq!(id, ResourceId::new("Patient", "123"));
        assert_eq!(id.to_string(), "Patient/123");
    }

    #[test]
    fn test_from_body_requires_id() {
        let body = json!({"resourceType": "Patient"});
        assert!(matches!(
            ResourceId::from_body(&body),
            Err(HealthcareError::MissingField("id"))
        ));
    }

    #[test]
    fn test_resource_type_missing_or_wrong_type() {
        assert!(matches!(
            resource_type(&json!({"id": "1"})),
            Err(HealthcareError::MissingField("resourceType"))
        ));
        assert!(matches!(
            resource_type(&json!({"resourceType": 7})),
            Err(HealthcareError::InvalidResource(_))
        ));
    }

    #[test]
    fn test_load_fixture() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"resourceType": "Patient", "gender": "female"}}"#).unwrap();

        let body = load_fixture(file.path()).unwrap();
        assert_eq!(resource_type(&body).unwrap(), "Patient");
        assert_eq!(body["gender"], "female");
    }

    #[test]
    fn test_load_fixture_errors() {
        let missing = load_fixture("/definitely/not/here.json");
        assert!(matches!(missing, Err(HealthcareError::Fixture { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        assert!(matches!(
            load_fixture(file.path()),
            Err(HealthcareError::Json(_))
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[1, 2]").unwrap();
        assert!(matches!(
            load_fixture(file.path()),
            Err(HealthcareError::InvalidResource(_))
        ));
    }
}
