//! Client configuration

use std::path::PathBuf;

use healthcare_fhir_core::{HealthcareError, Result, StoreAddress};

/// Stable Healthcare API endpoint
pub const STABLE_BASE_URL: &str = "https://healthcare.googleapis.com/v1";

/// Conditional update is only served by the beta endpoint
pub const BETA_BASE_URL: &str = "https://healthcare.googleapis.com/v1beta1";

/// Client configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreAddress,
    pub credentials_file: Option<PathBuf>,
    pub access_token: Option<String>,
    pub base_url: String,
    pub beta_base_url: String,
}

impl Config {
    /// Load configuration from environment variables, reading `.env` first
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env file");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| {
            var(key).ok_or_else(|| HealthcareError::Config(format!("{} is not set", key)))
        };

        let store = StoreAddress::new(
            required("PROJECT_ID")?,
            required("LOCATION")?,
            required("DATASET_ID")?,
            required("FHIR_STORE_ID")?,
        );

        Ok(Self {
            store,
            credentials_file: var("GOOGLE_APPLICATION_CREDENTIALS").map(PathBuf::from),
            access_token: var("HEALTHCARE_ACCESS_TOKEN"),
            base_url: trim_base(var("HEALTHCARE_API_URL").unwrap_or_else(|| STABLE_BASE_URL.into())),
            beta_base_url: trim_base(
                var("HEALTHCARE_BETA_API_URL").unwrap_or_else(|| BETA_BASE_URL.into()),
            ),
        })
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    const STORE_VARS: [(&str, &str); 4] = [
        ("PROJECT_ID", "proj"),
        ("LOCATION", "us-central1"),
        ("DATASET_ID", "ds"),
        ("FHIR_STORE_ID", "store"),
    ];

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&STORE_VARS)).unwrap();
        assert_eq!(config.store, StoreAddress::new("proj", "us-central1", "ds", "store"));
        assert_eq!(config.base_url, STABLE_BASE_URL);
        assert_eq!(config.beta_base_url, BETA_BASE_URL);
        assert!(config.credentials_file.is_none());
        assert!(config.access_token.is_none());
    }

    #[test]
    fn test_overrides() {
        let mut vars = STORE_VARS.to_vec();
        vars.push(("GOOGLE_APPLICATION_CREDENTIALS", "/keys/sa.json"));
        vars.push(("HEALTHCARE_API_URL", "http://localhost:9000/v1/"));
        vars.push(("HEALTHCARE_ACCESS_TOKEN", "tok"));

        let config = Config::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config.credentials_file, Some(PathBuf::from("/keys/sa.json")));
        assert_eq!(config.base_url, "http://localhost:9000/v1");
        assert_eq!(config.access_token.as_deref(), Some("tok"));
    }

    #[test]
    fn test_missing_variable_is_named() {
        let vars: Vec<_> = STORE_VARS
            .iter()
            .copied()
            .filter(|(k, _)| *k != "DATASET_ID")
            .collect();
        let err = Config::from_lookup(lookup(&vars)).unwrap_err();
        assert!(err.to_string().contains("DATASET_ID"));
    }

    #[test]
    fn test_blank_variable_counts_as_missing() {
        let mut vars = STORE_VARS.to_vec();
        vars[0] = ("PROJECT_ID", "  ");
        assert!(matches!(
            Config::from_lookup(lookup(&vars)),
            Err(HealthcareError::Config(_))
        ));
    }
}
