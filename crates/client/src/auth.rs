//! Access tokens for the Healthcare API
//!
//! Credential discovery and the OAuth2 exchange are left to `gcp_auth`;
//! this module only decides which provider to ask.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use gcp_auth::{CustomServiceAccount, TokenProvider};
use healthcare_fhir_core::{HealthcareError, Result};

use crate::config::Config;

/// OAuth2 scope requested for every token
pub const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

/// Anything able to hand out a bearer token
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn access_token(&self) -> Result<String>;
}

/// Application Default Credentials
pub struct ApplicationDefault {
    provider: Arc<dyn TokenProvider>,
}

impl ApplicationDefault {
    pub async fn discover() -> Result<Self> {
        let provider = gcp_auth::provider().await.map_err(auth_error)?;
        Ok(Self { provider })
    }
}

#[async_trait]
impl TokenSource for ApplicationDefault {
    async fn access_token(&self) -> Result<String> {
        let token = self
            .provider
            .token(&[CLOUD_PLATFORM_SCOPE])
            .await
            .map_err(auth_error)?;
        Ok(token.as_str().to_string())
    }
}

/// Credentials read from a service account key file
pub struct ServiceAccountFile {
    account: CustomServiceAccount,
}

impl ServiceAccountFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let account = CustomServiceAccount::from_file(path).map_err(|e| {
            HealthcareError::Auth(format!(
                "cannot load service account {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Self { account })
    }
}

#[async_trait]
impl TokenSource for ServiceAccountFile {
    async fn access_token(&self) -> Result<String> {
        let token = self
            .account
            .token(&[CLOUD_PLATFORM_SCOPE])
            .await
            .map_err(auth_error)?;
        Ok(token.as_str().to_string())
    }
}

/// A token minted elsewhere, e.g. `gcloud auth print-access-token`
#[derive(Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

#[async_trait]
impl TokenSource for StaticToken {
    async fn access_token(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Token source for the stable endpoint: explicit token, else ADC
pub async fn default_token_source(config: &Config) -> Result<Arc<dyn TokenSource>> {
    if let Some(token) = &config.access_token {
        tracing::debug!("Using access token from HEALTHCARE_ACCESS_TOKEN");
        return Ok(Arc::new(StaticToken::new(token.clone())));
    }
    tracing::debug!("Discovering application default credentials");
    Ok(Arc::new(ApplicationDefault::discover().await?))
}

/// Token source built from the configured service account key file
pub fn service_account_token_source(config: &Config) -> Result<Arc<dyn TokenSource>> {
    if let Some(token) = &config.access_token {
        tracing::debug!("Using access token from HEALTHCARE_ACCESS_TOKEN");
        return Ok(Arc::new(StaticToken::new(token.clone())));
    }
    let path = config.credentials_file.as_ref().ok_or_else(|| {
        HealthcareError::Config("GOOGLE_APPLICATION_CREDENTIALS is not set".to_string())
    })?;
    tracing::debug!(path = %path.display(), "Loading service account credentials");
    Ok(Arc::new(ServiceAccountFile::load(path)?))
}

fn auth_error(err: gcp_auth::Error) -> HealthcareError {
    HealthcareError::Auth(err.to_string())
}
