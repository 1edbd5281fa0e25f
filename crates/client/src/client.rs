//! Healthcare API FHIR client

use std::sync::Arc;

use healthcare_fhir_core::outcome::describe_error_body;
use healthcare_fhir_core::{HealthcareError, ResourceId, Result, StoreAddress, resource_type};
use reqwest::{Method, RequestBuilder, header};
use serde_json::Value as JsonValue;

use crate::auth::{self, TokenSource};
use crate::config::Config;

/// Content type required on every FHIR write
pub const FHIR_JSON: &str = "application/fhir+json;charset=utf-8";

/// Client bound to one Healthcare API base URL
#[derive(Clone)]
pub struct HealthcareClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenSource>,
}

impl HealthcareClient {
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenSource>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            tokens,
        }
    }

    /// Client for the stable endpoint using default credentials
    pub async fn stable(config: &Config) -> Result<Self> {
        let tokens = auth::default_token_source(config).await?;
        Ok(Self::new(config.base_url.clone(), tokens))
    }

    /// Client for the beta endpoint using the service account key file
    pub fn beta(config: &Config) -> Result<Self> {
        let tokens = auth::service_account_token_source(config)?;
        Ok(Self::new(config.beta_base_url.clone(), tokens))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a resource; the server assigns its id
    pub async fn create(&self, store: &StoreAddress, body: &JsonValue) -> Result<JsonValue> {
        let ty = resource_type(body)?;
        let path = store.type_path(ty);
        let request = self.request(Method::POST, &path).await?;
        self.send(
            request.header(header::CONTENT_TYPE, FHIR_JSON).body(body.to_string()),
            &path,
        )
        .await
    }

    /// Fetch the current contents of a resource
    pub async fn read(&self, store: &StoreAddress, resource: &ResourceId) -> Result<JsonValue> {
        let path = store.resource_path(resource);
        let request = self.request(Method::GET, &path).await?;
        self.send(request, &path).await
    }

    /// Replace a resource, creating it if it does not exist yet
    pub async fn update(&self, store: &StoreAddress, body: &JsonValue) -> Result<JsonValue> {
        let resource = ResourceId::from_body(body)?;
        let path = store.resource_path(&resource);
        let request = self.request(Method::PUT, &path).await?;
        self.send(
            request.header(header::CONTENT_TYPE, FHIR_JSON).body(body.to_string()),
            &path,
        )
        .await
    }

    /// Update whichever resource matches `query` instead of addressing it by id
    pub async fn conditional_update(
        &self,
        store: &StoreAddress,
        resource_type: &str,
        query: &[(&str, &str)],
        body: &JsonValue,
    ) -> Result<JsonValue> {
        let path = store.type_path(resource_type);
        let request = self.request(Method::PUT, &path).await?;
        self.send(
            request
                .query(query)
                .header(header::CONTENT_TYPE, FHIR_JSON)
                .body(body.to_string()),
            &path,
        )
        .await
    }

    async fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let token = self.tokens.access_token().await?;
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(%method, %url, "Sending request");
        Ok(self.http.request(method, url).bearer_auth(token))
    }

    async fn send(&self, request: RequestBuilder, path: &str) -> Result<JsonValue> {
        let response = request
            .send()
            .await
            .map_err(|e| HealthcareError::Http(Box::new(e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| HealthcareError::Http(Box::new(e)))?;

        if !status.is_success() {
            let message = describe_error_body(&body);
            tracing::warn!(status = status.as_u16(), path, %message, "Request rejected");
            return Err(HealthcareError::Status {
                status: status.as_u16(),
                message,
            });
        }

        tracing::info!(status = status.as_u16(), path, "Request succeeded");
        Ok(serde_json::from_str(&body)?)
    }
}
