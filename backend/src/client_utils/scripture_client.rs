//! HTTP access to the remote scripture service.

use common::error::ServiceError;
use reqwest::StatusCode;
use serde::{Serialize, de::DeserializeOwned};

use crate::client_utils::config::ServiceConfig;

/// Shared reqwest client plus the collaborator settings. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ScriptureClient {
    http: reqwest::Client,
    config: ServiceConfig,
}

pub fn get_scripture_client() -> anyhow::Result<ScriptureClient> {
    ScriptureClient::new(ServiceConfig::from_env()?)
}

pub(crate) fn transport_error(e: reqwest::Error) -> ServiceError {
    ServiceError::Transport(e.to_string())
}

/// Payloads wrapped in `{ success, <field>, error }`.
pub(crate) trait Envelope {
    type Payload;
    fn into_payload(self) -> Result<Self::Payload, ServiceError>;
}

/// `success: false` becomes a collaborator error; a successful response
/// missing its payload is a malformed (transport) response.
pub(crate) fn unwrap_envelope<T>(success: bool, payload: Option<T>, error: Option<String>, field: &str) -> Result<T, ServiceError> {
    if !success {
        return Err(ServiceError::Collaborator(error.unwrap_or_else(|| "request reported success: false".to_string())));
    }
    payload.ok_or_else(|| ServiceError::Transport(format!("response is missing `{field}`")))
}

impl ScriptureClient {
    pub fn new(config: ServiceConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub(crate) async fn get_json<T: DeserializeOwned, Q: Serialize + ?Sized>(&self, path: &str, query: &Q) -> Result<T, ServiceError> {
        let url = self.config.endpoint(path);
        tracing::debug!("GET {}", url);
        let response = self.http.get(&url).query(query).send().await.map_err(transport_error)?;
        Self::decode(&url, response).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<T, ServiceError> {
        let url = self.config.endpoint(path);
        tracing::debug!("POST {}", url);
        let response = self.http.post(&url).json(body).send().await.map_err(transport_error)?;
        Self::decode(&url, response).await
    }

    /// Status of a bare GET, without reading the body.
    pub(crate) async fn get_status(&self, path: &str) -> Result<StatusCode, ServiceError> {
        let url = self.config.endpoint(path);
        let response = self.http.get(&url).send().await.map_err(transport_error)?;
        Ok(response.status())
    }

    async fn decode<T: DeserializeOwned>(url: &str, response: reqwest::Response) -> Result<T, ServiceError> {
        let status = response.status();
        let response_txt = response.text().await.map_err(transport_error)?;
        if status.is_client_error() || status.is_server_error() {
            tracing::warn!("{} answered {}: {}", url, status, response_txt);
            return Err(ServiceError::Transport(format!("{status}: {response_txt}")));
        }
        serde_json::from_str(&response_txt)
            .map_err(|e| ServiceError::Transport(format!("cannot decode response from {url}: {e}")))
    }
}
