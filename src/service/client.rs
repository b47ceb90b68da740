//! HTTP client for communicating with the CAD generation service
//!
//! This module provides the request/response types for the two service
//! endpoints and a reqwest-backed client implementing [`GenerationService`].

use crate::config::TuiConfig;
use crate::service::traits::GenerationService;
use crate::state::{Complexity, ModelForm};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

/// Default service address
const DEFAULT_ADDRESS: &str = "http://127.0.0.1:8000";

/// Body for POST `/generate_model/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRequest {
    pub prompt: String,
    pub size: f64,
    pub complexity: Complexity,
}

impl GenerateRequest {
    pub fn from_form(form: &ModelForm) -> Self {
        Self {
            prompt: form.prompt.as_text().to_string(),
            size: form.size.as_size(),
            complexity: form.complexity.as_complexity(),
        }
    }
}

/// Body for POST `/modify_model/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModifyRequest {
    pub prompt: String,
    pub size: f64,
    pub complexity: Complexity,
    pub modification: String,
}

impl ModifyRequest {
    pub fn from_form(form: &ModelForm) -> Self {
        Self {
            prompt: form.prompt.as_text().to_string(),
            size: form.size.as_size(),
            complexity: form.complexity.as_complexity(),
            modification: form.modification.as_text().to_string(),
        }
    }
}

/// Well-formed response from `/generate_model/`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateResponse {
    /// Server-relative path to the produced artifact
    pub file: Option<String>,
    /// Error signal checked for the shape-rejection marker
    pub error: Option<String>,
}

/// Well-formed response from `/modify_model/`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyResponse {
    /// Server-relative path to the modified artifact
    pub modified_file: Option<String>,
    /// Error signal checked for the shape-rejection marker
    pub error: Option<String>,
}

/// Structured detail carried by service failure responses
#[derive(Debug, Deserialize)]
struct FailureBody {
    detail: Option<String>,
}

/// A failed HTTP exchange with the generation service
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service answered with a failure status
    #[error("service rejected the request")]
    Rejected { detail: Option<String> },
    /// The exchange itself did not complete (connect failure, timeout,
    /// malformed body)
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ServiceError {
    /// Best-available failure detail: the structured `detail` field of a
    /// failure response verbatim, else a generic fallback.
    pub fn detail(&self) -> &str {
        match self {
            ServiceError::Rejected {
                detail: Some(detail),
            } => detail,
            _ => "Server error.",
        }
    }
}

/// Build the download URL for an artifact path returned by the service
pub fn artifact_url(base: &str, file_ref: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        file_ref.trim_start_matches('/')
    )
}

/// Client for communicating with the generation service
pub struct GenerationClient {
    http: reqwest::Client,
    base_url: String,
}

impl GenerationClient {
    /// Create a new client for the given base address
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from the environment and user configuration.
    /// `CADSCRIBE_SERVER_ADDRESS` overrides the configured address.
    pub fn from_config(config: &TuiConfig) -> Self {
        let address = std::env::var("CADSCRIBE_SERVER_ADDRESS")
            .ok()
            .or_else(|| config.server_address.clone())
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());
        Self::new(address)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Map an HTTP response to its typed body, turning failure statuses into
    /// [`ServiceError::Rejected`] with whatever detail the body carried.
    async fn read_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ServiceError> {
        if response.status().is_success() {
            Ok(response.json::<T>().await?)
        } else {
            let detail = response
                .json::<FailureBody>()
                .await
                .ok()
                .and_then(|body| body.detail);
            Err(ServiceError::Rejected { detail })
        }
    }
}

#[async_trait]
impl GenerationService for GenerationClient {
    async fn check_connection(&self) -> bool {
        // Any HTTP answer counts as reachable; the service has no health
        // endpoint, so a 404 from the base address is still a live server.
        self.http.get(&self.base_url).send().await.is_ok()
    }

    async fn generate_model(
        &self,
        request: GenerateRequest,
    ) -> Result<GenerateResponse, ServiceError> {
        let url = format!("{}/generate_model/", self.base_url);
        let response = self.http.post(&url).json(&request).send().await?;
        Self::read_body(response).await
    }

    async fn modify_model(&self, request: ModifyRequest) -> Result<ModifyResponse, ServiceError> {
        let url = format!("{}/modify_model/", self.base_url);
        let response = self.http.post(&url).json(&request).send().await?;
        Self::read_body(response).await
    }
}
