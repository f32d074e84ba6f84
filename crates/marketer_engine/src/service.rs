use std::time::Duration;

use marketer_logging::{marketer_debug, marketer_warn};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::wire::{ErrorBody, GenerateRequest, GenerateResponse, ScanRequest, ScanResponse};
use crate::{FailureKind, GenerateReply, ScanReply, ServiceError};

/// Address of the hosted generation service.
pub const DEFAULT_SERVICE_URL: &str = "https://keyword-marketing-generator-mmw4lyxt.devinapps.com";

#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub base_url: String,
    /// `None` keeps the transport default.
    pub connect_timeout: Option<Duration>,
    /// `None` keeps the transport default.
    pub request_timeout: Option<Duration>,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVICE_URL.to_string(),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

impl ServiceSettings {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// Remote operations offered by the generation service.
#[async_trait::async_trait]
pub trait GenerationService: Send + Sync {
    /// Scans `url` and returns its keywords plus an initial batch of sentences.
    async fn scan(&self, url: &str) -> Result<ScanReply, ServiceError>;

    /// Generates one sentence about `keywords`, roughly `length` characters long.
    async fn generate(&self, keywords: &[String], length: u32)
        -> Result<GenerateReply, ServiceError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestGenerationService {
    client: reqwest::Client,
    scan_url: Url,
    generate_url: Url,
}

impl ReqwestGenerationService {
    pub fn new(settings: &ServiceSettings) -> Result<Self, ServiceError> {
        let base = Url::parse(&settings.base_url)
            .map_err(|err| ServiceError::new(FailureKind::InvalidBaseUrl, err.to_string()))?;
        let scan_url = endpoint(&base, "scan")?;
        let generate_url = endpoint(&base, "generate")?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ServiceError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            client,
            scan_url,
            generate_url,
        })
    }

    async fn post_json<B, R>(&self, url: &Url, body: &B) -> Result<R, ServiceError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body)
            .map_err(|err| ServiceError::new(FailureKind::InvalidResponse, err.to_string()))?;

        marketer_debug!("POST {} ({} bytes)", url, payload.len());
        let response = self
            .client
            .post(url.as_str())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&bytes)
                .map(|body| body.error)
                .unwrap_or_else(|_| status.to_string());
            marketer_warn!("POST {} returned {}: {}", url, status, message);
            return Err(ServiceError::new(
                FailureKind::HttpStatus(status.as_u16()),
                message,
            ));
        }

        serde_json::from_slice(&bytes)
            .map_err(|err| ServiceError::new(FailureKind::InvalidResponse, err.to_string()))
    }
}

#[async_trait::async_trait]
impl GenerationService for ReqwestGenerationService {
    async fn scan(&self, url: &str) -> Result<ScanReply, ServiceError> {
        let response: ScanResponse = self.post_json(&self.scan_url, &ScanRequest { url }).await?;
        Ok(response.into())
    }

    async fn generate(
        &self,
        keywords: &[String],
        length: u32,
    ) -> Result<GenerateReply, ServiceError> {
        let response: GenerateResponse = self
            .post_json(&self.generate_url, &GenerateRequest { keywords, length })
            .await?;
        Ok(response.into())
    }
}

/// Appends `segment` to the base URL's path, keeping any existing prefix.
fn endpoint(base: &Url, segment: &str) -> Result<Url, ServiceError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| {
            ServiceError::new(
                FailureKind::InvalidBaseUrl,
                format!("{base} cannot be used as a base url"),
            )
        })?
        .pop_if_empty()
        .push(segment);
    Ok(url)
}

fn map_reqwest_error(err: reqwest::Error) -> ServiceError {
    if err.is_timeout() {
        return ServiceError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ServiceError::new(FailureKind::InvalidResponse, err.to_string());
    }
    ServiceError::new(FailureKind::Network, err.to_string())
}
