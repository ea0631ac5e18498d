use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use super::provider::{SimilarCaseProvider, SimilarCasesFuture};
use super::types::{SimilarCase, SimilarCaseCriteria};
use crate::config::{DEFAULT_SIMILAR_CASES_TIMEOUT_MS, SimilarCasesConfig};

#[derive(Debug, Clone)]
pub struct HttpSimilarCaseProviderConfig {
    pub endpoint_url: String,
    pub api_key: Option<String>,
    pub timeout_ms: u64,
}

impl HttpSimilarCaseProviderConfig {
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            api_key: None,
            timeout_ms: DEFAULT_SIMILAR_CASES_TIMEOUT_MS,
        }
    }
}

impl From<SimilarCasesConfig> for HttpSimilarCaseProviderConfig {
    fn from(config: SimilarCasesConfig) -> Self {
        Self {
            endpoint_url: config.api_url,
            api_key: config.api_key,
            timeout_ms: config.timeout_ms,
        }
    }
}

#[derive(Debug, Error)]
pub enum SimilarCaseProviderError {
    #[error("similar cases request timed out")]
    Timeout,
    #[error("similar cases request failed: {0}")]
    RequestFailed(String),
    #[error("similar cases api returned status {0}")]
    UnexpectedStatus(u16),
    #[error("similar cases api returned an invalid payload: {0}")]
    InvalidPayload(String),
    #[error("failed to build similar cases http client: {0}")]
    HttpClient(String),
}

/// Similar-cases client for the remote analytics API.
#[derive(Clone)]
pub struct HttpSimilarCaseProvider {
    client: reqwest::Client,
    config: HttpSimilarCaseProviderConfig,
}

impl HttpSimilarCaseProvider {
    pub fn new(config: HttpSimilarCaseProviderConfig) -> Result<Self, SimilarCaseProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|err| SimilarCaseProviderError::HttpClient(err.to_string()))?;

        Ok(Self { client, config })
    }

    /// Single request against the analytics API, surfacing every failure.
    pub async fn try_fetch(
        &self,
        criteria: &SimilarCaseCriteria,
    ) -> Result<Vec<SimilarCase>, SimilarCaseProviderError> {
        let mut request = self.client.post(&self.config.endpoint_url).json(criteria);
        if let Some(api_key) = self.config.api_key.as_deref() {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await.map_err(|err| {
            if err.is_timeout() {
                SimilarCaseProviderError::Timeout
            } else {
                SimilarCaseProviderError::RequestFailed("request_unavailable".to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SimilarCaseProviderError::UnexpectedStatus(status.as_u16()));
        }

        let body = response.text().await.map_err(|err| {
            if err.is_timeout() {
                SimilarCaseProviderError::Timeout
            } else {
                SimilarCaseProviderError::InvalidPayload("response_body_read_failed".to_string())
            }
        })?;

        let parsed: SimilarCasesResponse = serde_json::from_str(&body).map_err(|_| {
            SimilarCaseProviderError::InvalidPayload("response_json_parse_failed".to_string())
        })?;

        let entries = parsed.into_entries();
        let total = entries.len();
        let cases = entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value::<SimilarCase>(entry).ok())
            .collect::<Vec<_>>();

        if cases.len() < total {
            warn!(
                skipped = total - cases.len(),
                total,
                "dropped unreadable similar case entries"
            );
        }

        Ok(cases)
    }
}

impl SimilarCaseProvider for HttpSimilarCaseProvider {
    fn fetch_similar_cases<'a>(&'a self, criteria: SimilarCaseCriteria) -> SimilarCasesFuture<'a> {
        Box::pin(async move {
            match self.try_fetch(&criteria).await {
                Ok(cases) => {
                    debug!(
                        case_type = %criteria.case_type,
                        similar_cases = cases.len(),
                        "fetched similar cases"
                    );
                    cases
                }
                Err(err) => {
                    warn!(
                        case_type = %criteria.case_type,
                        "similar cases unavailable, continuing without history: {err}"
                    );
                    Vec::new()
                }
            }
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SimilarCasesResponse {
    Envelope { cases: Vec<Value> },
    Bare(Vec<Value>),
}

impl SimilarCasesResponse {
    fn into_entries(self) -> Vec<Value> {
        match self {
            Self::Envelope { cases } => cases,
            Self::Bare(cases) => cases,
        }
    }
}
