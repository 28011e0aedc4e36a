use crate::crexi::traits::ListingSource;
use crate::crexi::types::ListingQuery;
use crate::models::ProbeResult;
use crate::normalize::extract_listings;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;
use tracing::{info, warn};

pub const CREXI_BASE_URL: &str = "https://api.crexi.com";
pub const CREXI_STAGE_URL: &str = "https://stage-api.crexi.com";

/// Production first, staging as fallback
pub const BASE_URLS: [&str; 2] = [CREXI_BASE_URL, CREXI_STAGE_URL];

/// Common endpoint patterns, tried in this order for every base URL
pub const ENDPOINT_PATHS: [&str; 6] = [
    "/v1/listings",
    "/v1/properties",
    "/api/v1/listings",
    "/api/v1/properties",
    "/listings",
    "/properties",
];

pub const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// How the API key is presented to the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Authorization: Bearer <key>`
    Bearer,
    /// `x-api-key: <key>`
    XApiKey,
    /// `api-key: <key>`
    ApiKey,
}

impl AuthScheme {
    pub const ALL: [AuthScheme; 3] = [AuthScheme::Bearer, AuthScheme::XApiKey, AuthScheme::ApiKey];

    pub fn header_name(&self) -> &'static str {
        match self {
            AuthScheme::Bearer => "Authorization",
            AuthScheme::XApiKey => "x-api-key",
            AuthScheme::ApiKey => "api-key",
        }
    }

    pub fn header_value(&self, api_key: &str) -> String {
        match self {
            AuthScheme::Bearer => format!("Bearer {}", api_key),
            AuthScheme::XApiKey | AuthScheme::ApiKey => api_key.to_string(),
        }
    }
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header_name())
    }
}

/// One (base URL, path, auth scheme) combination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeCandidate {
    pub base_url: String,
    pub path: &'static str,
    pub scheme: AuthScheme,
}

impl ProbeCandidate {
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.path)
    }
}

/// Cross-product of candidates, ordered base URL -> path -> auth scheme
pub fn probe_candidates<S: AsRef<str>>(base_urls: &[S]) -> Vec<ProbeCandidate> {
    let per_host = ENDPOINT_PATHS.len() * AuthScheme::ALL.len();
    let mut candidates = Vec::with_capacity(base_urls.len() * per_host);
    for base_url in base_urls {
        for path in ENDPOINT_PATHS {
            for scheme in AuthScheme::ALL {
                candidates.push(ProbeCandidate {
                    base_url: base_url.as_ref().to_string(),
                    path,
                    scheme,
                });
            }
        }
    }
    candidates
}

/// Classification of a single probe request
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptOutcome {
    Success(serde_json::Value),
    Unauthorized,
    Forbidden,
    NotFound,
    UnexpectedStatus { status: u16, body: String },
    /// 200 with a body that is not JSON
    InvalidBody(String),
    /// Timeout, refused connection, DNS failure and the like
    Transport(String),
}

impl AttemptOutcome {
    fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => AttemptOutcome::Unauthorized,
            StatusCode::FORBIDDEN => AttemptOutcome::Forbidden,
            StatusCode::NOT_FOUND => AttemptOutcome::NotFound,
            other => AttemptOutcome::UnexpectedStatus {
                status: other.as_u16(),
                body,
            },
        }
    }
}

/// Brute-force discovery of a working Crexi endpoint
pub struct CrexiProber {
    client: Client,
    api_key: String,
    base_urls: Vec<String>,
    query: ListingQuery,
}

impl CrexiProber {
    /// Prober over the production and staging hosts
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_urls(api_key, BASE_URLS.iter().map(|s| s.to_string()).collect())
    }

    /// Prober over custom hosts
    pub fn with_base_urls(api_key: impl Into<String>, base_urls: Vec<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(PROBE_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_urls,
            query: ListingQuery::default(),
        })
    }

    pub fn with_query(mut self, query: ListingQuery) -> Self {
        self.query = query;
        self
    }

    pub fn candidates(&self) -> Vec<ProbeCandidate> {
        probe_candidates(self.base_urls.as_slice())
    }

    /// Issue one GET and classify the response. Never fails.
    pub async fn attempt(&self, candidate: &ProbeCandidate) -> AttemptOutcome {
        let response = self
            .client
            .get(candidate.url())
            .header(candidate.scheme.header_name(), candidate.scheme.header_value(&self.api_key))
            .query(&self.query)
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) => return AttemptOutcome::Transport(e.to_string()),
        };

        let status = response.status();
        if status == StatusCode::OK {
            return match response.json::<serde_json::Value>().await {
                Ok(data) => AttemptOutcome::Success(data),
                Err(e) => AttemptOutcome::InvalidBody(e.to_string()),
            };
        }

        let body = response.text().await.unwrap_or_default();
        AttemptOutcome::from_status(status, body)
    }

    /// Walk every candidate in order and stop at the first 200
    pub async fn probe(&self) -> ProbeResult {
        info!("🔑 Testing Crexi API authentication...");

        let mut current_base = String::new();
        for candidate in self.candidates() {
            if candidate.base_url != current_base {
                info!("Trying base URL: {}", candidate.base_url);
                current_base = candidate.base_url.clone();
            }

            let url = candidate.url();
            info!("  Testing: {} ({})", url, candidate.scheme);

            match self.attempt(&candidate).await {
                AttemptOutcome::Success(data) => {
                    info!("  ✅ Success! Found working endpoint");
                    info!("  📊 Received {} listings", extract_listings(&data).len());

                    let mut headers = BTreeMap::new();
                    headers.insert(
                        candidate.scheme.header_name().to_string(),
                        candidate.scheme.header_value(&self.api_key),
                    );
                    return ProbeResult::Success {
                        endpoint: url,
                        headers,
                        data,
                    };
                }
                AttemptOutcome::Unauthorized => warn!("  ❌ 401 Unauthorized"),
                AttemptOutcome::Forbidden => warn!("  ❌ 403 Forbidden"),
                AttemptOutcome::NotFound => warn!("  ❌ 404 Not Found"),
                AttemptOutcome::UnexpectedStatus { status, body } => {
                    warn!("  ❌ {}: {}", status, truncate(&body, 100))
                }
                AttemptOutcome::InvalidBody(e) => {
                    warn!("  ❌ 200 with unreadable body: {}", truncate(&e, 100))
                }
                AttemptOutcome::Transport(e) => warn!("  ❌ Request failed: {}", truncate(&e, 50)),
            }
        }

        warn!("Could not find working Crexi API endpoint");
        ProbeResult::Failure {
            error: "No working endpoint found".to_string(),
        }
    }
}

#[async_trait]
impl ListingSource for CrexiProber {
    async fn fetch_listings(&self) -> ProbeResult {
        self.probe().await
    }

    fn source_name(&self) -> &'static str {
        "Crexi"
    }

    fn market(&self) -> &str {
        &self.query.market
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
