//! Account API client implementation.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};
use zonepull_core::{Credentials, Domain, ExportError, ProviderApi, Record, Result};

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for a host serving the legacy account API.
///
/// Both operations are `POST {base_url}/{operation}` with a JSON body
/// carrying the account credentials, answered by a bare JSON array. The
/// base URL is whichever host exposes the API; there is no built-in
/// endpoint. Responses are never cached and requests are never retried.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    base_url: String,
}

impl ApiClient {
    /// Create a new client for the given API base URL using default settings
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiClientBuilder::new(base_url).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(base_url: impl Into<String>) -> ApiClientBuilder {
        ApiClientBuilder::new(base_url)
    }

    /// Perform a POST request with a JSON body
    async fn post<T: DeserializeOwned, B: Serialize>(&self, operation: &str, body: &B) -> Result<T> {
        let url = format!("{}/{operation}", self.inner.base_url);
        debug!(url = %url, "POST request");

        let response = self
            .inner
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ExportError::Http(e.to_string()))?;

        Self::handle_response(response).await
    }

    /// Handle an API response that returns JSON
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| ExportError::Http(e.to_string()))?;
            serde_json::from_str(&body).map_err(ExportError::Json)
        } else {
            Self::handle_error(status.as_u16(), response).await
        }
    }

    /// Convert an error response to an [`ExportError`]
    async fn handle_error<T>(status: u16, response: reqwest::Response) -> Result<T> {
        let body = response.text().await.unwrap_or_default();

        // Try to parse an error message from JSON
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
            .unwrap_or(body);

        // A body-less failure still carries the HTTP status line.
        let message = if message.trim().is_empty() {
            reqwest::StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("unknown error")
                .to_owned()
        } else {
            message
        };

        match status {
            401 | 403 => Err(ExportError::Unauthorized),
            _ => Err(ExportError::Api {
                code: status,
                message,
            }),
        }
    }
}

#[derive(Serialize)]
struct ListDomainsRequest<'a> {
    user: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct ListRecordsRequest<'a> {
    user: &'a str,
    password: &'a str,
    domainid: &'a str,
}

#[async_trait]
impl ProviderApi for ApiClient {
    #[instrument(skip(self, credentials), fields(user = %credentials.username))]
    async fn list_domains(&self, credentials: &Credentials) -> Result<Vec<Domain>> {
        self.post(
            "listDomains",
            &ListDomainsRequest {
                user: &credentials.username,
                password: &credentials.password,
            },
        )
        .await
    }

    #[instrument(skip(self, credentials), fields(user = %credentials.username))]
    async fn list_records(
        &self,
        credentials: &Credentials,
        domain_id: &str,
    ) -> Result<Vec<Record>> {
        self.post(
            "listRRsByDomain",
            &ListRecordsRequest {
                user: &credentials.username,
                password: &credentials.password,
                domainid: domain_id,
            },
        )
        .await
    }
}

/// Builder for configuring an [`ApiClient`]
pub struct ApiClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl ApiClientBuilder {
    /// Create a new builder for the given API base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("zonepull/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client
    #[must_use]
    pub fn build(self) -> ApiClient {
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .expect("Failed to build HTTP client");

        ApiClient {
            inner: Arc::new(ClientInner {
                http,
                base_url: self.base_url.trim_end_matches('/').to_owned(),
            }),
        }
    }
}
