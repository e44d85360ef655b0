use async_trait::async_trait;
use matchcast_application::ports::UpstreamFetcher;
use matchcast_domain::config::UpstreamConfig;
use matchcast_domain::{DomainError, FetchError, Payload, ResourceRequest};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

const API_KEY_HEADER: &str = "x-rapidapi-key";
const API_HOST_HEADER: &str = "x-rapidapi-host";

/// Football data provider client.
///
/// One pooled reqwest client is shared by every resource class. Each call is
/// a plain `GET {base_url}{path}?{query}` bounded by the configured timeout.
pub struct HttpUpstreamFetcher {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
    error_body_excerpt: usize,
}

impl HttpUpstreamFetcher {
    pub fn new(config: &UpstreamConfig) -> Result<Self, DomainError> {
        let timeout = Duration::from_millis(config.timeout_ms);

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .default_headers(Self::default_headers(config)?)
            .timeout(timeout)
            .pool_max_idle_per_host(4)
            .build()
            .map_err(|e| DomainError::UpstreamClient(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout,
            error_body_excerpt: config.error_body_excerpt,
        })
    }

    fn default_headers(config: &UpstreamConfig) -> Result<HeaderMap, DomainError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut api_key = HeaderValue::from_str(&config.api_key).map_err(|_| {
            DomainError::UpstreamClient("API key contains invalid header characters".to_string())
        })?;
        api_key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, api_key);

        let api_host = HeaderValue::from_str(&config.api_host).map_err(|_| {
            DomainError::UpstreamClient(format!("invalid API host '{}'", config.api_host))
        })?;
        headers.insert(API_HOST_HEADER, api_host);

        Ok(headers)
    }

    pub fn url_for(&self, request: &ResourceRequest) -> Result<Url, FetchError> {
        let query = request.upstream_query();
        Url::parse_with_params(
            &format!("{}{}", self.base_url, request.upstream_path()),
            query.iter().map(|(name, value)| (*name, value.as_str())),
        )
        .map_err(|e| FetchError::UpstreamUnavailable(format!("invalid upstream URL: {e}")))
    }

    fn excerpt(&self, body: &str) -> String {
        body.chars().take(self.error_body_excerpt).collect()
    }

    fn transport_error(&self, url: &Url, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::UpstreamUnavailable(format!(
                "timed out after {}ms requesting {}",
                self.timeout.as_millis(),
                url.path()
            ))
        } else if error.is_connect() {
            FetchError::UpstreamUnavailable(format!(
                "connection to {} failed: {error}",
                url.host_str().unwrap_or("upstream")
            ))
        } else {
            FetchError::UpstreamUnavailable(format!("request to {} failed: {error}", url.path()))
        }
    }
}

#[async_trait]
impl UpstreamFetcher for HttpUpstreamFetcher {
    async fn fetch(&self, request: &ResourceRequest) -> Result<Payload, FetchError> {
        let url = self.url_for(request)?;
        let key = request.key();

        debug!(key = %key, path = url.path(), "Requesting upstream resource");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.transport_error(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::UpstreamStatus {
                status: status.as_u16(),
                body_excerpt: self.excerpt(&body),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(&url, e))?;

        let value: serde_json::Value = serde_json::from_slice(&body)
            .map_err(|e| FetchError::MalformedResponse(format!("invalid JSON: {e}")))?;

        if !value.is_object() {
            return Err(FetchError::MalformedResponse(
                "expected a JSON object".to_string(),
            ));
        }

        debug!(key = %key, bytes = body.len(), "Upstream resource received");

        Ok(Arc::new(value))
    }
}
