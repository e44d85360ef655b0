use serde::{Deserialize, Serialize};

/// Football data provider settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Provider base URL, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Sent as `x-rapidapi-key`
    #[serde(default)]
    pub api_key: String,

    /// Sent as `x-rapidapi-host`
    #[serde(default = "default_api_host")]
    pub api_host: String,

    /// Per-request timeout in milliseconds (default: 10000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Characters of a non-2xx body kept in the error (default: 256)
    #[serde(default = "default_error_body_excerpt")]
    pub error_body_excerpt: usize,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            api_host: default_api_host(),
            timeout_ms: default_timeout_ms(),
            error_body_excerpt: default_error_body_excerpt(),
        }
    }
}

fn default_base_url() -> String {
    "https://v3.football.api-sports.io".to_string()
}

fn default_api_host() -> String {
    "v3.football.api-sports.io".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_error_body_excerpt() -> usize {
    256
}
