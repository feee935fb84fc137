//! Client configuration.

use std::time::Duration;

/// Default chat-completions endpoint (OpenAI).
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Configuration for [`GadflyClient`](crate::GadflyClient).
///
/// Everything except the API key has a sensible default:
///
/// ```rust
/// # use gadfly::ClientConfig;
/// # use std::time::Duration;
/// let config = ClientConfig::new("sk-your-key")
///     .model("gpt-4o")
///     .timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Secret bearer token for the endpoint. Required.
    pub api_key: String,
    /// Model identifier sent in every request. Default: `gpt-4o-mini`.
    pub model: String,
    /// Sampling temperature. Default: 0.7.
    pub temperature: f32,
    /// Completion budget, `max_tokens` on the wire. Default: 60.
    pub max_tokens: u32,
    /// Full chat-completions endpoint URL the client POSTs to.
    pub base_url: String,
    /// Whole-request timeout enforced by the transport. Default: 30s.
    pub timeout: Duration,
    /// Validity window for cached sentences. Default: 5 minutes.
    pub cache_ttl: Duration,
    /// Minimum spacing between outbound requests. Default: 1s.
    pub min_request_interval: Duration,
}

impl ClientConfig {
    /// Create a config with the given API key and defaults for the rest.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 60,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            cache_ttl: Duration::from_secs(300),
            min_request_interval: Duration::from_secs(1),
        }
    }

    /// Read configuration from the environment.
    ///
    /// | Variable          | Default         | Purpose              |
    /// |-------------------|-----------------|----------------------|
    /// | `GADFLY_API_KEY`  | `""` (empty)    | Bearer token         |
    /// | `GADFLY_MODEL`    | `gpt-4o-mini`   | Model identifier     |
    /// | `GADFLY_BASE_URL` | OpenAI endpoint | Chat-completions URL |
    pub fn from_env() -> Self {
        let mut config = Self::new(std::env::var("GADFLY_API_KEY").unwrap_or_default());
        if let Ok(model) = std::env::var("GADFLY_MODEL") {
            config.model = model;
        }
        if let Ok(url) = std::env::var("GADFLY_BASE_URL") {
            config.base_url = url;
        }
        config
    }

    /// Set the model identifier.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the sampling temperature.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the completion token budget.
    pub fn max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = max;
        self
    }

    /// Point the client at a different chat-completions endpoint.
    ///
    /// The URL is used verbatim; include the full path (e.g.
    /// `https://host/v1/chat/completions`).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the whole-request transport timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the validity window for cached sentences.
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Set the minimum spacing between outbound requests.
    pub fn min_request_interval(mut self, interval: Duration) -> Self {
        self.min_request_interval = interval;
        self
    }
}
