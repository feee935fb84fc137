//! The motivational-sentence client.
//!
//! [`GadflyClient`] turns a step count into one short, playfully insulting
//! sentence by calling an OpenAI-compatible chat-completions endpoint. In
//! front of the network sit two policies:
//!
//! - a TTL sentence cache keyed by step count ([`ResponseCache`]) — a hit
//!   returns immediately with no dispatch and no pacing bookkeeping;
//! - request pacing — consecutive dispatches are spaced at least
//!   `min_request_interval` apart, across all concurrent callers.
//!
//! The client never retries. Every failure maps to one variant of the
//! closed [`GadflyError`](crate::GadflyError) taxonomy and is returned to
//! the caller, which owns any retry policy
//! ([`is_retryable()`](crate::GadflyError::is_retryable) exists for that).

use std::time::Instant;

use async_trait::async_trait;
use reqwest::Url;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::cache::{CacheConfig, ResponseCache};
use crate::config::ClientConfig;
use crate::telemetry;
use crate::traits::Motivator;
use crate::types::{ChatRequest, ChatResponse, ErrorEnvelope, Message};
use crate::{GadflyError, Result};

/// Client for generating motivational sentences from step counts.
///
/// Safe to share across concurrent callers: the cache and the pacing
/// timestamp are each guarded by their own mutex, so calls for different
/// step counts serialize only where the contract requires it.
pub struct GadflyClient {
    config: ClientConfig,
    http: reqwest::Client,
    endpoint: Url,
    cache: ResponseCache,
    last_dispatch: Mutex<Option<Instant>>,
}

impl GadflyClient {
    /// Create a client from the given configuration.
    ///
    /// Validates `base_url` and builds the HTTP transport with the
    /// configured timeout. URL problems surface here as
    /// [`InvalidUrl`](GadflyError::InvalidUrl), never mid-call.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.base_url)
            .map_err(|e| GadflyError::InvalidUrl(format!("{}: {e}", config.base_url)))?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        let cache = ResponseCache::new(&CacheConfig::new().ttl(config.cache_ttl));

        Ok(Self {
            config,
            http,
            endpoint,
            cache,
            last_dispatch: Mutex::new(None),
        })
    }

    /// Generate one motivational sentence for a step count.
    ///
    /// Cache hits within the TTL window return immediately. Otherwise the
    /// call waits out the minimum request interval, dispatches one request,
    /// and classifies the outcome. Success writes exactly one cache entry;
    /// failure writes none.
    pub async fn heckle(&self, steps: u32) -> Result<String> {
        if let Some(sentence) = self.cache.get(steps).await {
            debug!(steps, "returning cached sentence");
            return Ok(sentence);
        }

        self.pace().await;

        let started = Instant::now();
        let result = self.dispatch(steps).await;
        metrics::histogram!(telemetry::REQUEST_DURATION_SECONDS)
            .record(started.elapsed().as_secs_f64());

        match result {
            Ok(sentence) => {
                metrics::counter!(telemetry::REQUESTS_TOTAL, "status" => "ok").increment(1);
                self.cache.insert(steps, sentence.clone()).await;
                Ok(sentence)
            }
            Err(err) => {
                metrics::counter!(telemetry::REQUESTS_TOTAL, "status" => "error").increment(1);
                warn!(steps, error = %err, "sentence generation failed");
                Err(err)
            }
        }
    }

    /// The sentence cache backing this client.
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Wait out the minimum request interval, then commit the dispatch
    /// timestamp.
    ///
    /// The lock is held across the wait so concurrent callers serialize and
    /// consecutive dispatches stay at least `min_request_interval` apart.
    /// The timestamp is committed before the request is sent: a caller that
    /// abandons an in-flight request has already paid its pacing slot, which
    /// keeps throttling honest. A caller abandoned during the wait itself
    /// never dispatched and leaves the timestamp untouched.
    async fn pace(&self) {
        let mut last = self.last_dispatch.lock().await;
        if let Some(at) = *last {
            let elapsed = at.elapsed();
            if elapsed < self.config.min_request_interval {
                let wait = self.config.min_request_interval - elapsed;
                debug!(wait_ms = wait.as_millis() as u64, "pacing outbound request");
                tokio::time::sleep(wait).await;
                metrics::histogram!(telemetry::PACING_WAIT_SECONDS).record(wait.as_secs_f64());
            }
        }
        *last = Some(Instant::now());
    }

    /// Issue one request and classify the outcome.
    async fn dispatch(&self, steps: u32) -> Result<String> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![Message::user(build_prompt(steps))],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let response = self
            .http
            .post(self.endpoint.clone())
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&request)
            .send()
            .await?;

        let status = response.status();

        if status.as_u16() == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .map(std::time::Duration::from_secs);
            return Err(GadflyError::RateLimitExceeded { retry_after });
        }

        if !status.is_success() {
            let status = status.as_u16();
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or_else(|_| format!("HTTP {status}"));
            return Err(GadflyError::Api { status, message });
        }

        let body = response.text().await?;
        if body.is_empty() {
            return Err(GadflyError::InvalidResponse);
        }

        let decoded: ChatResponse = serde_json::from_str(&body)?;
        let choice = decoded
            .choices
            .into_iter()
            .next()
            .ok_or(GadflyError::EmptyResponse)?;

        Ok(choice.message.content.trim().to_string())
    }
}

#[async_trait]
impl Motivator for GadflyClient {
    async fn heckle(&self, steps: u32) -> Result<String> {
        GadflyClient::heckle(self, steps).await
    }
}

/// Build the generation prompt for a step count.
///
/// Same template every call, deterministic in `steps`. The model is told
/// not to echo the literal number so the sentence reads as a reaction, not
/// a report.
fn build_prompt(steps: u32) -> String {
    format!(
        "I have walked {steps} steps today. Write exactly one short, playfully \
         insulting motivational sentence reacting to that effort. Do not state \
         the literal number of steps in your reply."
    )
}
