//! Gadfly — LLM-backed motivational heckling for daily step counts.
//!
//! This crate is the remote-client core of a step-counter application: it
//! turns the day's step count into one short, playfully insulting
//! motivational sentence by calling an OpenAI-compatible chat-completions
//! endpoint. In front of the network sit a 5-minute sentence cache keyed
//! by step count and a 1-second minimum spacing between outbound requests.
//! Every failure maps into a closed error taxonomy; the client never
//! retries on its own.
//!
//! # Example
//!
//! ```rust,no_run
//! use gadfly::{ClientConfig, GadflyClient};
//!
//! #[tokio::main]
//! async fn main() -> gadfly::Result<()> {
//!     let client = GadflyClient::new(ClientConfig::new("sk-your-key"))?;
//!
//!     let sentence = client.heckle(4_200).await?;
//!     println!("{sentence}");
//!     Ok(())
//! }
//! ```
//!
//! # Feeding from a step source
//!
//! Hosts that observe a live step count plug it in as a stream and render
//! whatever comes out; failed generations are suppressed, not surfaced:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use futures_util::StreamExt;
//! use gadfly::{ClientConfig, GadflyClient, heckle_stream};
//!
//! #[tokio::main]
//! async fn main() -> gadfly::Result<()> {
//!     let client = Arc::new(GadflyClient::new(ClientConfig::new("sk-your-key"))?);
//!
//!     let updates = tokio_stream::iter([1_000, 2_500, 4_200]);
//!     let mut sentences = heckle_stream(client, updates);
//!     while let Some(sentence) = sentences.next().await {
//!         println!("{sentence}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod feed;
pub mod telemetry;
pub mod traits;
pub mod types;

pub use cache::{CacheConfig, DEFAULT_TTL, ResponseCache};
pub use client::GadflyClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use error::{GadflyError, Result};
pub use feed::{DEFAULT_FEED_BUFFER, heckle_stream, heckle_stream_with_buffer};
pub use traits::Motivator;
pub use types::{ChatRequest, ChatResponse, Choice, ErrorBody, ErrorEnvelope, Message, Role, Usage};
