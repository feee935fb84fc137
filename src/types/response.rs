//! Response types decoded from the chat-completions endpoint

use serde::Deserialize;

use super::Message;

/// A decoded chat-completions response.
///
/// Decoding is deliberately lenient: providers differ on which envelope
/// fields they populate, and only `choices[0].message.content` is consumed.
/// A missing `choices` array decodes as empty; the client reports that as
/// [`EmptyResponse`](crate::GadflyError::EmptyResponse) rather than a
/// decode failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub object: Option<String>,
    #[serde(default)]
    pub created: Option<u64>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

/// One completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub index: u32,
    pub message: Message,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Best-effort error envelope returned on non-200 statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

/// The `error` object inside [`ErrorEnvelope`]. Unknown sibling fields
/// (`type`, `code`, …) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
