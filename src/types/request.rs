//! Request types for the chat-completions endpoint

use serde::Serialize;

use super::Message;

/// A chat-completions request body.
///
/// Built fresh per call from the configured model parameters plus the
/// generated prompt, and immutable once built. Field names match the wire
/// format, so `max_tokens` stays snake_case through serialization.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
    pub max_tokens: u32,
}
