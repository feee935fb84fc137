//! Wire types for the chat-completions exchange.

mod message;
mod request;
mod response;

pub use message::{Message, Role};
pub use request::ChatRequest;
pub use response::{ChatResponse, Choice, ErrorBody, ErrorEnvelope, Usage};
