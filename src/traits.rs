//! Core Motivator trait

use async_trait::async_trait;

use crate::Result;

/// The capability a display surface depends on: one sentence per step count.
///
/// [`GadflyClient`](crate::GadflyClient) is the production implementation;
/// tests and hosts can stub the trait to drive UI without touching the
/// network. Implementations hold no reference back to their callers.
#[async_trait]
pub trait Motivator: Send + Sync {
    /// Generate one motivational sentence for the given step count.
    async fn heckle(&self, steps: u32) -> Result<String>;
}
