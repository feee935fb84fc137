//! Step-source plumbing: step counts in, sentences out.
//!
//! [`heckle_stream`] adapts the host's step-count observer (a stream that
//! fires once on initial availability and again on each material update)
//! into a stream of sentences. Failures are logged at debug level and
//! suppressed rather than forwarded — the feature is cosmetic, and a
//! display surface should show nothing instead of an error.
//!
//! Built on a bounded `tokio::sync::mpsc` channel with a spawned producer
//! task, so a slow consumer backpressures the producer instead of filling
//! unbounded memory. When the consumer drops the stream, the producer
//! stops.

use std::pin::Pin;
use std::sync::Arc;

use futures_util::{Stream, StreamExt};
use tokio_stream::wrappers::ReceiverStream;
use tracing::debug;

use crate::traits::Motivator;

/// Default number of sentences buffered between producer and consumer.
pub const DEFAULT_FEED_BUFFER: usize = 16;

/// Turn a stream of step counts into a stream of sentences.
///
/// One sentence is produced per step update that generates successfully;
/// failed updates are skipped. The stream ends when the step source ends
/// or the consumer hangs up.
///
/// # Panics
///
/// Requires a tokio runtime context (called within an async fn).
pub fn heckle_stream<S>(
    motivator: Arc<dyn Motivator>,
    steps: S,
) -> Pin<Box<dyn Stream<Item = String> + Send>>
where
    S: Stream<Item = u32> + Send + 'static,
{
    heckle_stream_with_buffer(motivator, steps, DEFAULT_FEED_BUFFER)
}

/// [`heckle_stream`] with an explicit channel buffer size.
pub fn heckle_stream_with_buffer<S>(
    motivator: Arc<dyn Motivator>,
    steps: S,
    buffer_size: usize,
) -> Pin<Box<dyn Stream<Item = String> + Send>>
where
    S: Stream<Item = u32> + Send + 'static,
{
    let (tx, rx) = tokio::sync::mpsc::channel(buffer_size);

    tokio::spawn(async move {
        let mut steps = Box::pin(steps);
        while let Some(count) = steps.next().await {
            match motivator.heckle(count).await {
                Ok(sentence) => {
                    if tx.send(sentence).await.is_err() {
                        break; // receiver dropped
                    }
                }
                Err(err) => {
                    debug!(steps = count, error = %err, "suppressing failed sentence");
                }
            }
        }
    });

    Box::pin(ReceiverStream::new(rx))
}
