//! Tests for the step-source feed.
//!
//! Uses a stub [`Motivator`] so the feed's suppression and ordering policy
//! is exercised without any HTTP.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use futures_util::StreamExt;

use gadfly::{GadflyError, Motivator, Result, heckle_stream, heckle_stream_with_buffer};

/// Stub that echoes the step count, failing for odd counts.
struct EvenOnly {
    calls: AtomicU32,
}

impl EvenOnly {
    fn new() -> Self {
        Self {
            calls: AtomicU32::new(0),
        }
    }
}

#[async_trait]
impl Motivator for EvenOnly {
    async fn heckle(&self, steps: u32) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if steps % 2 == 0 {
            Ok(format!("sentence for {steps}"))
        } else {
            Err(GadflyError::EmptyResponse)
        }
    }
}

#[tokio::test]
async fn one_sentence_per_step_update() {
    let motivator = Arc::new(EvenOnly::new());
    let steps = tokio_stream::iter([1000u32, 2000, 3000]);

    let sentences: Vec<String> = heckle_stream(motivator, steps).collect().await;
    assert_eq!(
        sentences,
        vec![
            "sentence for 1000".to_string(),
            "sentence for 2000".to_string(),
            "sentence for 3000".to_string(),
        ]
    );
}

/// Failed generations are suppressed, not forwarded: the consumer sees only
/// the successes, in order.
#[tokio::test]
async fn failures_are_suppressed() {
    let motivator = Arc::new(EvenOnly::new());
    let steps = tokio_stream::iter([1001u32, 2000, 3001, 4000]);

    let sentences: Vec<String> = heckle_stream(motivator.clone(), steps).collect().await;
    assert_eq!(
        sentences,
        vec!["sentence for 2000".to_string(), "sentence for 4000".to_string()]
    );
    // Every update was attempted; only the failures were dropped.
    assert_eq!(motivator.calls.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn empty_source_yields_empty_stream() {
    let motivator = Arc::new(EvenOnly::new());
    let steps = tokio_stream::iter(Vec::<u32>::new());

    let sentences: Vec<String> = heckle_stream(motivator.clone(), steps).collect().await;
    assert!(sentences.is_empty());
    assert_eq!(motivator.calls.load(Ordering::SeqCst), 0);
}

/// Dropping the consumer stops the producer: no further heckle calls are
/// made once the receiver hangs up.
#[tokio::test]
async fn dropped_consumer_stops_producer() {
    let motivator = Arc::new(EvenOnly::new());
    let steps = tokio_stream::iter((0..100).map(|i| i * 2));

    // Buffer of 1: the producer can run at most a couple of updates ahead
    // of the consumer before it blocks on send.
    let mut sentences = heckle_stream_with_buffer(motivator.clone(), steps, 1);

    assert!(sentences.next().await.is_some());
    drop(sentences);

    // Give the producer task a moment to observe the hangup.
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    assert!(
        motivator.calls.load(Ordering::SeqCst) < 100,
        "producer should stop once the consumer is gone"
    );
}
