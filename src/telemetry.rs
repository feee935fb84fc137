//! Telemetry metric name constants.
//!
//! Centralised metric names for gadfly operations. Consumers install their
//! own `metrics` recorder (e.g. prometheus, statsd); without a recorder
//! installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `gadfly_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).

/// Total generation requests dispatched to the remote endpoint.
///
/// Labels: `status` ("ok" | "error"). Cache hits are not counted here;
/// they never dispatch.
pub const REQUESTS_TOTAL: &str = "gadfly_requests_total";

/// Dispatch-to-classification duration in seconds.
pub const REQUEST_DURATION_SECONDS: &str = "gadfly_request_duration_seconds";

/// Total sentence cache hits.
pub const CACHE_HITS_TOTAL: &str = "gadfly_cache_hits_total";

/// Total sentence cache misses (expired entries count as misses).
pub const CACHE_MISSES_TOTAL: &str = "gadfly_cache_misses_total";

/// Time spent waiting out the minimum request interval, in seconds.
///
/// Recorded only when a wait actually occurred.
pub const PACING_WAIT_SECONDS: &str = "gadfly_pacing_wait_seconds";
