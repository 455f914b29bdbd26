//! Extreme-latency simulation for timeout and loading-state testing.

use chrono::Utc;
use serde::Serialize;

use super::{guard, to_document, CorruptionCategory};
use crate::delay;
use crate::envelope::SimOutcome;

#[derive(Debug, Serialize)]
struct SlowPayload {
    message: String,
    location: String,
    temp_c: i32,
    timestamp: String,
    warning: String,
    #[serde(rename = "requestedCity")]
    requested_city: String,
    #[serde(rename = "processingTime")]
    processing_time: String,
}

/// Suspend for the clamped delay, then answer with the applied delay echoed
/// back so the client (and tests) can see what was enforced.
pub async fn generate(location: &str, delay_secs: Option<i64>) -> SimOutcome {
    let applied = delay::simulate_delay(delay_secs).await;
    let payload = SlowPayload {
        message: format!("Response delayed by {applied} seconds for {location}"),
        location: location.to_string(),
        temp_c: 20,
        timestamp: Utc::now().to_rfc3339(),
        warning: "This endpoint intentionally slow for testing".to_string(),
        requested_city: location.to_string(),
        processing_time: format!("{applied}s"),
    };
    guard(CorruptionCategory::Slow, to_document(&payload))
}
