//! Simulated rate limiting: always 429, with a retry-after hint the client
//! is expected to read and honor.

use axum::http::StatusCode;

use crate::envelope::SimOutcome;
use crate::rng::SimRng;

pub const RETRY_AFTER_MIN_SECS: u64 = 60;
pub const RETRY_AFTER_MAX_SECS: u64 = 360;

pub async fn generate(rng: &SimRng, location: &str) -> SimOutcome {
    let retry_after = rng.range_inclusive(RETRY_AFTER_MIN_SECS, RETRY_AFTER_MAX_SECS);
    SimOutcome::failure(
        format!("Rate limit exceeded for \"{location}\". Retry after {retry_after} seconds"),
        StatusCode::TOO_MANY_REQUESTS,
    )
}
