//! Artificial latency with a hard upper bound.

use std::time::Duration;

pub const DEFAULT_DELAY_SECS: i64 = 5;
pub const MAX_DELAY_SECS: i64 = 30;

/// Clamp a caller-supplied delay to `[0, 30]`; absent means the default 5.
pub fn clamp_delay(requested: Option<i64>) -> u64 {
    requested.unwrap_or(DEFAULT_DELAY_SECS).clamp(0, MAX_DELAY_SECS) as u64
}

/// Suspend the current request for the clamped delay and report what was
/// applied so the payload can echo it. Sleeping goes through the runtime
/// timer, so other in-flight requests are not held up.
pub async fn simulate_delay(requested: Option<i64>) -> u64 {
    let applied = clamp_delay(requested);
    tokio::time::sleep(Duration::from_secs(applied)).await;
    applied
}
