//! Simulated HTTP error responses. Always a failure envelope.

use axum::http::StatusCode;

use crate::envelope::SimOutcome;
use crate::error::{describe_error, SIMULATED_ERROR_CODES};
use crate::rng::SimRng;

/// An explicit code wins; otherwise one of the usual suspects is drawn.
/// Codes outside 100-599 are treated as if the caller had sent none.
pub async fn generate(rng: &SimRng, location: &str, explicit: Option<u16>) -> SimOutcome {
    let status = explicit
        .filter(|code| (100..=599).contains(code))
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or_else(|| SIMULATED_ERROR_CODES[rng.index(SIMULATED_ERROR_CODES.len())]);
    SimOutcome::failure(describe_error(status, location), status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn explicit_code_is_honored_exactly() {
        let rng = SimRng::seeded(8);
        let outcome = generate(&rng, "Caracas", Some(404)).await;
        assert_eq!(outcome.status(), StatusCode::NOT_FOUND);
        match outcome {
            SimOutcome::Failure { error, .. } => assert!(error.contains("Caracas")),
            SimOutcome::Success { .. } => panic!("error generator must fail"),
        }
    }

    #[tokio::test]
    async fn omitted_code_comes_from_the_fixed_set() {
        let rng = SimRng::seeded(8);
        for _ in 0..100 {
            let outcome = generate(&rng, "Caracas", None).await;
            assert!(SIMULATED_ERROR_CODES.contains(&outcome.status()));
            assert!(!outcome.is_success());
        }
    }

    #[tokio::test]
    async fn out_of_range_code_is_ignored() {
        let rng = SimRng::seeded(8);
        let outcome = generate(&rng, "Caracas", Some(999)).await;
        assert!(SIMULATED_ERROR_CODES.contains(&outcome.status()));
    }

    #[tokio::test]
    async fn unknown_but_valid_code_gets_the_fallback_message() {
        let rng = SimRng::seeded(8);
        let outcome = generate(&rng, "Caracas", Some(418)).await;
        assert_eq!(outcome.status(), StatusCode::IM_A_TEAPOT);
        match outcome {
            SimOutcome::Failure { error, .. } => assert!(error.contains("Unknown error")),
            SimOutcome::Success { .. } => panic!("error generator must fail"),
        }
    }
}
