//! Corruption generators, one module per category.
//!
//! Each generator takes the caller's location string, builds a deliberately
//! hostile payload for its category, and returns a [`SimOutcome`]. Nothing in
//! here is allowed to panic or error past the generator boundary: assembly
//! faults become a 500 failure envelope.

pub mod broken_json;
pub mod contract;
pub mod encoding;
pub mod http_error;
pub mod overflow;
pub mod random;
pub mod rate_limit;
pub mod slow;
pub mod type_confusion;
pub mod xss;

use axum::http::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::envelope::SimOutcome;
use crate::error::GeneratorError;

/// The fixed set of corruption modes a caller can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorruptionCategory {
    Xss,
    BrokenJson,
    Slow,
    HttpError,
    Overflow,
    ContractChange,
    RandomCorruption,
    TypeConfusion,
    Encoding,
    RateLimit,
}

impl CorruptionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CorruptionCategory::Xss => "xss",
            CorruptionCategory::BrokenJson => "broken-json",
            CorruptionCategory::Slow => "slow",
            CorruptionCategory::HttpError => "error",
            CorruptionCategory::Overflow => "overflow",
            CorruptionCategory::ContractChange => "contract-change",
            CorruptionCategory::RandomCorruption => "random",
            CorruptionCategory::TypeConfusion => "type-confusion",
            CorruptionCategory::Encoding => "encoding",
            CorruptionCategory::RateLimit => "rate-limit",
        }
    }

    pub fn all() -> Vec<CorruptionCategory> {
        vec![
            CorruptionCategory::Xss,
            CorruptionCategory::BrokenJson,
            CorruptionCategory::Slow,
            CorruptionCategory::HttpError,
            CorruptionCategory::Overflow,
            CorruptionCategory::ContractChange,
            CorruptionCategory::RandomCorruption,
            CorruptionCategory::TypeConfusion,
            CorruptionCategory::Encoding,
            CorruptionCategory::RateLimit,
        ]
    }
}

/// Serialize a typed payload into the generic document the HTTP layer ships.
pub(crate) fn to_document<T: Serialize>(payload: &T) -> Result<Value, GeneratorError> {
    Ok(serde_json::to_value(payload)?)
}

/// Shared failure boundary: a payload that fails to assemble becomes a 500
/// failure envelope instead of an error escaping to the HTTP layer.
pub(crate) fn guard(
    category: CorruptionCategory,
    built: Result<Value, GeneratorError>,
) -> SimOutcome {
    match built {
        Ok(value) => SimOutcome::success(value, StatusCode::OK),
        Err(err) => {
            log::error!("{} payload assembly failed: {err}", category.as_str());
            SimOutcome::failure(
                format!("Error simulating {} response", category.as_str()),
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimRng;

    /// Every category must hand back a well-formed envelope: an unambiguous
    /// tag and a status in the valid HTTP range.
    #[tokio::test(start_paused = true)]
    async fn every_category_returns_a_well_formed_envelope() {
        let rng = SimRng::seeded(1234);
        for category in CorruptionCategory::all() {
            let outcome = match category {
                CorruptionCategory::Xss => xss::generate("Montevideo").await,
                CorruptionCategory::BrokenJson => broken_json::generate(&rng, "Montevideo").await,
                CorruptionCategory::Slow => slow::generate("Montevideo", Some(0)).await,
                CorruptionCategory::HttpError => http_error::generate(&rng, "Montevideo", None).await,
                CorruptionCategory::Overflow => overflow::generate(&rng, "Montevideo").await,
                CorruptionCategory::ContractChange => contract::generate(&rng, "Montevideo").await,
                CorruptionCategory::RandomCorruption => random::generate(&rng, "Montevideo").await,
                CorruptionCategory::TypeConfusion => type_confusion::generate("Montevideo").await,
                CorruptionCategory::Encoding => encoding::generate("Montevideo").await,
                CorruptionCategory::RateLimit => rate_limit::generate(&rng, "Montevideo").await,
            };
            let status = outcome.status().as_u16();
            assert!(
                (100..=599).contains(&status),
                "{}: status {status} out of range",
                category.as_str()
            );
            match outcome {
                SimOutcome::Success { value, .. } => {
                    assert!(!value.is_null(), "{}: empty success value", category.as_str())
                }
                SimOutcome::Failure { error, .. } => {
                    assert!(!error.is_empty(), "{}: empty failure message", category.as_str())
                }
            }
        }
    }
}
