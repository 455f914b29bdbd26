//! The mixed-attack combinator: one shape draw, then two independent coin
//! flips. The delay coin is flipped before the failure coin, and the two are
//! never collapsed into one branch, so a stalled response can still come
//! back as a failure.

use std::time::Duration;

use axum::http::StatusCode;
use once_cell::sync::Lazy;
use serde_json::{json, Value};

use crate::catalog::VariantCatalog;
use crate::envelope::SimOutcome;
use crate::rng::SimRng;

pub const DELAY_PROBABILITY: f64 = 0.3;
pub const FAILURE_PROBABILITY: f64 = 0.2;
/// Fixed stall for this category, separate from the slow endpoint's bound.
pub const COMBINED_DELAY_SECS: u64 = 2;

/// One case per mixed-attack payload shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixedAttack {
    PartialXss,
    InconsistentTypes,
    SpecialCharKeys,
    ProblematicUnicode,
    SqlInjection,
    ExcessiveNesting,
    MixedTypeArrays,
    NumericExtremes,
    InjectedFieldNames,
}

impl MixedAttack {
    pub fn all() -> Vec<MixedAttack> {
        vec![
            MixedAttack::PartialXss,
            MixedAttack::InconsistentTypes,
            MixedAttack::SpecialCharKeys,
            MixedAttack::ProblematicUnicode,
            MixedAttack::SqlInjection,
            MixedAttack::ExcessiveNesting,
            MixedAttack::MixedTypeArrays,
            MixedAttack::NumericExtremes,
            MixedAttack::InjectedFieldNames,
        ]
    }

    pub fn build(&self, location: &str) -> Value {
        match self {
            MixedAttack::PartialXss => json!({
                "location": location,
                "temp_c": 25,
                "alert": format!("<script>alert(\"random XSS in {location}\")</script>"),
            }),
            MixedAttack::InconsistentTypes => json!({
                "location": 123,
                "temp_c": "twenty five",
                "condition": null,
                "humidity": null,
                "city": location,
            }),
            MixedAttack::SpecialCharKeys => json!({
                "location@#": location,
                "temp-c": 25,
                "cond!tion": { "!text": "Sunny" },
                format!("city-{location}"): "test",
            }),
            MixedAttack::ProblematicUnicode => json!({
                "location": format!("{location} 🌍"),
                "temp_c": "25️⃣",
                "condition": "☀️🌤️⛅🌦️",
                "city": format!("🏙️ {location}"),
            }),
            MixedAttack::SqlInjection => json!({
                "location": format!("{location}'; DROP TABLE weather;--"),
                "search": format!("{location}' OR '1'='1"),
                "filter": format!("{location}'; DELETE FROM users WHERE '1'='1'--"),
            }),
            MixedAttack::ExcessiveNesting => json!({
                "location": location,
                "a": { "b": { "c": { "d": { "e": { "f": { "g": { "h": { "i": {
                    "j": format!("too deep for {location}"),
                } } } } } } } } },
            }),
            MixedAttack::MixedTypeArrays => json!({
                "locations": [location, 123, null, null, { "city": location }, [location]],
            }),
            MixedAttack::NumericExtremes => json!({
                "location": location,
                "temp_c": 9_007_199_254_740_991i64,
                "humidity": -9_999_999,
                "pressure": 1e-9,
            }),
            MixedAttack::InjectedFieldNames => json!({
                format!("<script>alert('{location}')</script>"): location,
                "location": format!("'; DROP TABLE {location}; --"),
                "data": format!("../../etc/passwd?city={location}"),
            }),
        }
    }
}

static CATALOG: Lazy<VariantCatalog<MixedAttack>> =
    Lazy::new(|| VariantCatalog::new(MixedAttack::all()));

pub async fn generate(rng: &SimRng, location: &str) -> SimOutcome {
    let attack = *CATALOG.pick(rng);

    // Delay is decided first and independently of the failure draw.
    if rng.chance(DELAY_PROBABILITY) {
        tokio::time::sleep(Duration::from_secs(COMBINED_DELAY_SECS)).await;
    }

    if rng.chance(FAILURE_PROBABILITY) {
        return SimOutcome::failure(
            format!("Random corruption error for {location}"),
            StatusCode::INTERNAL_SERVER_ERROR,
        );
    }

    SimOutcome::success(attack.build(location), StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_attack_shape_builds_a_document() {
        for attack in MixedAttack::all() {
            let value = attack.build("Bariloche");
            assert!(value.is_object(), "{attack:?} did not build an object");
        }
    }

    #[test]
    fn injected_field_names_carry_the_script_key() {
        let value = MixedAttack::InjectedFieldNames.build("Salta");
        assert!(value
            .as_object()
            .unwrap()
            .keys()
            .any(|k| k.contains("<script>")));
    }

    /// Long-run rates: ~30% of calls stall for 2 s, ~20% fail, and the two
    /// are independent, so the joint rate sits near 6%.
    #[tokio::test(start_paused = true)]
    async fn failure_and_delay_rates_converge_and_stay_independent() {
        let rng = SimRng::seeded(4242);
        let trials = 10_000;
        let mut failures = 0u32;
        let mut delayed = 0u32;
        let mut delayed_failures = 0u32;

        for _ in 0..trials {
            let started = tokio::time::Instant::now();
            let outcome = generate(&rng, "Mendoza").await;
            let was_delayed = started.elapsed() >= Duration::from_secs(COMBINED_DELAY_SECS);
            let failed = !outcome.is_success();
            if was_delayed {
                delayed += 1;
            }
            if failed {
                failures += 1;
            }
            if was_delayed && failed {
                delayed_failures += 1;
            }
        }

        let failure_rate = f64::from(failures) / f64::from(trials);
        let delay_rate = f64::from(delayed) / f64::from(trials);
        let joint_rate = f64::from(delayed_failures) / f64::from(trials);

        assert!((failure_rate - FAILURE_PROBABILITY).abs() < 0.03, "failure rate {failure_rate}");
        assert!((delay_rate - DELAY_PROBABILITY).abs() < 0.03, "delay rate {delay_rate}");
        assert!(
            (joint_rate - FAILURE_PROBABILITY * DELAY_PROBABILITY).abs() < 0.02,
            "joint rate {joint_rate} suggests the draws are correlated"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn failures_embed_the_location() {
        let rng = SimRng::seeded(77);
        for _ in 0..200 {
            if let SimOutcome::Failure { error, status } = generate(&rng, "Ushuaia").await {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert!(error.contains("Ushuaia"));
                return;
            }
        }
        panic!("no failure observed in 200 trials");
    }
}
