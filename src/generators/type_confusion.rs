//! Every field's runtime type mismatches what a weather client expects.

use serde::Serialize;

use super::{guard, to_document, CorruptionCategory};
use crate::envelope::SimOutcome;

#[derive(Debug, Serialize)]
struct TypeConfusionPayload {
    /// Object where a plain string is expected.
    location: WrappedName,
    /// Number delivered as a string.
    temperature: String,
    /// Number delivered inside an array.
    humidity: Vec<i32>,
    #[serde(rename = "isRaining")]
    is_raining: String,
    /// Structured coordinates flattened into one string.
    coordinates: String,
    /// Date as a bare epoch number.
    date: u64,
    #[serde(rename = "nullValue")]
    null_value: String,
    #[serde(rename = "undefinedValue")]
    undefined_value: String,
    city: Vec<String>,
    country: WrappedValue,
    weather: String,
}

#[derive(Debug, Serialize)]
struct WrappedName {
    name: String,
}

#[derive(Debug, Serialize)]
struct WrappedValue {
    value: String,
}

pub async fn generate(location: &str) -> SimOutcome {
    let payload = TypeConfusionPayload {
        location: WrappedName {
            name: location.to_string(),
        },
        temperature: "25".to_string(),
        humidity: vec![85],
        is_raining: "true".to_string(),
        coordinates: format!("lat:40.4168,lon:-3.7038 in {location}"),
        date: 1_234_567_890,
        null_value: "null".to_string(),
        undefined_value: "undefined".to_string(),
        city: vec![location.to_string()],
        country: WrappedValue {
            value: location.to_string(),
        },
        weather: location.to_string(),
    };
    guard(CorruptionCategory::TypeConfusion, to_document(&payload))
}
