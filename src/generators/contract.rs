//! Breaking contract changes: the "same" weather response in shapes the
//! client was never told about.

use axum::http::StatusCode;
use once_cell::sync::Lazy;
use serde_json::{json, Value};

use crate::catalog::VariantCatalog;
use crate::envelope::SimOutcome;
use crate::rng::SimRng;

/// One case per alternate payload shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractShape {
    /// Field names swapped for their Spanish equivalents.
    RenamedFields,
    /// Array-for-string, string-for-number, number-for-boolean.
    SwappedTypes,
    /// Expected fields missing, unexpected ones present.
    MissingAndExtra,
    /// Nested structure collapsed into flat snake_case keys.
    Flattened,
    /// An array of key/value pairs where an object was expected.
    PairsInsteadOfObject,
    /// Same shape, values silently lower-cased.
    Lowercased,
}

impl ContractShape {
    pub fn all() -> Vec<ContractShape> {
        vec![
            ContractShape::RenamedFields,
            ContractShape::SwappedTypes,
            ContractShape::MissingAndExtra,
            ContractShape::Flattened,
            ContractShape::PairsInsteadOfObject,
            ContractShape::Lowercased,
        ]
    }

    pub fn build(&self, location: &str) -> Value {
        match self {
            ContractShape::RenamedFields => json!({
                "ubicacion": location,
                "temperatura": { "celsius": 25 },
                "condiciones": { "texto": "Sunny" },
                "pais": location,
            }),
            ContractShape::SwappedTypes => json!({
                "location": [location, "Country"],
                "temp_c": "25",
                "isRaining": 1,
                "city": location,
            }),
            ContractShape::MissingAndExtra => json!({
                "location": location,
                "newField": "unexpected",
                "cityName": location,
                "metadata": {
                    "version": 2,
                    "deprecated": true,
                    "requestedFor": location,
                },
            }),
            ContractShape::Flattened => json!({
                "location_name": location,
                "location_country": "Unknown",
                "current_temp_celsius": 25,
                "current_condition_text": "Sunny",
                "current_condition_icon": "sunny.png",
                "requested_location": location,
            }),
            ContractShape::PairsInsteadOfObject => json!({
                "data": [
                    ["location", location],
                    ["temp_c", 25],
                    ["condition", "Sunny"],
                    ["city", location],
                ],
            }),
            ContractShape::Lowercased => json!({
                "location": location.to_lowercase(),
                "temperature": 25,
                "weather": "sunny",
                "city": location.to_lowercase(),
            }),
        }
    }
}

static CATALOG: Lazy<VariantCatalog<ContractShape>> =
    Lazy::new(|| VariantCatalog::new(ContractShape::all()));

pub async fn generate(rng: &SimRng, location: &str) -> SimOutcome {
    let shape = CATALOG.pick(rng);
    SimOutcome::success(shape.build(location), StatusCode::OK)
}
