//! Oversized payloads: one call allocates tens of megabytes on purpose to
//! stress client memory limits and pagination handling. The HTTP layer caps
//! how many of these run at once.

use serde::Serialize;

use super::{guard, to_document, CorruptionCategory};
use crate::envelope::SimOutcome;
use crate::rng::SimRng;

const HUGE_FIELD_REPEATS: usize = 200_000;
const RECORD_COUNT: usize = 20_000;
const RECORD_FILLER_LEN: usize = 400;
const METADATA_FILLER_LEN: usize = 200;
const EXTRA_FIELDS_PER_RECORD: usize = 25;
const DEEP_STRING_LEN: usize = 3_000_000;

#[derive(Debug, Serialize)]
struct OverflowPayload {
    status: String,
    #[serde(rename = "requestedLocation")]
    requested_location: String,
    #[serde(rename = "hugeField")]
    huge_field: String,
    #[serde(rename = "massiveList")]
    massive_list: Vec<OverflowRecord>,
    #[serde(rename = "nestedOverflow")]
    nested_overflow: Level1,
    #[serde(rename = "deepNesting")]
    deep_nesting: DeepNesting,
}

#[derive(Debug, Serialize)]
struct OverflowRecord {
    id: usize,
    name: String,
    description: String,
    coordinates: Coordinates,
    metadata: RecordMetadata,
}

#[derive(Debug, Serialize)]
struct Coordinates {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Serialize)]
struct RecordMetadata {
    city: String,
    data: String,
    extra: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Level1 {
    level2: Level2,
}

#[derive(Debug, Serialize)]
struct Level2 {
    level3: Level3,
}

#[derive(Debug, Serialize)]
struct Level3 {
    level4: Level4,
}

#[derive(Debug, Serialize)]
struct Level4 {
    level5: Level5,
}

#[derive(Debug, Serialize)]
struct Level5 {
    country: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct DeepNesting {
    location: String,
    a: NestA,
}

#[derive(Debug, Serialize)]
struct NestA {
    b: NestB,
}

#[derive(Debug, Serialize)]
struct NestB {
    c: NestC,
}

#[derive(Debug, Serialize)]
struct NestC {
    d: NestD,
}

#[derive(Debug, Serialize)]
struct NestD {
    e: String,
}

pub async fn generate(rng: &SimRng, location: &str) -> SimOutcome {
    let massive_list = (0..RECORD_COUNT)
        .map(|i| OverflowRecord {
            id: i,
            name: format!("{location} - Location {i}"),
            description: format!("Weather data for {location}: {}", "X".repeat(RECORD_FILLER_LEN)),
            coordinates: Coordinates {
                lat: rng.unit() * 180.0 - 90.0,
                lon: rng.unit() * 360.0 - 180.0,
            },
            metadata: RecordMetadata {
                city: location.to_string(),
                data: format!("{location}: {}", "Y".repeat(METADATA_FILLER_LEN)),
                extra: (0..EXTRA_FIELDS_PER_RECORD)
                    .map(|j| format!("{location}_field_{j}"))
                    .collect(),
            },
        })
        .collect();

    let payload = OverflowPayload {
        status: "success".to_string(),
        requested_location: location.to_string(),
        huge_field: format!("{location} - ").repeat(HUGE_FIELD_REPEATS),
        massive_list,
        nested_overflow: Level1 {
            level2: Level2 {
                level3: Level3 {
                    level4: Level4 {
                        level5: Level5 {
                            country: location.to_string(),
                            data: format!("{location}: {}", "Z".repeat(DEEP_STRING_LEN)),
                        },
                    },
                },
            },
        },
        deep_nesting: DeepNesting {
            location: location.to_string(),
            a: NestA {
                b: NestB {
                    c: NestC {
                        d: NestD {
                            e: format!("deep data for {location}"),
                        },
                    },
                },
            },
        },
    };
    guard(CorruptionCategory::Overflow, to_document(&payload))
}
