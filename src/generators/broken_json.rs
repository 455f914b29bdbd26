//! Syntactically invalid JSON bodies delivered under a JSON content type.
//!
//! The lie about the format is the point: the HTTP layer forwards the raw
//! text verbatim so the client's parser takes the hit. Do not "fix" these
//! templates into valid JSON.

use axum::http::StatusCode;
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::catalog::VariantCatalog;
use crate::envelope::SimOutcome;
use crate::rng::SimRng;

/// The ways a JSON body can be wrecked while still looking plausible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrokenJsonTemplate {
    UnterminatedString,
    DoubledComma,
    UnquotedKeys,
    UndefinedValue,
    FunctionValue,
    NanAndInfinity,
    SingleQuotedKeys,
    BlockComment,
    Truncated,
    TripledComma,
}

impl BrokenJsonTemplate {
    pub fn all() -> Vec<BrokenJsonTemplate> {
        vec![
            BrokenJsonTemplate::UnterminatedString,
            BrokenJsonTemplate::DoubledComma,
            BrokenJsonTemplate::UnquotedKeys,
            BrokenJsonTemplate::UndefinedValue,
            BrokenJsonTemplate::FunctionValue,
            BrokenJsonTemplate::NanAndInfinity,
            BrokenJsonTemplate::SingleQuotedKeys,
            BrokenJsonTemplate::BlockComment,
            BrokenJsonTemplate::Truncated,
            BrokenJsonTemplate::TripledComma,
        ]
    }

    /// Render the malformed body with the location spliced in. Every arm
    /// must stay structurally invalid; the parser test keeps that honest.
    pub fn render(&self, location: &str) -> String {
        match self {
            BrokenJsonTemplate::UnterminatedString => {
                format!("{{\"location\": \"{location}\", \"temp\": 25, \"broken\": \"unterminated")
            }
            BrokenJsonTemplate::DoubledComma => {
                format!("{{\"location\": \"{location}\",, \"temp\": 25}}")
            }
            BrokenJsonTemplate::UnquotedKeys => {
                format!("{{location: \"{location}\", temp: 25}}")
            }
            BrokenJsonTemplate::UndefinedValue => {
                format!("{{\"location\": \"{location}\", \"temp\": undefined}}")
            }
            BrokenJsonTemplate::FunctionValue => {
                format!("{{\"location\": \"{location}\", \"calculate\": function(){{return 25}}}}")
            }
            BrokenJsonTemplate::NanAndInfinity => {
                format!("{{\"location\": \"{location}\", \"temp\": NaN, \"humidity\": Infinity}}")
            }
            BrokenJsonTemplate::SingleQuotedKeys => {
                format!("{{'location': \"{location}\", 'temp': 25}}")
            }
            BrokenJsonTemplate::BlockComment => {
                format!("{{\"location\": \"{location}\", /* comment */ \"temp\": 25}}")
            }
            BrokenJsonTemplate::Truncated => {
                format!("{{\"location\": \"{location}\", \"weather\": {{\"temp\": 25, \"condition\":")
            }
            BrokenJsonTemplate::TripledComma => {
                format!("{{\"location\": \"{location}\",,, \"temp\": 25}}")
            }
        }
    }
}

static CATALOG: Lazy<VariantCatalog<BrokenJsonTemplate>> =
    Lazy::new(|| VariantCatalog::new(BrokenJsonTemplate::all()));

/// Pick one template and return its raw text as the envelope value. Status
/// is 200: the response claims to be fine right up until it is parsed.
pub async fn generate(rng: &SimRng, location: &str) -> SimOutcome {
    let template = CATALOG.pick(rng);
    SimOutcome::success(Value::String(template.render(location)), StatusCode::OK)
}
