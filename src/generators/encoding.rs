//! Character-encoding edge cases: mojibake, entities, escapes, RTL text,
//! control bytes. One fixed payload covering all of them.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Serialize;

use super::{guard, to_document, CorruptionCategory};
use crate::envelope::SimOutcome;

#[derive(Debug, Serialize)]
struct EncodingPayload {
    location: String,
    utf8: String,
    /// UTF-8 text deliberately mangled as if decoded through Latin-1.
    latin1: String,
    #[serde(rename = "htmlEntities")]
    html_entities: String,
    #[serde(rename = "urlEncoded")]
    url_encoded: String,
    base64: String,
    /// Escaped-unicode notation for the location's first character.
    unicode: String,
    emoji: String,
    rtl: String,
    #[serde(rename = "specialChars")]
    special_chars: String,
    #[serde(rename = "nullByte")]
    null_byte: String,
    #[serde(rename = "mixedEncoding")]
    mixed_encoding: String,
}

pub async fn generate(location: &str) -> SimOutcome {
    let payload = EncodingPayload {
        location: location.to_string(),
        utf8: format!("{location} - Mañana será mejor ☀️"),
        latin1: format!("{location} - MaÃ±ana"),
        html_entities: format!("&lt;{location}&gt; &amp; &quot;España&quot;"),
        url_encoded: format!("{}%20Espa%C3%B1a", urlencoding::encode(location)),
        base64: BASE64.encode(location.as_bytes()),
        unicode: location
            .chars()
            .next()
            .map(|c| format!("\\u{:04x}", c as u32))
            .unwrap_or_else(|| "\\u0000".to_string()),
        emoji: format!("🌡️☀️🌧️⛈️🌈 in {location}"),
        rtl: format!("{location} - دیربام"),
        special_chars: format!("{location} < > & \" ' / \\ \n \r \t \0"),
        null_byte: format!("{location}\0Hidden"),
        mixed_encoding: format!("{location} España&#209;"),
    };
    guard(CorruptionCategory::Encoding, to_document(&payload))
}
