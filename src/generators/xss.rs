//! Script-injection payload: the location is echoed into every unescaped
//! context a careless renderer might paste it into.

use serde::Serialize;

use super::{guard, to_document, CorruptionCategory};
use crate::envelope::SimOutcome;

#[derive(Debug, Serialize)]
struct XssPayload {
    location: String,
    country: String,
    #[serde(rename = "searchTerm")]
    search_term: String,
    current: CurrentConditions,
    description: String,
    name: String,
    encoded: String,
    #[serde(rename = "onClick")]
    on_click: String,
    style: String,
    #[serde(rename = "sqlInjection")]
    sql_injection: String,
    command: String,
    path: String,
}

#[derive(Debug, Serialize)]
struct CurrentConditions {
    temp_c: i32,
    condition: Condition,
    location_name: String,
    city: String,
}

#[derive(Debug, Serialize)]
struct Condition {
    text: String,
    icon: String,
}

/// One fixed payload; the injection variety lives in the fields, not in
/// variant selection. A client that renders any of this without sanitizing
/// has failed the audit.
pub async fn generate(location: &str) -> SimOutcome {
    let payload = XssPayload {
        location: format!("<script>alert(\"XSS in {location}\")</script>"),
        country: format!("{location}<img src=x onerror=\"alert('XSS via image')\">"),
        search_term: location.to_string(),
        current: CurrentConditions {
            temp_c: 25,
            condition: Condition {
                text: format!("<svg onload=\"alert('XSS in {location}')\">"),
                icon: "javascript:alert(\"XSS\")".to_string(),
            },
            location_name: format!("{location}</script><script>alert('Escaped')</script>"),
            city: format!("{location}\" onload=\"alert('XSS')\" data-city=\""),
        },
        description: format!("<iframe src=\"javascript:alert('{location}')\"></iframe>"),
        name: format!("<body onload=\"alert('{location}')\">"),
        encoded: urlencoding::encode(&format!("<script>alert('{location}')</script>")).into_owned(),
        on_click: format!("<div onclick=\"alert('Clicked in {location}')\">Click me</div>"),
        style: format!("<style>body{{background:url(\"javascript:alert('{location}')\")}}</style>"),
        sql_injection: format!("{location}'; DROP TABLE weather;--"),
        command: format!("; rm -rf / # {location}"),
        path: format!("../../etc/passwd?city={location}"),
    };
    guard(CorruptionCategory::Xss, to_document(&payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn payload_embeds_script_tag_and_location() {
        let outcome = generate("Quito").await;
        assert_eq!(outcome.status(), StatusCode::OK);
        match outcome {
            SimOutcome::Success { value, .. } => {
                let text = value.to_string();
                assert!(text.contains("<script>"));
                assert!(text.contains("Quito"));
            }
            SimOutcome::Failure { .. } => panic!("xss generator must succeed"),
        }
    }

    #[tokio::test]
    async fn search_term_keeps_the_raw_location() {
        let outcome = generate("Quito").await;
        match outcome {
            SimOutcome::Success { value, .. } => {
                assert_eq!(value["searchTerm"], "Quito");
                assert!(value["sqlInjection"].as_str().unwrap().contains("DROP TABLE"));
            }
            SimOutcome::Failure { .. } => panic!("xss generator must succeed"),
        }
    }
}
