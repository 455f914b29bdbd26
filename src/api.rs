//! HTTP boundary: routes, envelope-to-response translation, and the
//! per-endpoint annotations the audited client sees alongside each payload.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::sync::Semaphore;

use crate::envelope::SimOutcome;
use crate::error::FaultClass;
use crate::generators::{self, CorruptionCategory};
use crate::rng::SimRng;
use crate::upstream::{Provider, UpstreamClient};

/// Concurrent overflow builds allowed before callers queue; each build
/// allocates tens of megabytes.
const OVERFLOW_PERMITS: usize = 4;

#[derive(Clone)]
pub struct ApiState {
    rng: Arc<SimRng>,
    overflow_gate: Arc<Semaphore>,
    upstream: Arc<UpstreamClient>,
}

impl ApiState {
    pub fn new(rng: Arc<SimRng>) -> Self {
        Self {
            rng,
            overflow_gate: Arc::new(Semaphore::new(OVERFLOW_PERMITS)),
            upstream: Arc::new(UpstreamClient::new()),
        }
    }
}

pub fn app(state: ApiState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/xss/:country", get(xss))
        .route("/broken-json/:country", get(broken_json))
        .route("/slow/:country", get(slow))
        .route("/error/:country", get(http_error))
        .route("/overflow/:country", get(overflow))
        .route("/contract-change/:country", get(contract_change))
        .route("/random/:country", get(random_corruption))
        .route("/type-confusion/:country", get(type_confusion))
        .route("/encoding/:country", get(encoding))
        .route("/rate-limit/:country", get(rate_limit))
        .route("/weather/:country", get(weather_passthrough))
        .route("/openweather/:country", get(openweather_passthrough))
        .with_state(state)
}

pub async fn serve(state: ApiState, port: u16) -> anyhow::Result<()> {
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Weather chaos simulator listening on {addr}");
    axum::serve(listener, app(state)).await?;
    Ok(())
}

/// Query parameters arrive as raw strings so garbage values degrade to the
/// defaults instead of rejecting the request.
#[derive(Debug, Deserialize, Default)]
struct SlowParams {
    delay: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct ErrorParams {
    code: Option<String>,
}

async fn index() -> Json<Value> {
    Json(json!({ "message": "squall weather chaos api is up" }))
}

async fn xss(State(_state): State<ApiState>, Path(country): Path<String>) -> Response {
    let outcome = generators::xss::generate(&country).await;
    translated(
        outcome,
        CorruptionCategory::Xss,
        "warning",
        format!("XSS Attack Simulation for \"{country}\" - Sanitize before rendering!"),
    )
}

async fn broken_json(State(state): State<ApiState>, Path(country): Path<String>) -> Response {
    match generators::broken_json::generate(&state.rng, &country).await {
        SimOutcome::Success { value, status } => {
            // Forward the invalid text verbatim under a JSON content type;
            // re-serializing it would quietly repair the corruption.
            let body = match value {
                Value::String(raw) => raw,
                other => other.to_string(),
            };
            Response::builder()
                .status(status)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
        }
        SimOutcome::Failure { error, status } => {
            failure_response(error, status, CorruptionCategory::BrokenJson)
        }
    }
}

async fn slow(
    State(_state): State<ApiState>,
    Path(country): Path<String>,
    Query(params): Query<SlowParams>,
) -> Response {
    let requested = params.delay.as_deref().and_then(|raw| raw.parse().ok());
    let applied = crate::delay::clamp_delay(requested);
    let outcome = generators::slow::generate(&country, requested).await;
    translated(
        outcome,
        CorruptionCategory::Slow,
        "info",
        format!("Response for \"{country}\" delayed by {applied} seconds"),
    )
}

async fn http_error(
    State(state): State<ApiState>,
    Path(country): Path<String>,
    Query(params): Query<ErrorParams>,
) -> Response {
    let code = params.code.as_deref().and_then(|raw| raw.parse().ok());
    let outcome = generators::http_error::generate(&state.rng, &country, code).await;
    translated(
        outcome,
        CorruptionCategory::HttpError,
        "warning",
        format!("Simulated HTTP error for \"{country}\""),
    )
}

async fn overflow(State(state): State<ApiState>, Path(country): Path<String>) -> Response {
    let _permit = match state.overflow_gate.acquire().await {
        Ok(permit) => permit,
        Err(_) => {
            return failure_response(
                "Overflow generator unavailable".to_string(),
                StatusCode::SERVICE_UNAVAILABLE,
                CorruptionCategory::Overflow,
            )
        }
    };
    let outcome = generators::overflow::generate(&state.rng, &country).await;
    translated(
        outcome,
        CorruptionCategory::Overflow,
        "warning",
        format!("Large payload for \"{country}\" - May cause memory issues!"),
    )
}

async fn contract_change(State(state): State<ApiState>, Path(country): Path<String>) -> Response {
    let outcome = generators::contract::generate(&state.rng, &country).await;
    translated(
        outcome,
        CorruptionCategory::ContractChange,
        "warning",
        format!("API contract changed for \"{country}\" - Structure differs from expected!"),
    )
}

async fn random_corruption(State(state): State<ApiState>, Path(country): Path<String>) -> Response {
    let outcome = generators::random::generate(&state.rng, &country).await;
    translated(
        outcome,
        CorruptionCategory::RandomCorruption,
        "warning",
        format!("Random corruption for \"{country}\" - Expect the unexpected!"),
    )
}

async fn type_confusion(State(_state): State<ApiState>, Path(country): Path<String>) -> Response {
    let outcome = generators::type_confusion::generate(&country).await;
    translated(
        outcome,
        CorruptionCategory::TypeConfusion,
        "warning",
        format!("Type confusion for \"{country}\" - Validate types before using!"),
    )
}

async fn encoding(State(_state): State<ApiState>, Path(country): Path<String>) -> Response {
    let outcome = generators::encoding::generate(&country).await;
    translated(
        outcome,
        CorruptionCategory::Encoding,
        "warning",
        format!("Encoding issues for \"{country}\" - Handle special characters carefully!"),
    )
}

async fn rate_limit(State(state): State<ApiState>, Path(country): Path<String>) -> Response {
    let outcome = generators::rate_limit::generate(&state.rng, &country).await;
    translated(
        outcome,
        CorruptionCategory::RateLimit,
        "warning",
        format!("Rate limit for \"{country}\" - Read Retry-After and back off!"),
    )
}

async fn weather_passthrough(State(state): State<ApiState>, Path(country): Path<String>) -> Response {
    passthrough(state.upstream.fetch(Provider::WeatherApi, &country).await)
}

async fn openweather_passthrough(
    State(state): State<ApiState>,
    Path(country): Path<String>,
) -> Response {
    passthrough(state.upstream.fetch(Provider::OpenWeather, &country).await)
}

/// Translate an envelope into the annotated JSON the audited client consumes.
fn translated(
    outcome: SimOutcome,
    category: CorruptionCategory,
    note_key: &str,
    note: String,
) -> Response {
    match outcome {
        SimOutcome::Success { value, status } => {
            log::info!("{} simulation served ({status})", category.as_str());
            (status, Json(json!({ "message": value, note_key: note }))).into_response()
        }
        SimOutcome::Failure { error, status } => failure_response(error, status, category),
    }
}

fn failure_response(error: String, status: StatusCode, category: CorruptionCategory) -> Response {
    log::warn!(
        "{} returned a {} ({status})",
        category.as_str(),
        FaultClass::from_status(status).as_str()
    );
    (
        status,
        Json(json!({ "error": error, "status": status.as_u16(), "success": false })),
    )
        .into_response()
}

/// Passthrough responses skip the simulator annotations.
fn passthrough(outcome: SimOutcome) -> Response {
    match outcome {
        SimOutcome::Success { value, status } => {
            (status, Json(json!({ "message": value }))).into_response()
        }
        SimOutcome::Failure { error, status } => {
            log::warn!("weather passthrough failed ({status})");
            (
                status,
                Json(json!({ "error": error, "status": status.as_u16(), "success": false })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    fn test_state() -> ApiState {
        ApiState::new(Arc::new(SimRng::seeded(99)))
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn success_translation_carries_message_and_annotation() {
        let response = xss(State(test_state()), Path("Quito".to_string())).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["message"]["searchTerm"].as_str().unwrap().contains("Quito"));
        assert!(body["warning"].as_str().unwrap().contains("Quito"));
    }

    #[tokio::test]
    async fn failure_translation_carries_the_error_triple() {
        let response = http_error(
            State(test_state()),
            Path("Quito".to_string()),
            Query(ErrorParams {
                code: Some("503".to_string()),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["status"], 503);
        assert!(body["error"].as_str().unwrap().contains("Quito"));
    }

    #[tokio::test]
    async fn broken_json_body_is_forwarded_raw() {
        let response = broken_json(State(test_state()), Path("Lima".to_string())).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(serde_json::from_str::<Value>(&text).is_err());
        assert!(text.contains("Lima"));
    }

    #[tokio::test]
    async fn garbage_query_values_fall_back_to_defaults() {
        let response = http_error(
            State(test_state()),
            Path("Lima".to_string()),
            Query(ErrorParams {
                code: Some("not-a-number".to_string()),
            }),
        )
        .await;
        let status = response.status().as_u16();
        assert!((100..=599).contains(&status));
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_endpoint_reports_the_clamped_delay() {
        let response = slow(
            State(test_state()),
            Path("Bogota".to_string()),
            Query(SlowParams {
                delay: Some("100".to_string()),
            }),
        )
        .await;
        let body = body_json(response).await;
        assert!(body["info"].as_str().unwrap().contains("30 seconds"));
        assert_eq!(body["message"]["processingTime"], "30s");
    }
}
