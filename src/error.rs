//! Simulated error codes, their templated descriptions, and the fault
//! taxonomy the HTTP layer logs against.

use axum::http::StatusCode;
use thiserror::Error;

/// Internal faults raised while assembling a payload. These never cross the
/// generator boundary; they are downgraded to a 500 failure envelope.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("payload serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Codes the error generator draws from when the caller does not name one.
pub const SIMULATED_ERROR_CODES: [StatusCode; 9] = [
    StatusCode::BAD_REQUEST,
    StatusCode::UNAUTHORIZED,
    StatusCode::FORBIDDEN,
    StatusCode::NOT_FOUND,
    StatusCode::TOO_MANY_REQUESTS,
    StatusCode::INTERNAL_SERVER_ERROR,
    StatusCode::BAD_GATEWAY,
    StatusCode::SERVICE_UNAVAILABLE,
    StatusCode::GATEWAY_TIMEOUT,
];

/// Templated description for a simulated HTTP error. Unknown codes get the
/// generic fallback; this lookup never fails.
pub fn describe_error(status: StatusCode, location: &str) -> String {
    match status.as_u16() {
        400 => format!("Bad Request - Invalid parameters for location \"{location}\""),
        401 => format!("Unauthorized - Invalid API key for accessing \"{location}\" data"),
        403 => format!("Forbidden - Access denied to \"{location}\" weather data"),
        404 => format!("Not Found - Location \"{location}\" does not exist"),
        429 => format!("Too Many Requests - Rate limit exceeded for \"{location}\""),
        500 => format!("Internal Server Error - Failed to fetch \"{location}\" data"),
        502 => format!("Bad Gateway - Upstream server error for \"{location}\""),
        503 => format!("Service Unavailable - Weather service down for \"{location}\""),
        504 => format!("Gateway Timeout - Upstream timeout for \"{location}\""),
        _ => format!("Unknown error for {location}"),
    }
}

/// Classification of failure envelopes, used when logging at the HTTP layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultClass {
    InternalGenerationFault,
    SimulatedClientFault,
    SimulatedServerFault,
    SimulatedRateLimit,
}

impl FaultClass {
    /// Classify a simulated failure by its status code.
    pub fn from_status(status: StatusCode) -> Self {
        if status == StatusCode::TOO_MANY_REQUESTS {
            FaultClass::SimulatedRateLimit
        } else if status.is_client_error() {
            FaultClass::SimulatedClientFault
        } else {
            FaultClass::SimulatedServerFault
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FaultClass::InternalGenerationFault => "internal generation fault",
            FaultClass::SimulatedClientFault => "simulated client fault",
            FaultClass::SimulatedServerFault => "simulated server fault",
            FaultClass::SimulatedRateLimit => "simulated rate limit",
        }
    }
}
