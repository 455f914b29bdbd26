//! The success/failure envelope every generator hands back to the HTTP layer.

use axum::http::StatusCode;
use serde_json::Value;

/// Outcome of one simulator operation. Exactly one of the payload or the
/// error message exists, and the status travels with it so the HTTP layer
/// never has to guess.
#[derive(Debug, Clone)]
pub enum SimOutcome {
    Success { value: Value, status: StatusCode },
    Failure { error: String, status: StatusCode },
}

impl SimOutcome {
    pub fn success(value: Value, status: StatusCode) -> Self {
        SimOutcome::Success { value, status }
    }

    pub fn failure(error: impl Into<String>, status: StatusCode) -> Self {
        SimOutcome::Failure {
            error: error.into(),
            status,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            SimOutcome::Success { status, .. } => *status,
            SimOutcome::Failure { status, .. } => *status,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SimOutcome::Success { .. })
    }
}
