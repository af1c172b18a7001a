//! Fulfillment HTTP surface
//!
//! One webhook route the dialog platform POSTs each turn to, plus a health
//! probe. Handler faults map to HTTP statuses here: the agent itself never
//! fabricates a Failed close for them.

use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::Instrument;
use uuid::Uuid;

use helpdesk_bot_agent::AgentError;
use helpdesk_bot_core::{DialogRequest, DialogResponse};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/fulfillment", post(handle_fulfillment))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// POST /fulfillment
///
/// The dialog platform invokes this once per conversation turn.
async fn handle_fulfillment(
    State(state): State<AppState>,
    Json(request): Json<DialogRequest>,
) -> Result<Json<DialogResponse>, ApiError> {
    let invocation_id = Uuid::new_v4();
    let received_at = chrono::Utc::now().with_timezone(&state.timezone);
    let span = tracing::debug_span!(
        "fulfillment",
        %invocation_id,
        bot = %request.bot.name,
        intent = %request.intent_name(),
    );
    tracing::debug!(parent: &span, %received_at, "invocation received");

    let response = state.agent.dispatch(&request).instrument(span).await?;
    Ok(Json(response))
}

/// Agent faults surfaced over HTTP. An unsupported intent is the caller's
/// mistake; an unreachable collaborator is a gateway failure.
struct ApiError(AgentError);

impl From<AgentError> for ApiError {
    fn from(error: AgentError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            AgentError::UnsupportedIntent(_) => StatusCode::BAD_REQUEST,
            AgentError::Store(_) | AgentError::Prediction(_) => StatusCode::BAD_GATEWAY,
        };
        tracing::error!(%status, error = %self.0, "fulfillment failed");
        (status, Json(serde_json::json!({ "error": self.0.to_string() }))).into_response()
    }
}
