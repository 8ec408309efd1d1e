//! HTTP boundary for the Hoslog core.
//!
//! One POST endpoint drives the whole flow: field presence and numeric
//! coercion checks, range validation, the feasibility pre-check, and finally
//! the simulation. Every rejection is a 400 with an `error` body; the core
//! never sees an unvalidated number.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use tower_http::cors::CorsLayer;

use hoslog_core::{
    DayLog, HosConfig, LogbookSimulator, REQUIRED_FIELDS, TripRequest, estimate_trip_feasibility,
};

// Config --------------------------------------------------------------------

pub struct ServeConfig {
    pub bind: String,
    pub port: u16,
}

// App state -----------------------------------------------------------------

struct AppState {
    config: HosConfig,
}

// Error handling ------------------------------------------------------------

struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

// Entrypoint ----------------------------------------------------------------

/// Bind and serve until shutdown.
///
/// # Errors
///
/// Returns an error when the configuration is invalid or the listener cannot
/// bind.
pub async fn serve(config: HosConfig, serve_cfg: ServeConfig) -> anyhow::Result<()> {
    config.validate()?;
    let addr = format!("{}:{}", serve_cfg.bind, serve_cfg.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("hoslog HTTP server listening on http://{addr}");
    axum::serve(listener, router(config)).await?;
    Ok(())
}

/// Build the router (for testing without binding to a port).
#[must_use]
pub fn router(config: HosConfig) -> Router {
    let state = Arc::new(AppState { config });
    Router::new()
        .route("/api/health", get(health))
        .route("/api/logs/generate_logbook", post(generate_logbook))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// Health --------------------------------------------------------------------

async fn health() -> Json<Value> {
    Json(serde_json::json!({ "ok": true }))
}

// POST /api/logs/generate_logbook -------------------------------------------

async fn generate_logbook(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<Vec<DayLog>>, ApiError> {
    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| body.get(field).is_none())
        .collect();
    if !missing.is_empty() {
        return Err(ApiError::bad_request(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let request = TripRequest {
        total_distance_miles: numeric_field(&body, "total_distance_miles")?,
        total_driving_time_mins: numeric_field(&body, "total_driving_time")?,
        cycle_hours_used: numeric_field(&body, "current_cycle_hour")?,
        pickup_time_mins: numeric_field(&body, "pickup_time")?,
    };
    request
        .validate(&state.config)
        .map_err(|err| ApiError::bad_request(err.to_string()))?;

    let report = estimate_trip_feasibility(
        request.total_distance_miles,
        request.total_driving_time_mins,
        request.cycle_hours_used,
        &state.config,
    );
    if !report.feasible {
        log::debug!(
            "trip rejected: ~{:.2}h predicted on-duty against {:.2}h remaining",
            report.predicted_on_duty_hrs,
            report.remaining_cycle_hrs
        );
        return Err(ApiError::bad_request(report.message));
    }

    let simulator = LogbookSimulator::new(
        request.total_distance_miles,
        request.total_driving_time_mins,
        &state.config,
    );
    let days = simulator.generate(request.pickup_time_mins);
    log::debug!(
        "generated {} day logs for {:.1}mi trip",
        days.len(),
        request.total_distance_miles
    );
    Ok(Json(days))
}

/// Coerce a present field to f64, accepting JSON numbers and numeric strings.
fn numeric_field(body: &Value, field: &'static str) -> Result<f64, ApiError> {
    coerce_numeric(&body[field]).ok_or_else(|| {
        ApiError::bad_request(format!(
            "Invalid input format: could not convert '{field}' to float. Numeric values required."
        ))
    })
}

fn coerce_numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

// Tests ---------------------------------------------------------------------
