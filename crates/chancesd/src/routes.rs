//! API routes for chancesd.
//!
//! Four probability endpoints plus health. All validation happens here;
//! the engine in chances_common only ever sees age > 0.

use crate::server::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chances_common::{
    calculate_all_probabilities, AggregateResult, ErrorBody, Event, HealthResponse,
    QueryError,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

type AppStateArc = Arc<AppState>;

/// Raw query parameters. Both are optional strings so missing and malformed
/// values can be told apart and rejected with the right message.
#[derive(Debug, Clone, Deserialize)]
pub struct ProbabilityQuery {
    pub age: Option<String>,
    pub city: Option<String>,
}

type BadRequest = (StatusCode, Json<ErrorBody>);

fn bad_request(err: QueryError) -> BadRequest {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
}

/// Check age and city before the engine runs. Empty strings count as missing,
/// matching the original API's behavior for `?age=&city=`.
fn validate(query: &ProbabilityQuery) -> Result<(f64, &str), QueryError> {
    let age = query
        .age
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or(QueryError::MissingParameter)?;
    let city = query
        .city
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or(QueryError::MissingParameter)?;

    let age: f64 = age.parse().map_err(|_| QueryError::InvalidAge)?;
    if !age.is_finite() || age <= 0.0 {
        return Err(QueryError::InvalidAge);
    }

    Ok((age, city))
}

fn probability_for(
    event: Option<Event>,
    query: ProbabilityQuery,
) -> Result<Json<AggregateResult>, BadRequest> {
    let (age, city) = validate(&query).map_err(bad_request)?;

    let mut report = calculate_all_probabilities(age, city);
    if let Some(event) = event {
        report.results.retain(|k, _| *k == event);
    }

    info!(
        "  Computed {} odds for age {} in {:?}",
        event.map(|e| e.as_str()).unwrap_or("all"),
        age,
        city
    );
    Ok(Json(report))
}

// ============================================================================
// Probability Routes
// ============================================================================

pub fn probability_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/probability/weird", get(weird))
        .route("/probability/shark", get(shark))
        .route("/probability/lightning", get(lightning))
        .route("/probability/meteor", get(meteor))
}

async fn weird(
    Query(query): Query<ProbabilityQuery>,
) -> Result<Json<AggregateResult>, BadRequest> {
    probability_for(None, query)
}

async fn shark(
    Query(query): Query<ProbabilityQuery>,
) -> Result<Json<AggregateResult>, BadRequest> {
    probability_for(Some(Event::SharkAttack), query)
}

async fn lightning(
    Query(query): Query<ProbabilityQuery>,
) -> Result<Json<AggregateResult>, BadRequest> {
    probability_for(Some(Event::LightningStrike), query)
}

async fn meteor(
    Query(query): Query<ProbabilityQuery>,
) -> Result<Json<AggregateResult>, BadRequest> {
    probability_for(Some(Event::MeteorImpact), query)
}

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/health", get(health_check))
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started.elapsed().as_secs(),
    })
}
