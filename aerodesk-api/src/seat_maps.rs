use aerodesk_core::{render::render_text, AircraftConfiguration, CapacityReport, SeatMap};
use aerodesk_shared::{AircraftPayload, SeatClassConfig};
use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::post,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{error::AppError, middleware::AdminClaims, state::AppState};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AircraftSummary {
    pub name: String,
    pub manufacturer: String,
    pub airline_id: Uuid,
    pub seat_classes: Vec<SeatClassConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AircraftSeatMapResponse {
    pub aircraft: AircraftSummary,
    pub capacity: CapacityReport,
    pub seat_map: SeatMap,
    pub generated_at: DateTime<Utc>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/seat-maps", post(build_seat_map))
        .route("/aircraft/seat-map", post(build_aircraft_seat_map))
        .route("/aircraft/seat-map/render", post(render_aircraft_seat_map))
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /v1/admin/seat-maps
async fn build_seat_map(
    State(state): State<AppState>,
    Extension(claims): Extension<AdminClaims>,
    Json(seat_classes): Json<Vec<SeatClassConfig>>,
) -> Result<Json<SeatMap>, AppError> {
    tracing::debug!(admin = %claims.sub, classes = seat_classes.len(), "Building seat map");

    let seat_map = state.seat_maps.build(&seat_classes)?;
    Ok(Json(seat_map))
}

/// POST /v1/admin/aircraft/seat-map
async fn build_aircraft_seat_map(
    State(state): State<AppState>,
    Extension(claims): Extension<AdminClaims>,
    Json(payload): Json<AircraftPayload>,
) -> Result<Json<AircraftSeatMapResponse>, AppError> {
    let aircraft = AircraftConfiguration::try_from(payload)?;
    let seat_map = aircraft.seat_map(&state.seat_maps)?;
    let capacity = aircraft.capacity_report(&seat_map);

    if !capacity.matches {
        tracing::warn!(
            admin = %claims.sub,
            aircraft = %aircraft.name(),
            declared = capacity.declared,
            generated = capacity.generated,
            "Seat layout does not match declared capacity"
        );
    }

    Ok(Json(AircraftSeatMapResponse {
        aircraft: AircraftSummary {
            name: aircraft.name().to_string(),
            manufacturer: aircraft.manufacturer().to_string(),
            airline_id: aircraft.airline_id(),
            seat_classes: aircraft.seat_classes().to_vec(),
        },
        capacity,
        seat_map,
        generated_at: Utc::now(),
    }))
}

/// POST /v1/admin/aircraft/seat-map/render
async fn render_aircraft_seat_map(
    State(state): State<AppState>,
    Json(payload): Json<AircraftPayload>,
) -> Result<impl IntoResponse, AppError> {
    let aircraft = AircraftConfiguration::try_from(payload)?;
    let seat_map = aircraft.seat_map(&state.seat_maps)?;

    let body = render_text(&aircraft, &seat_map);

    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body))
}
