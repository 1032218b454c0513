//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{extract::State, Json};
use tracing::{info, Instrument};
use uuid::Uuid;

use super::dto::{
    CompileRequest, CompileResponse, FindSeatsRequest, FindSeatsResponse, HealthResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::charts::ClassFilter;
use crate::services::{self, render_fragments, SeatQuery};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

fn parse_class_filter(class_pref: Option<&str>) -> Result<ClassFilter, AppError> {
    class_pref
        .unwrap_or("ALL")
        .parse()
        .map_err(AppError::BadRequest)
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let chart_source_healthy = state.charts.health_check().await.unwrap_or(false);

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        chart_source: state.charts.name().to_string(),
        chart_source_healthy,
        narrative_model: state.narrator.model_name().to_string(),
    }))
}

// =============================================================================
// Seat Search
// =============================================================================

/// POST /api/find_seats
///
/// Vacancy table for a train plus narrative itinerary advice.
pub async fn find_seats(
    State(state): State<AppState>,
    Json(request): Json<FindSeatsRequest>,
) -> HandlerResult<FindSeatsResponse> {
    let train = request
        .train_no
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::BadRequest("train_no is required".to_string()))?
        .to_string();
    let class_filter = parse_class_filter(request.class_pref.as_deref())?;

    let query = SeatQuery {
        train,
        station: request.station.unwrap_or_default(),
        destination: request.dest_station.unwrap_or_default(),
        class_filter,
    };

    let span = tracing::info_span!("find_seats", request_id = %Uuid::new_v4(), train = %query.train);
    async move {
        info!(
            "API call: Train {} | {} -> {} ({})",
            query.train, query.station, query.destination, query.class_filter
        );

        let report = services::find_seats(
            state.charts.as_ref(),
            state.narrator.as_ref(),
            &state.formatter,
            &query,
        )
        .await?;

        info!("Returning {} vacancy spans", report.spans.len());
        Ok::<_, AppError>(Json(FindSeatsResponse {
            status: "success".to_string(),
            raw_data: report.spans,
            ai_advice: report.advice,
        }))
    }
    .instrument(span)
    .await
}

// =============================================================================
// Stateless Compiler
// =============================================================================

/// POST /v1/compile
///
/// Spans and fragments for a chart supplied in the request body.
pub async fn compile_chart(Json(request): Json<CompileRequest>) -> HandlerResult<CompileResponse> {
    let class_filter = parse_class_filter(request.class_pref.as_deref())?;

    let compiled = tokio::task::spawn_blocking(move || {
        services::compile_chart(&request.coaches, class_filter)
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(CompileResponse {
        status: "success".to_string(),
        fragments: render_fragments(&compiled.fragments),
        raw_data: compiled.spans,
    }))
}
