use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use common::errors::AppError;
use common::models::{ForecastRequest, ForecastResponse, ForecastStatistics, GenerateResponse};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::query::ForecastQuery;
use crate::sample::{self, DEFAULT_SAMPLE_COUNT, SampleGenerator};
use crate::stats;
use crate::store::ForecastStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ForecastStore>,
    pub generator: Arc<SampleGenerator>,
    pub default_location: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check")
    )
)]
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok", "service": "forecast-service" }))
}

#[utoipa::path(
    get,
    path = "/api/forecasts",
    params(
        ("from" = Option<String>, Query, description = "Earliest date to include (YYYY-MM-DD)"),
        ("to" = Option<String>, Query, description = "Latest date to include (YYYY-MM-DD)"),
        ("min_temp" = Option<i32>, Query, description = "Lowest Celsius temperature to include"),
        ("max_temp" = Option<i32>, Query, description = "Highest Celsius temperature to include")
    ),
    responses(
        (status = 200, description = "Stored forecasts matching the bounds", body = Vec<ForecastResponse>),
        (status = 400, description = "Malformed filter bounds")
    ),
    tag = "forecasts"
)]
pub async fn list_forecasts(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> Result<Json<Vec<ForecastResponse>>, AppError> {
    let entries = state.store.list().await;

    // A store with no entries at all shows the fixed demo dataset instead.
    // One real forecast suppresses it, even if the bounds then exclude it.
    if entries.is_empty() {
        let fallback = sample::fallback_forecasts(&state.default_location)
            .iter()
            .map(ForecastResponse::synthetic)
            .collect();
        return Ok(Json(fallback));
    }

    let responses = entries
        .into_iter()
        .filter(|(_, entry)| query.matches(&entry.forecast))
        .map(|(id, entry)| ForecastResponse::saved(id, &entry.forecast, entry.saved_at))
        .collect();

    Ok(Json(responses))
}

#[utoipa::path(
    post,
    path = "/api/forecasts",
    request_body = ForecastRequest,
    responses(
        (status = 201, description = "Forecast created", body = ForecastResponse),
        (status = 400, description = "Malformed payload")
    ),
    tag = "forecasts"
)]
pub async fn create_forecast(
    State(state): State<AppState>,
    Json(payload): Json<ForecastRequest>,
) -> Result<(StatusCode, Json<ForecastResponse>), AppError> {
    let forecast = payload.into_forecast(&state.default_location);
    let id = state.store.create(forecast).await;

    let entry = state
        .store
        .get(id)
        .await
        .ok_or_else(|| AppError::internal("Created forecast could not be read back"))?;

    info!(id = %id, "Forecast created");

    Ok((
        StatusCode::CREATED,
        Json(ForecastResponse::saved(id, &entry.forecast, entry.saved_at)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/forecasts/{id}",
    params(
        ("id" = String, Path, description = "Forecast ID")
    ),
    responses(
        (status = 200, description = "Forecast details", body = ForecastResponse),
        (status = 400, description = "Invalid forecast ID format"),
        (status = 404, description = "Forecast not found")
    ),
    tag = "forecasts"
)]
pub async fn get_forecast(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ForecastResponse>, AppError> {
    let forecast_id =
        Uuid::parse_str(&id).map_err(|_| AppError::validation("Invalid forecast ID format"))?;

    let entry = state
        .store
        .get(forecast_id)
        .await
        .ok_or_else(|| AppError::not_found("Forecast not found"))?;

    Ok(Json(ForecastResponse::saved(
        forecast_id,
        &entry.forecast,
        entry.saved_at,
    )))
}

#[utoipa::path(
    put,
    path = "/api/forecasts/{id}",
    params(
        ("id" = String, Path, description = "Forecast ID")
    ),
    request_body = ForecastRequest,
    responses(
        (status = 200, description = "Forecast replaced", body = ForecastResponse),
        (status = 400, description = "Invalid forecast ID format"),
        (status = 404, description = "Forecast not found")
    ),
    tag = "forecasts"
)]
pub async fn update_forecast(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ForecastRequest>,
) -> Result<Json<ForecastResponse>, AppError> {
    let forecast_id =
        Uuid::parse_str(&id).map_err(|_| AppError::validation("Invalid forecast ID format"))?;

    let forecast = payload.into_forecast(&state.default_location);

    let updated = state.store.update(forecast_id, forecast).await;
    if !updated {
        return Err(AppError::not_found("Forecast not found"));
    }

    let entry = state
        .store
        .get(forecast_id)
        .await
        .ok_or_else(|| AppError::not_found("Forecast not found"))?;

    info!(id = %forecast_id, "Forecast updated");

    Ok(Json(ForecastResponse::saved(
        forecast_id,
        &entry.forecast,
        entry.saved_at,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/forecasts/{id}",
    params(
        ("id" = String, Path, description = "Forecast ID")
    ),
    responses(
        (status = 204, description = "Forecast deleted"),
        (status = 400, description = "Invalid forecast ID format"),
        (status = 404, description = "Forecast not found")
    ),
    tag = "forecasts"
)]
pub async fn delete_forecast(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let forecast_id =
        Uuid::parse_str(&id).map_err(|_| AppError::validation("Invalid forecast ID format"))?;

    let deleted = state.store.delete(forecast_id).await;

    if deleted {
        info!(id = %forecast_id, "Forecast deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Forecast not found"))
    }
}

#[utoipa::path(
    get,
    path = "/api/forecasts/statistics",
    responses(
        (status = 200, description = "Temperature statistics over all stored forecasts", body = ForecastStatistics)
    ),
    tag = "statistics"
)]
pub async fn get_statistics(
    State(state): State<AppState>,
) -> Result<Json<ForecastStatistics>, AppError> {
    let entries = state.store.list().await;
    Ok(Json(stats::compute(&entries)))
}

#[derive(Deserialize)]
pub struct GenerateQuery {
    pub count: Option<usize>,
}

#[utoipa::path(
    post,
    path = "/api/forecasts/generate",
    params(
        ("count" = Option<usize>, Query, description = "Number of sample forecasts to insert (default 5)")
    ),
    responses(
        (status = 201, description = "Sample forecasts inserted", body = GenerateResponse)
    ),
    tag = "samples"
)]
pub async fn generate_samples(
    State(state): State<AppState>,
    Query(params): Query<GenerateQuery>,
) -> Result<(StatusCode, Json<GenerateResponse>), AppError> {
    let count = params.count.unwrap_or(DEFAULT_SAMPLE_COUNT);

    info!(count, "Sample generation requested");

    let ids = state.generator.generate(count).await;

    Ok((
        StatusCode::CREATED,
        Json(GenerateResponse {
            count: ids.len(),
            ids,
        }),
    ))
}
