use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use crate::dto::{DateRangeQuery, EngineDataRequest, EngineDataResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::{ValidatedJson, ValidatedPath, ValidatedQuery};

pub fn create_engine_data_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_engine_data).post(create_engine_data))
        .route("/:id", get(get_engine_data).put(update_engine_data).delete(delete_engine_data))
        .route("/vehicle/:vehicle_id", get(list_by_vehicle))
        .route("/vehicle/:vehicle_id/date-range", get(list_by_vehicle_and_range))
        .route("/vehicle/:vehicle_id/average-temperature", get(average_temperature))
        .route("/vehicle/:vehicle_id/average-rpm", get(average_rpm))
        .route("/vehicle/:vehicle_id/total-idling-time", get(total_idling_time))
}

async fn list_engine_data(
    State(state): State<AppState>,
) -> Result<Json<Vec<EngineDataResponse>>, AppError> {
    Ok(Json(state.engine_data.list_all().await?))
}

async fn get_engine_data(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<Json<EngineDataResponse>, AppError> {
    Ok(Json(state.engine_data.get_by_id(id).await?))
}

async fn list_by_vehicle(
    State(state): State<AppState>,
    ValidatedPath(vehicle_id): ValidatedPath<i64>,
) -> Result<Json<Vec<EngineDataResponse>>, AppError> {
    Ok(Json(state.engine_data.list_by_vehicle(vehicle_id).await?))
}

async fn list_by_vehicle_and_range(
    State(state): State<AppState>,
    ValidatedPath(vehicle_id): ValidatedPath<i64>,
    ValidatedQuery(range): ValidatedQuery<DateRangeQuery>,
) -> Result<Json<Vec<EngineDataResponse>>, AppError> {
    let response = state
        .engine_data
        .list_by_vehicle_and_range(vehicle_id, range.start_date, range.end_date)
        .await?;
    Ok(Json(response))
}

async fn average_temperature(
    State(state): State<AppState>,
    ValidatedPath(vehicle_id): ValidatedPath<i64>,
) -> Result<Json<Option<f64>>, AppError> {
    Ok(Json(state.engine_data.average_engine_temperature(vehicle_id).await?))
}

async fn average_rpm(
    State(state): State<AppState>,
    ValidatedPath(vehicle_id): ValidatedPath<i64>,
) -> Result<Json<Option<f64>>, AppError> {
    Ok(Json(state.engine_data.average_engine_rpm(vehicle_id).await?))
}

async fn total_idling_time(
    State(state): State<AppState>,
    ValidatedPath(vehicle_id): ValidatedPath<i64>,
) -> Result<Json<Option<i64>>, AppError> {
    Ok(Json(state.engine_data.total_idling_time(vehicle_id).await?))
}

async fn create_engine_data(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<EngineDataRequest>,
) -> Result<(StatusCode, Json<EngineDataResponse>), AppError> {
    let response = state.engine_data.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_engine_data(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
    ValidatedJson(request): ValidatedJson<EngineDataRequest>,
) -> Result<Json<EngineDataResponse>, AppError> {
    Ok(Json(state.engine_data.update(id, request).await?))
}

async fn delete_engine_data(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<StatusCode, AppError> {
    state.engine_data.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
