use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use crate::dto::{DateRangeQuery, EmissionDataRequest, EmissionDataResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::{ValidatedJson, ValidatedPath, ValidatedQuery};

pub fn create_emission_data_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_emissions).post(create_emission))
        .route("/:id", get(get_emission).put(update_emission).delete(delete_emission))
        .route("/vehicle/:vehicle_id", get(list_by_vehicle))
        .route("/vehicle/:vehicle_id/date-range", get(list_by_vehicle_and_range))
        .route("/vehicle/:vehicle_id/average-co2", get(average_co2))
        .route("/vehicle/:vehicle_id/total-co2", get(total_co2))
}

async fn list_emissions(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmissionDataResponse>>, AppError> {
    Ok(Json(state.emissions.list_all().await?))
}

async fn get_emission(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<Json<EmissionDataResponse>, AppError> {
    Ok(Json(state.emissions.get_by_id(id).await?))
}

async fn list_by_vehicle(
    State(state): State<AppState>,
    ValidatedPath(vehicle_id): ValidatedPath<i64>,
) -> Result<Json<Vec<EmissionDataResponse>>, AppError> {
    Ok(Json(state.emissions.list_by_vehicle(vehicle_id).await?))
}

async fn list_by_vehicle_and_range(
    State(state): State<AppState>,
    ValidatedPath(vehicle_id): ValidatedPath<i64>,
    ValidatedQuery(range): ValidatedQuery<DateRangeQuery>,
) -> Result<Json<Vec<EmissionDataResponse>>, AppError> {
    let response = state
        .emissions
        .list_by_vehicle_and_range(vehicle_id, range.start_date, range.end_date)
        .await?;
    Ok(Json(response))
}

async fn average_co2(
    State(state): State<AppState>,
    ValidatedPath(vehicle_id): ValidatedPath<i64>,
) -> Result<Json<Option<f64>>, AppError> {
    Ok(Json(state.emissions.average_co2_emissions(vehicle_id).await?))
}

async fn total_co2(
    State(state): State<AppState>,
    ValidatedPath(vehicle_id): ValidatedPath<i64>,
) -> Result<Json<Option<f64>>, AppError> {
    Ok(Json(state.emissions.total_co2_emissions(vehicle_id).await?))
}

async fn create_emission(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<EmissionDataRequest>,
) -> Result<(StatusCode, Json<EmissionDataResponse>), AppError> {
    let response = state.emissions.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_emission(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
    ValidatedJson(request): ValidatedJson<EmissionDataRequest>,
) -> Result<Json<EmissionDataResponse>, AppError> {
    Ok(Json(state.emissions.update(id, request).await?))
}

async fn delete_emission(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<StatusCode, AppError> {
    state.emissions.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
