use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use crate::dto::{DateRangeQuery, FuelConsumptionRequest, FuelConsumptionResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::{ValidatedJson, ValidatedPath, ValidatedQuery};

pub fn create_fuel_consumption_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_fuel_consumption).post(create_fuel_consumption))
        .route(
            "/:id",
            get(get_fuel_consumption)
                .put(update_fuel_consumption)
                .delete(delete_fuel_consumption),
        )
        .route("/vehicle/:vehicle_id", get(list_by_vehicle))
        .route("/vehicle/:vehicle_id/date-range", get(list_by_vehicle_and_range))
        .route("/vehicle/:vehicle_id/average-mpg", get(average_mpg))
}

async fn list_fuel_consumption(
    State(state): State<AppState>,
) -> Result<Json<Vec<FuelConsumptionResponse>>, AppError> {
    Ok(Json(state.fuel_consumption.list_all().await?))
}

async fn get_fuel_consumption(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<Json<FuelConsumptionResponse>, AppError> {
    Ok(Json(state.fuel_consumption.get_by_id(id).await?))
}

async fn list_by_vehicle(
    State(state): State<AppState>,
    ValidatedPath(vehicle_id): ValidatedPath<i64>,
) -> Result<Json<Vec<FuelConsumptionResponse>>, AppError> {
    Ok(Json(state.fuel_consumption.list_by_vehicle(vehicle_id).await?))
}

async fn list_by_vehicle_and_range(
    State(state): State<AppState>,
    ValidatedPath(vehicle_id): ValidatedPath<i64>,
    ValidatedQuery(range): ValidatedQuery<DateRangeQuery>,
) -> Result<Json<Vec<FuelConsumptionResponse>>, AppError> {
    let response = state
        .fuel_consumption
        .list_by_vehicle_and_range(vehicle_id, range.start_date, range.end_date)
        .await?;
    Ok(Json(response))
}

// `null` cuando el vehículo no tiene repostajes
async fn average_mpg(
    State(state): State<AppState>,
    ValidatedPath(vehicle_id): ValidatedPath<i64>,
) -> Result<Json<Option<f64>>, AppError> {
    Ok(Json(state.fuel_consumption.average_mpg(vehicle_id).await?))
}

async fn create_fuel_consumption(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<FuelConsumptionRequest>,
) -> Result<(StatusCode, Json<FuelConsumptionResponse>), AppError> {
    let response = state.fuel_consumption.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_fuel_consumption(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
    ValidatedJson(request): ValidatedJson<FuelConsumptionRequest>,
) -> Result<Json<FuelConsumptionResponse>, AppError> {
    Ok(Json(state.fuel_consumption.update(id, request).await?))
}

async fn delete_fuel_consumption(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<StatusCode, AppError> {
    state.fuel_consumption.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
