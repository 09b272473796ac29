use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::search_dto::VehicleSearchQuery;
use crate::middleware::auth::AuthenticatedMechanic;
use crate::models::repair::{CreateRepairRequest, RepairResponse};
use crate::models::vehicle::{UpdateVehicleRequest, VehicleResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{AppJson, AppPath, AppQuery};

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/vehicles/", get(search_vehicles))
        .route(
            "/vehicles/:vehicle_id",
            get(get_vehicle).patch(update_vehicle).delete(delete_vehicle),
        )
        .route(
            "/vehicles/:vehicle_id/repairs/",
            post(create_repair).get(list_vehicle_repairs),
        )
}

async fn search_vehicles(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<VehicleSearchQuery>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.search(query).await?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    AppPath(vehicle_id): AppPath<Uuid>,
) -> Result<Json<VehicleResponse>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.get_by_id(vehicle_id).await?;
    Ok(Json(response))
}

async fn update_vehicle(
    State(state): State<AppState>,
    AppPath(vehicle_id): AppPath<Uuid>,
    AppJson(request): AppJson<UpdateVehicleRequest>,
) -> Result<Json<VehicleResponse>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.update(vehicle_id, request).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    AppPath(vehicle_id): AppPath<Uuid>,
) -> Result<StatusCode, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    controller.delete(vehicle_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn create_repair(
    State(state): State<AppState>,
    Extension(AuthenticatedMechanic(mechanic)): Extension<AuthenticatedMechanic>,
    AppPath(vehicle_id): AppPath<Uuid>,
    AppJson(request): AppJson<CreateRepairRequest>,
) -> Result<(StatusCode, Json<RepairResponse>), AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.add_repair(vehicle_id, mechanic.id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_vehicle_repairs(
    State(state): State<AppState>,
    AppPath(vehicle_id): AppPath<Uuid>,
) -> Result<Json<Vec<RepairResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.list_repairs(vehicle_id).await?;
    Ok(Json(response))
}
