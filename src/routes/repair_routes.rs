use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::repair_controller::RepairController;
use crate::dto::search_dto::RepairSearchQuery;
use crate::models::repair::{RepairResponse, UpdateRepairRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{AppJson, AppPath, AppQuery};

pub fn create_repair_router() -> Router<AppState> {
    Router::new()
        .route("/repairs/", get(search_repairs))
        .route(
            "/repairs/:repair_id",
            get(get_repair).patch(update_repair).delete(delete_repair),
        )
}

async fn search_repairs(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<RepairSearchQuery>,
) -> Result<Json<Vec<RepairResponse>>, AppError> {
    let controller = RepairController::new(state.pool.clone());
    let response = controller.search(query).await?;
    Ok(Json(response))
}

async fn get_repair(
    State(state): State<AppState>,
    AppPath(repair_id): AppPath<Uuid>,
) -> Result<Json<RepairResponse>, AppError> {
    let controller = RepairController::new(state.pool.clone());
    let response = controller.get_by_id(repair_id).await?;
    Ok(Json(response))
}

async fn update_repair(
    State(state): State<AppState>,
    AppPath(repair_id): AppPath<Uuid>,
    AppJson(request): AppJson<UpdateRepairRequest>,
) -> Result<Json<RepairResponse>, AppError> {
    let controller = RepairController::new(state.pool.clone());
    let response = controller.update(repair_id, request).await?;
    Ok(Json(response))
}

async fn delete_repair(
    State(state): State<AppState>,
    AppPath(repair_id): AppPath<Uuid>,
) -> Result<StatusCode, AppError> {
    let controller = RepairController::new(state.pool.clone());
    controller.delete(repair_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
