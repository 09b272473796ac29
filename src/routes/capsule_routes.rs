use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::capsule_controller::CapsuleController;
use crate::middleware::auth::AuthenticatedMechanic;
use crate::models::capsule::{CapsuleResponse, CreateCapsuleRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{AppJson, AppPath};

pub fn create_capsule_router() -> Router<AppState> {
    Router::new()
        .route("/capsules/", post(create_capsule))
        .route("/capsules/:capsule_id", get(get_capsule))
}

async fn create_capsule(
    State(state): State<AppState>,
    Extension(AuthenticatedMechanic(mechanic)): Extension<AuthenticatedMechanic>,
    AppJson(request): AppJson<CreateCapsuleRequest>,
) -> Result<(StatusCode, Json<CapsuleResponse>), AppError> {
    let controller = CapsuleController::new(state.pool.clone());
    let response = controller.create(mechanic.id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_capsule(
    State(state): State<AppState>,
    AppPath(capsule_id): AppPath<Uuid>,
) -> Result<Json<CapsuleResponse>, AppError> {
    let controller = CapsuleController::new(state.pool.clone());
    let response = controller.get_by_id(capsule_id).await?;
    Ok(Json(response))
}
