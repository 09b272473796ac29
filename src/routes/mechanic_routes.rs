use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::mechanic_controller::MechanicController;
use crate::dto::auth_dto::{LoginForm, SignupRequest, TokenResponse};
use crate::dto::search_dto::NameSearchQuery;
use crate::middleware::auth::AuthenticatedMechanic;
use crate::models::mechanic::{MechanicResponse, UpdateMechanicRequest};
use crate::models::repair::RepairResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{AppForm, AppJson, AppPath, AppQuery};

/// Alta y login: no requieren token
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/mechanic/signup", post(signup))
        .route("/mechanic/login", post(login))
}

pub fn create_mechanic_router() -> Router<AppState> {
    Router::new()
        .route("/mechanic/", get(search_mechanics))
        .route("/mechanic/me", get(get_me))
        .route(
            "/mechanic/:mechanic_id",
            get(get_mechanic).patch(update_mechanic).delete(delete_mechanic),
        )
        .route("/mechanic/:mechanic_id/repairs/", get(list_mechanic_repairs))
}

async fn signup(
    State(state): State<AppState>,
    AppJson(request): AppJson<SignupRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), AppError> {
    let controller = MechanicController::new(state.pool.clone());
    let response = controller.signup(request, &state.config, &state.jwt).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn login(
    State(state): State<AppState>,
    AppForm(form): AppForm<LoginForm>,
) -> Result<(StatusCode, Json<TokenResponse>), AppError> {
    let controller = MechanicController::new(state.pool.clone());
    let response = controller.login(form, &state.jwt).await?;
    Ok((StatusCode::ACCEPTED, Json(response)))
}

async fn get_me(
    Extension(AuthenticatedMechanic(mechanic)): Extension<AuthenticatedMechanic>,
) -> Json<MechanicResponse> {
    Json(mechanic.into())
}

async fn search_mechanics(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<NameSearchQuery>,
) -> Result<Json<Vec<MechanicResponse>>, AppError> {
    let controller = MechanicController::new(state.pool.clone());
    let response = controller.search(query).await?;
    Ok(Json(response))
}

async fn get_mechanic(
    State(state): State<AppState>,
    AppPath(mechanic_id): AppPath<Uuid>,
) -> Result<Json<MechanicResponse>, AppError> {
    let controller = MechanicController::new(state.pool.clone());
    let response = controller.get_by_id(mechanic_id).await?;
    Ok(Json(response))
}

async fn update_mechanic(
    State(state): State<AppState>,
    AppPath(mechanic_id): AppPath<Uuid>,
    AppJson(request): AppJson<UpdateMechanicRequest>,
) -> Result<Json<MechanicResponse>, AppError> {
    let controller = MechanicController::new(state.pool.clone());
    let response = controller.update(mechanic_id, request).await?;
    Ok(Json(response))
}

async fn delete_mechanic(
    State(state): State<AppState>,
    AppPath(mechanic_id): AppPath<Uuid>,
) -> Result<StatusCode, AppError> {
    let controller = MechanicController::new(state.pool.clone());
    controller.delete(mechanic_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_mechanic_repairs(
    State(state): State<AppState>,
    AppPath(mechanic_id): AppPath<Uuid>,
) -> Result<Json<Vec<RepairResponse>>, AppError> {
    let controller = MechanicController::new(state.pool.clone());
    let response = controller.list_repairs(mechanic_id).await?;
    Ok(Json(response))
}
