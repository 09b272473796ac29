use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::client_controller::ClientController;
use crate::dto::search_dto::NameSearchQuery;
use crate::models::client::{ClientResponse, CreateClientRequest, UpdateClientRequest};
use crate::models::vehicle::{CreateVehicleRequest, VehicleResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{AppJson, AppPath, AppQuery};

pub fn create_client_router() -> Router<AppState> {
    Router::new()
        .route("/clients/", post(create_client).get(search_clients))
        .route(
            "/clients/:client_id",
            get(get_client).patch(update_client).delete(delete_client),
        )
        .route(
            "/clients/:client_id/vehicles/",
            post(create_vehicle).get(list_client_vehicles),
        )
}

async fn create_client(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateClientRequest>,
) -> Result<(StatusCode, Json<ClientResponse>), AppError> {
    let controller = ClientController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn search_clients(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<NameSearchQuery>,
) -> Result<Json<Vec<ClientResponse>>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    let response = controller.search(query).await?;
    Ok(Json(response))
}

async fn get_client(
    State(state): State<AppState>,
    AppPath(client_id): AppPath<Uuid>,
) -> Result<Json<ClientResponse>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    let response = controller.get_by_id(client_id).await?;
    Ok(Json(response))
}

async fn update_client(
    State(state): State<AppState>,
    AppPath(client_id): AppPath<Uuid>,
    AppJson(request): AppJson<UpdateClientRequest>,
) -> Result<Json<ClientResponse>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    let response = controller.update(client_id, request).await?;
    Ok(Json(response))
}

async fn delete_client(
    State(state): State<AppState>,
    AppPath(client_id): AppPath<Uuid>,
) -> Result<StatusCode, AppError> {
    let controller = ClientController::new(state.pool.clone());
    controller.delete(client_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn create_vehicle(
    State(state): State<AppState>,
    AppPath(client_id): AppPath<Uuid>,
    AppJson(request): AppJson<CreateVehicleRequest>,
) -> Result<(StatusCode, Json<VehicleResponse>), AppError> {
    let controller = ClientController::new(state.pool.clone());
    let response = controller.add_vehicle(client_id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_client_vehicles(
    State(state): State<AppState>,
    AppPath(client_id): AppPath<Uuid>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    let response = controller.list_vehicles(client_id).await?;
    Ok(Json(response))
}
