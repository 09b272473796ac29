//! Middleware de autenticación JWT
//!
//! Lee el token Bearer, lo verifica y resuelve el mecánico. El mecánico
//! autenticado se inyecta en las extensions del request.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::{
    models::mechanic::Mechanic,
    repositories::mechanic_repository::MechanicRepository,
    state::AppState,
    utils::{errors::AppError, jwt::extract_token_from_header},
};

/// Mecánico autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedMechanic(pub Mechanic);

/// Middleware de autenticación JWT
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Token de autorización requerido".to_string()))?;

    let token = extract_token_from_header(auth_header)?;
    let claims = state.jwt.verify(token)?;
    let mechanic_id = claims.mechanic_id()?;

    // Un mecánico borrado deja de autenticar aunque el token siga vigente
    let mechanic = MechanicRepository::new(state.pool.clone())
        .find_by_id(mechanic_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Mecánico no encontrado".to_string()))?;

    debug!("Request autenticado para el mecánico {}", mechanic.id);

    request.extensions_mut().insert(AuthenticatedMechanic(mechanic));

    Ok(next.run(request).await)
}
