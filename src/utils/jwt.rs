//! Utilidades JWT
//!
//! Helpers para leer el token Bearer del header `Authorization`.

use crate::utils::errors::AppError;

/// Validar formato de token (básico)
pub fn validate_token_format(token: &str) -> Result<(), AppError> {
    if token.is_empty() {
        return Err(AppError::Unauthorized("Token no puede estar vacío".to_string()));
    }

    if token.split('.').count() != 3 {
        return Err(AppError::Unauthorized(
            "Token debe tener 3 partes separadas por puntos".to_string(),
        ));
    }

    Ok(())
}

/// Extraer token del header Authorization
pub fn extract_token_from_header(auth_header: &str) -> Result<&str, AppError> {
    let token = auth_header
        .strip_prefix("Bearer ")
        .or_else(|| auth_header.strip_prefix("bearer "))
        .ok_or_else(|| {
            AppError::Unauthorized("Header Authorization debe comenzar con 'Bearer '".to_string())
        })?
        .trim();

    validate_token_format(token)?;
    Ok(token)
}
