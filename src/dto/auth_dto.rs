use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::mechanic::MechanicResponse;
use crate::utils::validation::validate_not_blank;

// Request de alta de mecánico
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 2, max = 100), custom = "validate_not_blank")]
    pub name: String,

    #[validate(email, length(max = 255))]
    pub email: String,

    #[validate(length(min = 8, max = 128))]
    pub password: String,

    #[validate(length(min = 6, max = 30))]
    pub phone: String,

    pub registration_code: String,
}

// Login por formulario (username = email)
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

// Response con el token de acceso y el perfil del mecánico
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub mechanic: MechanicResponse,
}

impl TokenResponse {
    pub fn bearer(access_token: String, mechanic: MechanicResponse) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            mechanic,
        }
    }
}
