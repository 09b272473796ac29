use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::environment::EnvironmentConfig;
use crate::models::mechanic::Mechanic;
use crate::utils::errors::AppError;

/// Claims del token de acceso de un mecánico
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,   // mechanic_id
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

impl JwtClaims {
    pub fn mechanic_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.sub)
            .map_err(|_| AppError::Jwt("Subject del token inválido".to_string()))
    }
}

/// Configuración JWT
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub algorithm: Algorithm,
    pub access_token_duration: Duration,
}

impl From<&EnvironmentConfig> for JwtConfig {
    fn from(config: &EnvironmentConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            algorithm: config.jwt_algorithm,
            access_token_duration: Duration::seconds(config.jwt_expiration as i64),
        }
    }
}

/// Servicio JWT: emite y verifica tokens de acceso
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_ref());
        let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Genera un token de acceso para el mecánico
    pub fn issue(&self, mechanic: &Mechanic) -> Result<String, AppError> {
        self.issue_at(mechanic, Utc::now())
    }

    /// Genera un token como si se hubiera emitido en `issued_at`
    pub fn issue_at(&self, mechanic: &Mechanic, issued_at: DateTime<Utc>) -> Result<String, AppError> {
        let exp = issued_at + self.config.access_token_duration;

        let claims = JwtClaims {
            sub: mechanic.id.to_string(),
            email: mechanic.email.clone(),
            iat: issued_at.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::new(self.config.algorithm), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Error generando token: {}", e)))
    }

    /// Valida firma, algoritmo y expiración (`exp` obligatorio, sin margen)
    pub fn verify(&self, token: &str) -> Result<JwtClaims, AppError> {
        let mut validation = Validation::new(self.config.algorithm);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);

        decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::Jwt(format!("Token inválido: {}", e)))
    }

    pub fn access_token_duration(&self) -> Duration {
        self.config.access_token_duration
    }
}
