//! Configuración de variables de entorno
//!
//! Este módulo lee la configuración del proceso desde el entorno
//! (cargado previamente desde `.env` con `dotenvy`).

use anyhow::{anyhow, Context, Result};
use jsonwebtoken::Algorithm;
use std::env;
use std::str::FromStr;

/// Duración por defecto del token de acceso (segundos)
pub const DEFAULT_JWT_EXPIRATION: u64 = 900;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_algorithm: Algorithm,
    pub jwt_expiration: u64,
    pub registration_code: String,
    pub bcrypt_cost: u32,
    pub cors_origins: Vec<String>,
}

impl EnvironmentConfig {
    /// Construir la configuración desde variables de entorno
    pub fn from_env() -> Result<Self> {
        let jwt_algorithm = parse_algorithm(&var_or("JWT_ALGORITHM", "HS256"))?;

        Ok(Self {
            environment: var_or("ENVIRONMENT", "development"),
            port: parse_var("PORT", 8000)?,
            host: var_or("HOST", "0.0.0.0"),
            database_url: var_or("DATABASE_URL", "sqlite://database.db"),
            jwt_secret: required_var("JWT_SECRET")?,
            jwt_algorithm,
            jwt_expiration: parse_var("JWT_EXPIRATION", DEFAULT_JWT_EXPIRATION)?,
            registration_code: required_var("MECHANIC_REGISTRATION_CODE")?,
            bcrypt_cost: parse_var("BCRYPT_COST", bcrypt::DEFAULT_COST)?,
            cors_origins: env::var("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn required_var(key: &str) -> Result<String> {
    let value = env::var(key).with_context(|| format!("{} must be set", key))?;
    if value.trim().is_empty() {
        return Err(anyhow!("{} must not be empty", key));
    }
    Ok(value)
}

fn parse_var<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("{} must be a valid number: {}", key, e)),
        Err(_) => Ok(default),
    }
}

/// Solo se aceptan algoritmos HMAC: el secreto es compartido
pub fn parse_algorithm(raw: &str) -> Result<Algorithm> {
    let algorithm = Algorithm::from_str(raw.trim())
        .map_err(|e| anyhow!("JWT_ALGORITHM '{}' is not valid: {}", raw, e))?;

    match algorithm {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => Ok(algorithm),
        other => Err(anyhow!(
            "JWT_ALGORITHM {:?} is not supported with a shared secret",
            other
        )),
    }
}
