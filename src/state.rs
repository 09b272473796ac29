//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. El pool es el único recurso compartido
//! entre requests.

use sqlx::SqlitePool;

use crate::config::environment::EnvironmentConfig;
use crate::services::jwt_service::{JwtConfig, JwtService};

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: EnvironmentConfig,
    pub jwt: JwtService,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: EnvironmentConfig) -> Self {
        let jwt = JwtService::new(JwtConfig::from(&config));
        Self { pool, config, jwt }
    }
}
