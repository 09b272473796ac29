//! Middleware del sistema
//!
//! Autenticación de mecánicos y CORS.

pub mod auth;
pub mod cors;

pub use auth::{auth_middleware, AuthenticatedMechanic};
pub use cors::cors_middleware;
