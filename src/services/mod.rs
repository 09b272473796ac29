//! Servicios de la aplicación
//!
//! Emisión y verificación de tokens de acceso.

pub mod jwt_service;

pub use jwt_service::{JwtClaims, JwtConfig, JwtService};
