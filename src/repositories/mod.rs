//! Repositorios: acceso a datos por tabla
//!
//! Todas las consultas excluyen filas con `deleted_at`.

pub mod capsule_repository;
pub mod client_repository;
pub mod mechanic_repository;
pub mod repair_repository;
pub mod vehicle_repository;
