//! Módulo de base de datos
//!
//! Maneja la conexión y el schema SQLite

pub mod connection;

pub use connection::{run_migrations, DatabaseConnection};
