//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente
//! al schema SQLite, junto con sus requests y responses.

pub mod capsule;
pub mod client;
pub mod mechanic;
pub mod repair;
pub mod vehicle;
