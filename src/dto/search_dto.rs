use serde::Deserialize;
use validator::Validate;

use crate::models::repair::RepairStatus;
use crate::utils::validation::trimmed_option;

// Búsqueda por nombre (mecánicos y clientes)
#[derive(Debug, Default, Deserialize, Validate)]
pub struct NameSearchQuery {
    #[serde(default, deserialize_with = "trimmed_option")]
    #[validate(length(min = 2, max = 100))]
    pub q: Option<String>,

    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
}

// Búsqueda de vehículos: nombre del cliente y/o matrícula
#[derive(Debug, Default, Deserialize, Validate)]
pub struct VehicleSearchQuery {
    #[serde(default, deserialize_with = "trimmed_option")]
    #[validate(length(min = 2, max = 100))]
    pub q: Option<String>,

    #[serde(default, deserialize_with = "trimmed_option")]
    #[validate(length(min = 3, max = 20))]
    pub license_plate: Option<String>,

    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
}

impl VehicleSearchQuery {
    pub fn has_filters(&self) -> bool {
        is_term(&self.q) || is_term(&self.license_plate)
    }
}

// Búsqueda de reparaciones: matrícula, nombre del cliente y/o estado
#[derive(Debug, Default, Deserialize, Validate)]
pub struct RepairSearchQuery {
    #[serde(default, deserialize_with = "trimmed_option")]
    #[validate(length(min = 3, max = 20))]
    pub license_plate: Option<String>,

    #[serde(default, deserialize_with = "trimmed_option")]
    #[validate(length(min = 2, max = 100))]
    pub client_name: Option<String>,

    pub status: Option<RepairStatus>,

    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
}

impl RepairSearchQuery {
    pub fn has_filters(&self) -> bool {
        is_term(&self.license_plate) || is_term(&self.client_name) || self.status.is_some()
    }
}

fn is_term(value: &Option<String>) -> bool {
    value.as_deref().map_or(false, |v| !v.trim().is_empty())
}
