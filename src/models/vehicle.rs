//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y sus variantes para CRUD operations.
//! Mapea exactamente a la tabla `vehicles`; cada vehículo pertenece a un cliente.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::utils::validation::{normalize_license_plate, validate_license_plate, validate_not_blank};

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub client_id: Uuid,
    pub license_plate: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Request para crear un nuevo vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(custom = "validate_license_plate")]
    pub license_plate: String,

    #[validate(length(min = 2, max = 100), custom = "validate_not_blank")]
    pub brand: String,

    #[validate(length(min = 1, max = 100), custom = "validate_not_blank")]
    pub model: String,

    #[validate(range(min = 1886, max = 2100))]
    pub year: i32,
}

impl CreateVehicleRequest {
    pub fn into_vehicle(self, client_id: Uuid) -> Vehicle {
        Vehicle {
            id: Uuid::new_v4(),
            client_id,
            license_plate: normalize_license_plate(&self.license_plate),
            brand: self.brand.trim().to_string(),
            model: self.model.trim().to_string(),
            year: self.year,
            created_at: Utc::now(),
            deleted_at: None,
        }
    }
}

/// Request para actualizar un vehículo existente
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(custom = "validate_license_plate")]
    pub license_plate: Option<String>,

    #[validate(length(min = 2, max = 100), custom = "validate_not_blank")]
    pub brand: Option<String>,

    #[validate(length(min = 1, max = 100), custom = "validate_not_blank")]
    pub model: Option<String>,

    #[validate(range(min = 1886, max = 2100))]
    pub year: Option<i32>,
}

impl UpdateVehicleRequest {
    /// Matrícula normalizada, si viene en el request
    pub fn normalized_plate(&self) -> Option<String> {
        self.license_plate.as_deref().map(normalize_license_plate)
    }

    pub fn apply_to(self, vehicle: &mut Vehicle) {
        if let Some(plate) = self.license_plate {
            vehicle.license_plate = normalize_license_plate(&plate);
        }
        if let Some(brand) = self.brand {
            vehicle.brand = brand.trim().to_string();
        }
        if let Some(model) = self.model {
            vehicle.model = model.trim().to_string();
        }
        if let Some(year) = self.year {
            vehicle.year = year;
        }
    }
}

/// Response de vehículo para la API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub client_id: Uuid,
    pub license_plate: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            client_id: vehicle.client_id,
            license_plate: vehicle.license_plate,
            brand: vehicle.brand,
            model: vehicle.model,
            year: vehicle.year,
            created_at: vehicle.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateVehicleRequest {
        CreateVehicleRequest {
            license_plate: " ab123cd ".to_string(),
            brand: "Ford".to_string(),
            model: "Fiesta".to_string(),
            year: 2015,
        }
    }

    #[test]
    fn test_create_normalizes_plate() {
        let client_id = Uuid::new_v4();
        let vehicle = request().into_vehicle(client_id);
        assert_eq!(vehicle.license_plate, "AB123CD");
        assert_eq!(vehicle.client_id, client_id);
    }

    #[test]
    fn test_year_out_of_range_is_rejected() {
        let mut req = request();
        req.year = 1800;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_keeps_absent_fields() {
        let mut vehicle = request().into_vehicle(Uuid::new_v4());
        UpdateVehicleRequest {
            year: Some(2016),
            ..Default::default()
        }
        .apply_to(&mut vehicle);

        assert_eq!(vehicle.year, 2016);
        assert_eq!(vehicle.brand, "Ford");
        assert_eq!(vehicle.license_plate, "AB123CD");
    }
}
