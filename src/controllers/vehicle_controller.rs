use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::search_dto::VehicleSearchQuery;
use crate::models::repair::{CreateRepairRequest, RepairResponse};
use crate::models::vehicle::{UpdateVehicleRequest, VehicleResponse};
use crate::repositories::mechanic_repository::MechanicRepository;
use crate::repositories::repair_repository::RepairRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};
use crate::utils::validation::effective_limit;

pub struct VehicleController {
    repository: VehicleRepository,
    repairs: RepairRepository,
    mechanics: MechanicRepository,
}

impl VehicleController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: VehicleRepository::new(pool.clone()),
            repairs: RepairRepository::new(pool.clone()),
            mechanics: MechanicRepository::new(pool),
        }
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;

        Ok(vehicle.into())
    }

    /// Sin filtros no se devuelve nada
    pub async fn search(&self, query: VehicleSearchQuery) -> Result<Vec<VehicleResponse>, AppError> {
        query.validate()?;

        if !query.has_filters() {
            return Ok(Vec::new());
        }

        let vehicles = self
            .repository
            .search(
                query.q.as_deref(),
                query.license_plate.as_deref(),
                effective_limit(query.limit),
            )
            .await?;

        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn update(&self, id: Uuid, request: UpdateVehicleRequest) -> Result<VehicleResponse, AppError> {
        request.validate()?;

        let mut vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;

        if let Some(plate) = request.normalized_plate() {
            if self.repository.license_plate_exists(&plate, Some(id)).await? {
                return Err(conflict_error("Vehicle", "license_plate", &plate));
            }
        }

        request.apply_to(&mut vehicle);

        let updated = self
            .repository
            .update(&vehicle)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;

        Ok(updated.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.soft_delete(id).await? {
            return Err(not_found_error("Vehicle", &id.to_string()));
        }

        info!("Vehículo eliminado: {}", id);
        Ok(())
    }

    /// Registra una reparación; sin `mechanic_id` queda asignada a `current_mechanic`
    pub async fn add_repair(
        &self,
        vehicle_id: Uuid,
        current_mechanic: Uuid,
        request: CreateRepairRequest,
    ) -> Result<RepairResponse, AppError> {
        request.validate()?;

        if !self.repository.exists(vehicle_id).await? {
            return Err(not_found_error("Vehicle", &vehicle_id.to_string()));
        }

        let mechanic_id = request.mechanic_id.unwrap_or(current_mechanic);
        if self.mechanics.find_by_id(mechanic_id).await?.is_none() {
            return Err(not_found_error("Mechanic", &mechanic_id.to_string()));
        }

        let repair = request.into_repair(mechanic_id, vehicle_id);
        repair.check_dates()?;

        let saved = self.repairs.create(&repair).await?;
        info!("Reparación {} registrada para el vehículo {}", saved.id, vehicle_id);

        Ok(saved.into())
    }

    pub async fn list_repairs(&self, vehicle_id: Uuid) -> Result<Vec<RepairResponse>, AppError> {
        if !self.repository.exists(vehicle_id).await? {
            return Err(not_found_error("Vehicle", &vehicle_id.to_string()));
        }

        let repairs = self.repairs.find_by_vehicle(vehicle_id).await?;

        Ok(repairs.into_iter().map(RepairResponse::from).collect())
    }
}
