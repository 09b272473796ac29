use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::search_dto::NameSearchQuery;
use crate::models::client::{ClientResponse, CreateClientRequest, UpdateClientRequest};
use crate::models::vehicle::{CreateVehicleRequest, VehicleResponse};
use crate::repositories::client_repository::ClientRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};
use crate::utils::validation::effective_limit;

pub struct ClientController {
    repository: ClientRepository,
    vehicles: VehicleRepository,
}

impl ClientController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: ClientRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateClientRequest) -> Result<ClientResponse, AppError> {
        request.validate()?;

        let client = self.repository.create(&request.into_client()).await?;
        info!("Cliente creado: {}", client.id);

        Ok(client.into())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ClientResponse, AppError> {
        let client = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Client", &id.to_string()))?;

        Ok(client.into())
    }

    pub async fn search(&self, query: NameSearchQuery) -> Result<Vec<ClientResponse>, AppError> {
        query.validate()?;

        let clients = self
            .repository
            .search(query.q.as_deref(), effective_limit(query.limit))
            .await?;

        Ok(clients.into_iter().map(ClientResponse::from).collect())
    }

    pub async fn update(&self, id: Uuid, request: UpdateClientRequest) -> Result<ClientResponse, AppError> {
        request.validate()?;

        let mut client = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Client", &id.to_string()))?;

        request.apply_to(&mut client);

        let updated = self
            .repository
            .update(&client)
            .await?
            .ok_or_else(|| not_found_error("Client", &id.to_string()))?;

        Ok(updated.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.soft_delete(id).await? {
            return Err(not_found_error("Client", &id.to_string()));
        }

        info!("Cliente eliminado: {}", id);
        Ok(())
    }

    /// Registra un vehículo para el cliente; la matrícula debe ser única
    pub async fn add_vehicle(
        &self,
        client_id: Uuid,
        request: CreateVehicleRequest,
    ) -> Result<VehicleResponse, AppError> {
        request.validate()?;

        if !self.repository.exists(client_id).await? {
            return Err(not_found_error("Client", &client_id.to_string()));
        }

        let vehicle = request.into_vehicle(client_id);

        if self
            .vehicles
            .license_plate_exists(&vehicle.license_plate, None)
            .await?
        {
            return Err(conflict_error("Vehicle", "license_plate", &vehicle.license_plate));
        }

        let saved = self.vehicles.create(&vehicle).await?;
        info!("Vehículo {} creado para el cliente {}", saved.license_plate, client_id);

        Ok(saved.into())
    }

    pub async fn list_vehicles(&self, client_id: Uuid) -> Result<Vec<VehicleResponse>, AppError> {
        if !self.repository.exists(client_id).await? {
            return Err(not_found_error("Client", &client_id.to_string()));
        }

        let vehicles = self.vehicles.find_by_client(client_id).await?;

        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }
}
