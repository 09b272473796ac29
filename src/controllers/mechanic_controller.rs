use bcrypt::{hash, verify};
use sqlx::SqlitePool;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::config::environment::EnvironmentConfig;
use crate::dto::auth_dto::{LoginForm, SignupRequest, TokenResponse};
use crate::dto::search_dto::NameSearchQuery;
use crate::models::mechanic::{Mechanic, MechanicResponse, UpdateMechanicRequest};
use crate::models::repair::RepairResponse;
use crate::repositories::mechanic_repository::MechanicRepository;
use crate::repositories::repair_repository::RepairRepository;
use crate::services::jwt_service::JwtService;
use crate::utils::errors::{conflict_error, not_found_error, AppError};
use crate::utils::validation::effective_limit;

pub struct MechanicController {
    repository: MechanicRepository,
    repairs: RepairRepository,
}

impl MechanicController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: MechanicRepository::new(pool.clone()),
            repairs: RepairRepository::new(pool),
        }
    }

    pub async fn signup(
        &self,
        request: SignupRequest,
        config: &EnvironmentConfig,
        jwt: &JwtService,
    ) -> Result<TokenResponse, AppError> {
        request.validate()?;

        if request.registration_code != config.registration_code {
            warn!("Intento de registro con código inválido");
            return Err(AppError::Forbidden("Código de registro inválido".to_string()));
        }

        let email = request.email.trim().to_lowercase();

        // Verificar que el email no exista entre los mecánicos activos
        if self.repository.email_exists(&email, None).await? {
            return Err(conflict_error("Mechanic", "email", &email));
        }

        let password_hash = hash(&request.password, config.bcrypt_cost)
            .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))?;

        let mechanic = Mechanic::new(
            request.name.trim().to_string(),
            email,
            password_hash,
            request.phone.trim().to_string(),
        );

        let saved = self.repository.create(&mechanic).await?;
        let token = jwt.issue(&saved)?;

        info!("Mecánico registrado: {}", saved.id);

        Ok(TokenResponse::bearer(token, saved.into()))
    }

    pub async fn login(&self, form: LoginForm, jwt: &JwtService) -> Result<TokenResponse, AppError> {
        let email = form.username.trim().to_lowercase();

        let mechanic = self
            .repository
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        let valid = verify(&form.password, &mechanic.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let token = jwt.issue(&mechanic)?;

        Ok(TokenResponse::bearer(token, mechanic.into()))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<MechanicResponse, AppError> {
        let mechanic = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Mechanic", &id.to_string()))?;

        Ok(mechanic.into())
    }

    pub async fn search(&self, query: NameSearchQuery) -> Result<Vec<MechanicResponse>, AppError> {
        query.validate()?;

        let mechanics = self
            .repository
            .search(query.q.as_deref(), effective_limit(query.limit))
            .await?;

        Ok(mechanics.into_iter().map(MechanicResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateMechanicRequest,
    ) -> Result<MechanicResponse, AppError> {
        request.validate()?;

        let mut mechanic = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Mechanic", &id.to_string()))?;

        request.apply_to(&mut mechanic);

        if self.repository.email_exists(&mechanic.email, Some(id)).await? {
            return Err(conflict_error("Mechanic", "email", &mechanic.email));
        }

        let updated = self
            .repository
            .update(&mechanic)
            .await?
            .ok_or_else(|| not_found_error("Mechanic", &id.to_string()))?;

        Ok(updated.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.soft_delete(id).await? {
            return Err(not_found_error("Mechanic", &id.to_string()));
        }

        info!("Mecánico eliminado: {}", id);
        Ok(())
    }

    /// Reparaciones asignadas al mecánico
    pub async fn list_repairs(&self, id: Uuid) -> Result<Vec<RepairResponse>, AppError> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(not_found_error("Mechanic", &id.to_string()));
        }

        let repairs = self.repairs.find_by_mechanic(id).await?;

        Ok(repairs.into_iter().map(RepairResponse::from).collect())
    }
}
