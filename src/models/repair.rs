//! Modelo de Repair
//!
//! Una reparación vincula un mecánico con un vehículo. El estado es libre
//! entre los cuatro valores: no hay orden de transición.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use std::fmt;
use uuid::Uuid;
use validator::Validate;

use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::{nullable, validate_not_blank};

/// Estado de la reparación - se guarda como TEXT
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum RepairStatus {
    #[default]
    Pending,
    InRepair,
    Ready,
    Delivered,
}

impl RepairStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepairStatus::Pending => "pending",
            RepairStatus::InRepair => "in_repair",
            RepairStatus::Ready => "ready",
            RepairStatus::Delivered => "delivered",
        }
    }
}

impl fmt::Display for RepairStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Repair principal - mapea exactamente a la tabla repairs
#[derive(Debug, Clone, FromRow)]
pub struct Repair {
    pub id: Uuid,
    pub mechanic_id: Uuid,
    pub vehicle_id: Uuid,
    pub description: String,
    pub status: RepairStatus,
    pub start_date: DateTime<Utc>,
    pub finish_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Repair {
    /// La fecha de fin, si existe, no puede ser anterior al inicio
    pub fn check_dates(&self) -> AppResult<()> {
        match self.finish_date {
            Some(finish) if finish < self.start_date => Err(validation_error(
                "finish_date",
                "finish_date must not be earlier than start_date",
            )),
            _ => Ok(()),
        }
    }
}

/// Request para registrar una reparación sobre un vehículo.
/// Sin `mechanic_id` se asigna al mecánico autenticado.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRepairRequest {
    #[validate(length(min = 3, max = 1000), custom = "validate_not_blank")]
    pub description: String,

    #[serde(default)]
    pub status: RepairStatus,

    pub start_date: Option<DateTime<Utc>>,

    pub finish_date: Option<DateTime<Utc>>,

    pub mechanic_id: Option<Uuid>,
}

impl CreateRepairRequest {
    pub fn into_repair(self, mechanic_id: Uuid, vehicle_id: Uuid) -> Repair {
        let now = Utc::now();
        Repair {
            id: Uuid::new_v4(),
            mechanic_id,
            vehicle_id,
            description: self.description.trim().to_string(),
            status: self.status,
            start_date: self.start_date.unwrap_or(now),
            finish_date: self.finish_date,
            created_at: now,
            deleted_at: None,
        }
    }
}

/// Request para actualizar una reparación existente
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateRepairRequest {
    #[validate(length(min = 3, max = 1000), custom = "validate_not_blank")]
    pub description: Option<String>,

    pub status: Option<RepairStatus>,

    pub start_date: Option<DateTime<Utc>>,

    // `null` reabre la reparación
    #[serde(default, deserialize_with = "nullable")]
    pub finish_date: Option<Option<DateTime<Utc>>>,
}

impl UpdateRepairRequest {
    pub fn apply_to(self, repair: &mut Repair) {
        if let Some(description) = self.description {
            repair.description = description.trim().to_string();
        }
        if let Some(status) = self.status {
            repair.status = status;
        }
        if let Some(start_date) = self.start_date {
            repair.start_date = start_date;
        }
        if let Some(finish_date) = self.finish_date {
            repair.finish_date = finish_date;
        }
    }
}

/// Response de reparación para la API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepairResponse {
    pub id: Uuid,
    pub mechanic_id: Uuid,
    pub vehicle_id: Uuid,
    pub description: String,
    pub status: RepairStatus,
    pub start_date: DateTime<Utc>,
    pub finish_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Repair> for RepairResponse {
    fn from(repair: Repair) -> Self {
        Self {
            id: repair.id,
            mechanic_id: repair.mechanic_id,
            vehicle_id: repair.vehicle_id,
            description: repair.description,
            status: repair.status,
            start_date: repair.start_date,
            finish_date: repair.finish_date,
            created_at: repair.created_at,
        }
    }
}
