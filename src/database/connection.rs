//! Conexión a SQLite
//!
//! Crea el pool de conexiones y asegura que el schema exista
//! antes de que el servidor empiece a recibir requests.

use sqlx::SqlitePool;
use tracing::info;

use crate::config::DatabaseConfig;

/// Schema del taller. Cada sentencia es idempotente (`IF NOT EXISTS`).
/// Las restricciones de unicidad solo aplican a filas no borradas.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS mechanics (
        id            BLOB PRIMARY KEY NOT NULL,
        name          TEXT NOT NULL,
        email         TEXT NOT NULL,
        password_hash TEXT NOT NULL,
        phone         TEXT NOT NULL,
        created_at    TEXT NOT NULL,
        deleted_at    TEXT
    )
    "#,
    "CREATE UNIQUE INDEX IF NOT EXISTS ux_mechanics_email ON mechanics(email) WHERE deleted_at IS NULL",
    "CREATE INDEX IF NOT EXISTS ix_mechanics_name ON mechanics(name)",
    r#"
    CREATE TABLE IF NOT EXISTS clients (
        id         BLOB PRIMARY KEY NOT NULL,
        name       TEXT NOT NULL,
        phone      TEXT NOT NULL,
        email      TEXT NOT NULL,
        created_at TEXT NOT NULL,
        deleted_at TEXT
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_clients_name ON clients(name)",
    r#"
    CREATE TABLE IF NOT EXISTS vehicles (
        id            BLOB PRIMARY KEY NOT NULL,
        client_id     BLOB NOT NULL REFERENCES clients(id),
        license_plate TEXT NOT NULL,
        brand         TEXT NOT NULL,
        model         TEXT NOT NULL,
        year          INTEGER NOT NULL,
        created_at    TEXT NOT NULL,
        deleted_at    TEXT
    )
    "#,
    "CREATE UNIQUE INDEX IF NOT EXISTS ux_vehicles_license_plate ON vehicles(license_plate) WHERE deleted_at IS NULL",
    "CREATE INDEX IF NOT EXISTS ix_vehicles_client_id ON vehicles(client_id)",
    r#"
    CREATE TABLE IF NOT EXISTS repairs (
        id          BLOB PRIMARY KEY NOT NULL,
        mechanic_id BLOB NOT NULL REFERENCES mechanics(id),
        vehicle_id  BLOB NOT NULL REFERENCES vehicles(id),
        description TEXT NOT NULL,
        status      TEXT NOT NULL CHECK (status IN ('pending', 'in_repair', 'ready', 'delivered')),
        start_date  TEXT NOT NULL,
        finish_date TEXT,
        created_at  TEXT NOT NULL,
        deleted_at  TEXT
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_repairs_vehicle_id ON repairs(vehicle_id)",
    "CREATE INDEX IF NOT EXISTS ix_repairs_mechanic_id ON repairs(mechanic_id)",
    "CREATE INDEX IF NOT EXISTS ix_repairs_status ON repairs(status)",
    r#"
    CREATE TABLE IF NOT EXISTS capsules (
        id          BLOB PRIMARY KEY NOT NULL,
        sender_id   BLOB NOT NULL REFERENCES mechanics(id),
        email       TEXT NOT NULL,
        content     TEXT NOT NULL,
        created_at  TEXT NOT NULL,
        unlock_date TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_capsules_unlock_date ON capsules(unlock_date)",
];

/// Conexión a la base de datos, dueña del pool
#[derive(Clone)]
pub struct DatabaseConnection {
    pool: SqlitePool,
}

impl DatabaseConnection {
    /// Crear el pool y ejecutar las migraciones
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        info!("🗄️  Conectando a la base de datos: {}", config.url);
        let pool = config.create_pool().await?;
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn into_pool(self) -> SqlitePool {
        self.pool
    }
}

/// Crear tablas e índices si no existen
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    info!("✅ Schema verificado ({} sentencias)", SCHEMA.len());
    Ok(())
}
