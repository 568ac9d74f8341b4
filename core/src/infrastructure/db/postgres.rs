use sea_orm::{DatabaseConnection, SqlxPostgresConnector};
use sqlx::postgres::PgPoolOptions;
use tracing::{error, info};

use crate::domain::common::{DatabaseConfig, entities::app_errors::CoreError};

const MAX_CONNECTIONS: u32 = 10;

/// Connection pool shared by every Postgres repository.
#[derive(Debug, Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, CoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(&config.url())
            .await
            .map_err(|e| {
                error!("Failed to connect to postgres: {}", e);
                CoreError::Database(e.to_string())
            })?;

        if config.run_migrations {
            sqlx::migrate!("./migrations").run(&pool).await.map_err(|e| {
                error!("Failed to run migrations: {}", e);
                CoreError::Database(e.to_string())
            })?;
            info!("database migrations applied");
        }

        Ok(Self {
            db: SqlxPostgresConnector::from_sqlx_postgres_pool(pool),
        })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
