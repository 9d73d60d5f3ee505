mod device;
mod shared;
mod task;

pub use device::IDeviceRepo;
use device::{InMemoryDeviceRepo, PostgresDeviceRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
pub use task::ITaskRepo;
use task::{InMemoryTaskRepo, PostgresTaskRepo};
use tracing::info;

#[derive(Clone)]
pub struct Repos {
    pub tasks: Arc<dyn ITaskRepo>,
    pub devices: Arc<dyn IDeviceRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        Ok(Self {
            tasks: Arc::new(PostgresTaskRepo::new(pool.clone())),
            devices: Arc::new(PostgresDeviceRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            tasks: Arc::new(InMemoryTaskRepo::new()),
            devices: Arc::new(InMemoryDeviceRepo::new()),
        }
    }
}
