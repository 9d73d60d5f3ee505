mod inmemory;
mod postgres;

pub use inmemory::InMemoryDeviceRepo;
pub use postgres::PostgresDeviceRepo;
use taskflow_domain::{Device, ID};

#[async_trait::async_trait]
pub trait IDeviceRepo: Send + Sync {
    async fn insert(&self, device: &Device) -> anyhow::Result<()>;
    async fn find(&self, device_id: &ID) -> Option<Device>;
    async fn find_enabled(&self) -> anyhow::Result<Vec<Device>>;
    async fn delete(&self, device_id: &ID) -> Option<Device>;
}
