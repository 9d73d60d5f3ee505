use super::IDeviceRepo;

use chrono::{DateTime, Utc};
use sqlx::{types::Uuid, FromRow, PgPool};
use taskflow_domain::{Device, ID};

pub struct PostgresDeviceRepo {
    pool: PgPool,
}

impl PostgresDeviceRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct DeviceRaw {
    device_uid: Uuid,
    name: String,
    url: String,
    enabled: bool,
    created_at: DateTime<Utc>,
}

impl Into<Device> for DeviceRaw {
    fn into(self) -> Device {
        Device {
            id: self.device_uid.into(),
            name: self.name,
            url: self.url,
            enabled: self.enabled,
            created_at: self.created_at,
        }
    }
}

#[async_trait::async_trait]
impl IDeviceRepo for PostgresDeviceRepo {
    async fn insert(&self, device: &Device) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO bark_devices
            (device_uid, name, url, enabled, created_at)
            VALUES($1, $2, $3, $4, $5)
            "#,
        )
        .bind(device.id.inner_ref())
        .bind(&device.name)
        .bind(&device.url)
        .bind(device.enabled)
        .bind(device.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, device_id: &ID) -> Option<Device> {
        sqlx::query_as::<_, DeviceRaw>(
            r#"
            SELECT * FROM bark_devices
            WHERE device_uid = $1
            "#,
        )
        .bind(device_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|device| device.into())
    }

    async fn find_enabled(&self) -> anyhow::Result<Vec<Device>> {
        let devices = sqlx::query_as::<_, DeviceRaw>(
            r#"
            SELECT * FROM bark_devices
            WHERE enabled
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(devices.into_iter().map(|device| device.into()).collect())
    }

    async fn delete(&self, device_id: &ID) -> Option<Device> {
        sqlx::query_as::<_, DeviceRaw>(
            r#"
            DELETE FROM bark_devices
            WHERE device_uid = $1
            RETURNING *
            "#,
        )
        .bind(device_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|device| device.into())
    }
}
