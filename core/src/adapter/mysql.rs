//! MySQL adapter implementation

use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlRow};
use sqlx::Row;
use tracing::debug;

use crate::adapter::DeviceRepository;
use crate::domain::{Device, DeviceId, NewDevice};
use crate::error::Result;

/// Device repository backed by the `devices` table
#[derive(Clone)]
pub struct MySqlDeviceRepository {
    pool: MySqlPool,
}

impl MySqlDeviceRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Map a `devices` row. Legacy rows may carry NULL name/type.
    fn row_to_device(row: &MySqlRow) -> Result<Device> {
        let id: u64 = row.try_get("id")?;
        let name: Option<String> = row.try_get("name")?;
        let device_type: Option<String> = row.try_get("type")?;

        Ok(Device {
            id: DeviceId::new(id),
            name: name.unwrap_or_default(),
            device_type: device_type.unwrap_or_default(),
        })
    }
}

#[async_trait]
impl DeviceRepository for MySqlDeviceRepository {
    async fn list(&self) -> Result<Vec<Device>> {
        let rows = sqlx::query("SELECT id, name, `type` FROM devices")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_device).collect()
    }

    async fn create(&self, device: NewDevice) -> Result<Device> {
        let result = sqlx::query("INSERT INTO devices (name, `type`) VALUES (?, ?)")
            .bind(&device.name)
            .bind(&device.device_type)
            .execute(&self.pool)
            .await?;

        let id = DeviceId::new(result.last_insert_id());
        debug!("Inserted device {}", id);
        Ok(device.into_device(id))
    }

    async fn get(&self, id: DeviceId) -> Result<Option<Device>> {
        let row = sqlx::query("SELECT id, name, `type` FROM devices WHERE id = ?")
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_device).transpose()
    }
}
