//! Device storage abstraction and its implementations

use crate::domain::{Device, DeviceId, NewDevice};
use crate::error::Result;
use async_trait::async_trait;

pub mod memory;
pub mod mysql;

pub use memory::InMemoryDeviceRepository;
pub use mysql::MySqlDeviceRepository;

/// Storage port for devices
///
/// Implementations must be safe to share across concurrently running
/// request handlers.
#[async_trait]
pub trait DeviceRepository: Send + Sync {
    /// List every stored device, in storage-defined order
    async fn list(&self) -> Result<Vec<Device>>;

    /// Insert a device and return it with its newly assigned identifier
    async fn create(&self, device: NewDevice) -> Result<Device>;

    /// Fetch a single device
    async fn get(&self, id: DeviceId) -> Result<Option<Device>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        pub TestRepository {}

        #[async_trait]
        impl DeviceRepository for TestRepository {
            async fn list(&self) -> Result<Vec<Device>>;
            async fn create(&self, device: NewDevice) -> Result<Device>;
            async fn get(&self, id: DeviceId) -> Result<Option<Device>>;
        }
    }

    #[tokio::test]
    async fn test_mock_repository() {
        let mut mock = MockTestRepository::new();
        mock.expect_get()
            .with(mockall::predicate::eq(DeviceId::new(3)))
            .returning(|id| {
                Ok(Some(Device {
                    id,
                    name: "soil-sensor".to_string(),
                    device_type: "humidity".to_string(),
                }))
            });

        let device = mock.get(DeviceId::new(3)).await.unwrap().unwrap();
        assert_eq!(device.name, "soil-sensor");
    }
}
