//! In-process device store, used as a test double and for storage-less runs

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::adapter::DeviceRepository;
use crate::domain::{Device, DeviceId, NewDevice};
use crate::error::Result;

#[derive(Debug)]
struct Store {
    next_id: u64,
    devices: BTreeMap<DeviceId, Device>,
}

/// Device repository kept entirely in memory
///
/// Identifiers start at 1 and are never reused, matching an
/// auto-increment column.
#[derive(Debug)]
pub struct InMemoryDeviceRepository {
    store: RwLock<Store>,
}

impl InMemoryDeviceRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                next_id: 1,
                devices: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryDeviceRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeviceRepository for InMemoryDeviceRepository {
    async fn list(&self) -> Result<Vec<Device>> {
        let store = self.store.read().await;
        Ok(store.devices.values().cloned().collect())
    }

    async fn create(&self, device: NewDevice) -> Result<Device> {
        let mut store = self.store.write().await;
        let id = DeviceId::new(store.next_id);
        store.next_id += 1;

        let device = device.into_device(id);
        store.devices.insert(id, device.clone());
        Ok(device)
    }

    async fn get(&self, id: DeviceId) -> Result<Option<Device>> {
        let store = self.store.read().await;
        Ok(store.devices.get(&id).cloned())
    }
}
