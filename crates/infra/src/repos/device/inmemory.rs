use super::IDeviceRepo;
use crate::repos::shared::inmemory_repo::*;

use std::sync::Mutex;
use taskflow_domain::{Device, ID};

pub struct InMemoryDeviceRepo {
    devices: Mutex<Vec<Device>>,
}

impl InMemoryDeviceRepo {
    pub fn new() -> Self {
        Self {
            devices: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IDeviceRepo for InMemoryDeviceRepo {
    async fn insert(&self, device: &Device) -> anyhow::Result<()> {
        insert(device, &self.devices);
        Ok(())
    }

    async fn find(&self, device_id: &ID) -> Option<Device> {
        find(device_id, &self.devices)
    }

    async fn find_enabled(&self) -> anyhow::Result<Vec<Device>> {
        Ok(find_by(&self.devices, |device| device.enabled))
    }

    async fn delete(&self, device_id: &ID) -> Option<Device> {
        delete(device_id, &self.devices)
    }
}
