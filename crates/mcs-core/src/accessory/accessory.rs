use crate::{AccessoryInfo, CharacteristicKind, SensorStore, ServiceDescriptor, ServiceKind};

use std::sync::Arc;

use log::info;

/// Value of the occupancy service's `Name` characteristic
pub const STATUS_SERVICE_NAME: &str = "Minecraft Server Status";

/// The smart-home accessory for one Minecraft server
pub struct Accessory {
    name: String,
    info: AccessoryInfo,
    sensors: Arc<SensorStore>,
}

impl Accessory {
    pub fn new<S: Into<String>>(name: S) -> Self {
        let name = name.into();
        let sensors = Arc::new(SensorStore::new(name.clone()));

        Self {
            name,
            info: AccessoryInfo::default(),
            sensors,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn information(&self) -> &AccessoryInfo {
        &self.info
    }

    /// Shared handle to the state the poller writes into
    pub fn sensors(&self) -> Arc<SensorStore> {
        Arc::clone(&self.sensors)
    }

    /// Called by the host when the user asks the accessory to identify itself
    pub fn identify(&self) {
        info!("Minecraft Server Status!");
    }

    /// Services to register, in registration order
    pub fn services(&self) -> Vec<ServiceDescriptor> {
        vec![
            ServiceDescriptor {
                kind: ServiceKind::OccupancySensor,
                name: self.name.clone(),
                label: Some(String::from(STATUS_SERVICE_NAME)),
                characteristics: vec![
                    CharacteristicKind::Name,
                    CharacteristicKind::OccupancyDetected,
                    CharacteristicKind::StatusFault,
                ],
            },
            ServiceDescriptor {
                kind: ServiceKind::AccessoryInformation,
                name: self.name.clone(),
                label: None,
                characteristics: vec![
                    CharacteristicKind::Manufacturer,
                    CharacteristicKind::Model,
                    CharacteristicKind::SoftwareRevision,
                ],
            },
        ]
    }
}
