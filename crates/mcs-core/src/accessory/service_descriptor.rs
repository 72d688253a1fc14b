use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    OccupancySensor,
    AccessoryInformation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacteristicKind {
    Name,
    OccupancyDetected,
    StatusFault,
    Manufacturer,
    Model,
    SoftwareRevision,
}

/// A service the host platform should register for this accessory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceDescriptor {
    pub kind: ServiceKind,
    pub name: String,
    /// Value of the `Name` characteristic, when the service exposes one
    pub label: Option<String>,
    pub characteristics: Vec<CharacteristicKind>,
}
