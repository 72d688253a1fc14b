use serde::Serialize;

pub const MANUFACTURER: &str = "oof. Studio, LLC";
pub const MODEL: &str = "OOF-MCSERVER";

/// Static identification metadata registered with the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessoryInfo {
    pub manufacturer: String,
    pub model: String,
    pub software_revision: String,
}

impl Default for AccessoryInfo {
    fn default() -> Self {
        Self {
            manufacturer: String::from(MANUFACTURER),
            model: String::from(MODEL),
            software_revision: String::from(env!("CARGO_PKG_VERSION")),
        }
    }
}
