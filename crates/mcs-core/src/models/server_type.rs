use crate::{CoreError, Result as CoreErrorResult};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Edition of the Minecraft server being watched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServerType {
    #[default]
    Java,
    Bedrock,
}

impl ServerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Java => "java",
            Self::Bedrock => "bedrock",
        }
    }

    /// Leading status API path segment, if this edition needs one
    pub fn path_prefix(&self) -> Option<&'static str> {
        match self {
            Self::Java => None,
            Self::Bedrock => Some("bedrock"),
        }
    }
}

impl FromStr for ServerType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "java" => Ok(Self::Java),
            "bedrock" => Ok(Self::Bedrock),
            _ => Err(CoreError::invalid_server_type(s)),
        }
    }
}

impl std::fmt::Display for ServerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
