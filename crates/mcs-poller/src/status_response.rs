use mcs_core::ServerStatusSnapshot;

use serde::Deserialize;

/// Body of a mcsrvstat.us status response. Only the fields the bridge reads.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    pub online: bool,
    #[serde(default)]
    pub players: Option<PlayersResponse>,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayersResponse {
    #[serde(default)]
    pub online: u32,
    #[serde(default)]
    pub max: Option<u32>,
}

impl From<StatusResponse> for ServerStatusSnapshot {
    fn from(response: StatusResponse) -> Self {
        if !response.online {
            return ServerStatusSnapshot::offline();
        }

        let (players, max_players) = match response.players {
            Some(p) => (p.online, p.max),
            None => (0, None),
        };

        ServerStatusSnapshot {
            online: true,
            players: Some(players),
            max_players,
            version: response.version,
        }
    }
}
