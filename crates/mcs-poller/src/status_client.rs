use crate::{PollError, PollResult, StatusResponse, USER_AGENT, status_path};

use mcs_config::{ApiConfig, ServerConfig};
use mcs_core::ServerStatusSnapshot;

use log::debug;
use reqwest::Client as ReqwestClient;

/// HTTP client for one server's mcsrvstat.us status endpoint
pub struct StatusClient {
    client: ReqwestClient,
    url: String,
}

impl StatusClient {
    /// Create a client for the server described by `server`.
    ///
    /// # Arguments
    /// * `api` - Base URL and request timeout of the status API
    /// * `server` - Host, port and edition of the Minecraft server
    pub fn new(api: &ApiConfig, server: &ServerConfig) -> PollResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(api.request_timeout())
            .user_agent(USER_AGENT)
            .pool_max_idle_per_host(1)
            .build()?;

        let path = status_path(server.server_type, &server.host, server.port);
        let url = format!("{}/{}", api.base_url.trim_end_matches('/'), path);

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and decode the current status.
    ///
    /// Non-2xx responses and undecodable bodies are errors; an offline server
    /// is a normal snapshot.
    pub async fn fetch(&self) -> PollResult<ServerStatusSnapshot> {
        debug!("Making API request to: {}", self.url);

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(PollError::status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let decoded: StatusResponse = serde_json::from_slice(&body)?;

        Ok(decoded.into())
    }
}
