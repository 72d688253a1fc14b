use crate::API_VERSION;

use mcs_core::ServerType;

/// Build the API path for a server, relative to the API base URL.
///
/// Bedrock servers get a leading `bedrock` segment, then the API version, then
/// `host:port`.
pub fn status_path(server_type: ServerType, host: &str, port: u16) -> String {
    let mut segments: Vec<String> = Vec::with_capacity(3);

    if let Some(prefix) = server_type.path_prefix() {
        segments.push(prefix.to_string());
    }

    segments.push(API_VERSION.to_string());
    segments.push(format!("{host}:{port}"));

    segments.join("/")
}
