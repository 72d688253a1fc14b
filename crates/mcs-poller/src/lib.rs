//! Status polling for a single Minecraft server.
//!
//! [`StatusClient`] talks to the mcsrvstat.us API, [`Poller`] turns each
//! response into sensor updates, and [`PollerHandle`] owns the background
//! task that repeats the poll on an interval.

mod error;
mod in_flight_guard;
mod poll_metrics;
mod poll_outcome;
mod poll_stats;
mod poller;
mod poller_handle;
mod status_client;
mod status_path;
mod status_response;


pub use error::{PollError, Result as PollResult};
pub use poll_metrics::PollMetrics;
pub use poll_outcome::PollOutcome;
pub use poll_stats::{PollStats, PollStatsSnapshot};
pub use poller::Poller;
pub use poller_handle::PollerHandle;
pub use status_client::StatusClient;
pub use status_path::status_path;
pub use status_response::{PlayersResponse, StatusResponse};

/// mcsrvstat.us API version segment
pub const API_VERSION: &str = "3";

const USER_AGENT: &str = concat!("mcs-bridge/", env!("CARGO_PKG_VERSION"));
