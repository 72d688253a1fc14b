use mcs_core::ServerStatusSnapshot;

/// Result of a poll that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// Snapshot fetched and applied to the sensors
    Updated(ServerStatusSnapshot),
    /// Another poll was already in flight; nothing was requested
    Skipped,
}
