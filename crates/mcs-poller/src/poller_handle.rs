use crate::{PollStatsSnapshot, Poller};

use std::sync::Arc;

use log::{info, warn};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// Owns a running poll loop.
///
/// [`PollerHandle::stop`] shuts the loop down and waits for it; dropping the
/// handle without stopping aborts the task.
pub struct PollerHandle {
    poller: Arc<Poller>,
    shutdown_tx: broadcast::Sender<()>,
    task: Option<JoinHandle<()>>,
}

impl PollerHandle {
    pub(crate) fn new(
        poller: Arc<Poller>,
        shutdown_tx: broadcast::Sender<()>,
        task: JoinHandle<()>,
    ) -> Self {
        Self {
            poller,
            shutdown_tx,
            task: Some(task),
        }
    }

    pub fn poller(&self) -> &Arc<Poller> {
        &self.poller
    }

    pub fn stats(&self) -> PollStatsSnapshot {
        self.poller.stats()
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Signal the loop to stop and wait for it. An in-flight request is
    /// cancelled.
    pub async fn stop(mut self) {
        let _ = self.shutdown_tx.send(());

        if let Some(task) = self.task.take()
            && let Err(e) = task.await
        {
            warn!("Poll task ended abnormally: {e}");
        }

        info!("Stopped polling “{}”", self.poller.sensors().name());
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
