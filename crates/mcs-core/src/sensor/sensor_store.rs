//! Current sensor values plus the observer channels the host subscribes to.

use crate::{
    EVENT_CHANNEL_CAPACITY, FaultState, OccupancyState, SensorEvent, SensorState,
    ServerStatusSnapshot, fault_description,
};

use log::debug;
use tokio::sync::{broadcast, watch};

/// Owns the occupancy and fault values for one accessory.
///
/// The poller is the only writer. Hosts read through the getters, follow the
/// whole state through [`SensorStore::subscribe`], or receive old/new pairs
/// through [`SensorStore::events`].
pub struct SensorStore {
    name: String,
    state_tx: watch::Sender<SensorState>,
    events_tx: broadcast::Sender<SensorEvent>,
}

impl SensorStore {
    pub fn new<S: Into<String>>(name: S) -> Self {
        let (state_tx, _) = watch::channel(SensorState::default());
        let (events_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Self {
            name: name.into(),
            state_tx,
            events_tx,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> SensorState {
        *self.state_tx.borrow()
    }

    pub fn occupancy(&self) -> OccupancyState {
        let value = self.state_tx.borrow().occupancy;
        debug!(
            "Yielding server “{}” occupancy: [{}]",
            self.name,
            value.description()
        );
        value
    }

    pub fn fault(&self) -> Option<FaultState> {
        let value = self.state_tx.borrow().fault;
        debug!(
            "Yielding server “{}” status: [{}]",
            self.name,
            fault_description(value.map(|f| f.as_code()))
        );
        value
    }

    /// Receiver that always holds the latest state
    pub fn subscribe(&self) -> watch::Receiver<SensorState> {
        self.state_tx.subscribe()
    }

    /// Receiver for change events emitted after this call
    pub fn events(&self) -> broadcast::Receiver<SensorEvent> {
        self.events_tx.subscribe()
    }

    /// Set occupancy. Returns `true` if the value changed.
    pub fn update_occupancy(&self, new: OccupancyState) -> bool {
        let old = self.state_tx.borrow().occupancy;
        if old == new {
            return false;
        }

        self.state_tx.send_modify(|state| state.occupancy = new);
        debug!(
            "Occupancy of “{}” changed from {} to {}",
            self.name,
            old.description(),
            new.description()
        );

        // No subscribers is fine
        let _ = self.events_tx.send(SensorEvent::OccupancyChanged { old, new });
        true
    }

    /// Set fault status. Returns `true` if the value changed.
    pub fn update_fault(&self, new: FaultState) -> bool {
        let old = self.state_tx.borrow().fault;
        if old == Some(new) {
            return false;
        }

        self.state_tx.send_modify(|state| state.fault = Some(new));
        debug!(
            "Server “{}” went from {} to {}",
            self.name,
            fault_description(old.map(|f| f.as_code())),
            new.description()
        );

        let _ = self.events_tx.send(SensorEvent::FaultChanged { old, new });
        true
    }

    /// Project a poll result onto both signals: fault first, then occupancy
    /// when the server is online. An offline snapshot keeps the old occupancy.
    pub fn apply(&self, snapshot: &ServerStatusSnapshot) {
        self.update_fault(snapshot.fault());

        if let Some(occupancy) = snapshot.occupancy() {
            self.update_occupancy(occupancy);
        }
    }
}
