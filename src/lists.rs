//! Reconciliation of the two live-updating lists (events, formations).
//!
//! Both lists follow the same pattern: on a change notification, destroy
//! every materialized entry and re-create the set from the coordinator's
//! current snapshot, preserving enumeration order, then toggle the "empty"
//! placeholder. No diffing.

use crate::fleet::FleetCoordinator;
use crate::roster::SelectionRoster;

/// One materialized row of the event feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventEntry {
    pub drone_id: String,
    pub message: String,
}

/// One materialized row of the formation list, wired to a dispatch action
/// keyed by its index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormationEntry {
    pub index: usize,
    pub name: String,
    pub drone_count: usize,
}

#[derive(Debug, Default)]
pub struct ListSync {
    events: Vec<EventEntry>,
    formations: Vec<FormationEntry>,
    events_placeholder: bool,
    formations_placeholder: bool,
}

impl ListSync {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            formations: Vec::new(),
            events_placeholder: true,
            formations_placeholder: true,
        }
    }

    pub fn events(&self) -> &[EventEntry] {
        &self.events
    }

    pub fn formations(&self) -> &[FormationEntry] {
        &self.formations
    }

    /// Whether the "no events" placeholder is showing.
    pub fn events_placeholder(&self) -> bool {
        self.events_placeholder
    }

    /// Whether the "no formations" placeholder is showing.
    pub fn formations_placeholder(&self) -> bool {
        self.formations_placeholder
    }

    /// Full rebuild of the event feed from the current snapshot.
    pub fn on_events_changed(&mut self, fleet: &dyn FleetCoordinator) {
        self.events = fleet
            .events()
            .into_iter()
            .map(|event| EventEntry {
                drone_id: event.drone_id,
                message: event.message,
            })
            .collect();
        self.events_placeholder = self.events.is_empty();
        tracing::debug!(entries = self.events.len(), "event list rebuilt");
    }

    /// Full rebuild of the formation list, then the selection roster.
    ///
    /// The roster rebuild must happen after this list's own reconciliation
    /// completes so drone labels reflect the latest formation membership.
    pub fn on_formations_changed(
        &mut self,
        fleet: &dyn FleetCoordinator,
        roster: &mut SelectionRoster,
    ) {
        self.formations = fleet
            .formations()
            .into_iter()
            .enumerate()
            .map(|(index, group)| FormationEntry {
                index,
                name: group.name,
                drone_count: group.drone_count,
            })
            .collect();
        self.formations_placeholder = self.formations.is_empty();
        tracing::debug!(entries = self.formations.len(), "formation list rebuilt");
        roster.rebuild(fleet);
    }
}
