//! Selectable-drone roster backing the selection overlay.

use crate::fleet::FleetCoordinator;

/// One pickable drone in the selection grid.
///
/// `highlighted` marks formation members so they render distinctly from
/// unassigned drones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectableEntity {
    pub id: String,
    pub label: String,
    pub highlighted: bool,
}

/// The selection overlay's entity list.
///
/// Rebuilt wholesale on every formations change; entries are never patched
/// in place.
#[derive(Debug, Default)]
pub struct SelectionRoster {
    entries: Vec<SelectableEntity>,
}

impl SelectionRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[SelectableEntity] {
        &self.entries
    }

    /// Drop every previous entry and re-create one per known drone, in the
    /// coordinator's enumeration order, annotated with its formation label
    /// when it has one.
    pub fn rebuild(&mut self, fleet: &dyn FleetCoordinator) {
        self.entries.clear();
        for id in fleet.drone_ids() {
            let label = fleet.formation_label(&id);
            let highlighted = !label.is_empty();
            self.entries.push(SelectableEntity {
                id,
                label,
                highlighted,
            });
        }
        tracing::debug!(entries = self.entries.len(), "selection roster rebuilt");
    }
}
