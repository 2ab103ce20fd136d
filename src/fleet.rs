//! Fleet coordinator seam.
//!
//! The coordinator owns drone inventory, formation execution, and debug
//! visualization. The console only reads snapshots, issues fire-and-forget
//! requests, and reacts to payload-free change notifications by re-querying.

use crate::camera::EntityHandle;
use crate::geometry::Point3;

/// One entry in the coordinator's live event feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetEvent {
    pub drone_id: String,
    pub message: String,
}

/// Snapshot of one formation group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormationSummary {
    pub name: String,
    pub drone_count: usize,
}

/// Payload-free push notifications. The consumer re-queries the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetNotification {
    EventsChanged,
    FormationsChanged,
}

/// The one request the console may have in flight toward the coordinator.
///
/// The callback contract is at-most-once with exactly one of
/// success/failure, observed strictly after the initiating call returned.
/// There is no timeout; an unresponsive coordinator leaves the console
/// waiting (callers should not re-issue before resolution, though that is
/// not mechanically enforced).
#[derive(Debug, Clone, PartialEq)]
pub enum PendingRequest {
    Preview { waypoints: Vec<Point3> },
    Build { count: i64, waypoints: Vec<Point3> },
}

/// External subsystem owning the drones.
pub trait FleetCoordinator {
    fn available_count(&self) -> i64;
    fn working_count(&self) -> i64;
    fn total_count(&self) -> i64;

    /// Drone identifiers in the coordinator's enumeration order.
    fn drone_ids(&self) -> Vec<String>;

    /// Name of the formation `id` belongs to, empty when unassigned.
    fn formation_label(&self, id: &str) -> String;

    /// Focusable handle for a drone, if it is still alive.
    fn entity_handle(&self, id: &str) -> Option<EntityHandle>;

    /// Current event feed, enumeration order preserved.
    fn events(&self) -> Vec<FleetEvent>;

    /// Current formation groups, enumeration order preserved.
    fn formations(&self) -> Vec<FormationSummary>;

    /// Fire-and-forget preview request; resolved later through
    /// [`FleetConsole::on_preview_result`](crate::window::FleetConsole::on_preview_result).
    fn request_preview(&mut self, waypoints: &[Point3]);

    /// Fire-and-forget build request; resolved later through
    /// [`FleetConsole::on_build_result`](crate::window::FleetConsole::on_build_result).
    fn request_build(&mut self, count: i64, waypoints: &[Point3]);

    /// Dispatch the formation group at `index` in the snapshot order.
    fn dispatch(&mut self, index: usize);

    /// Tear down any debug path visualization the coordinator drew for a
    /// preview.
    fn clear_debug_visualization(&mut self);
}
