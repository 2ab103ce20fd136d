//! Fleet UI orchestration and validation controller.
//!
//! The library core is render-free: [`window::FleetConsole`] arbitrates the
//! modal regions (main window, overview overlay, selection overlay),
//! validates operator-entered formation commands, walks previewed paths via
//! a camera focus target, reconciles the live event/formation lists, and
//! manages the single-slot alert. Collaborators (fleet coordinator, camera
//! rig, view transitions) are injected as trait objects or generics; the
//! binary in `src/main.rs` wires a simulated fleet into a ratatui view.

pub mod alert;
pub mod camera;
pub mod error;
pub mod fleet;
pub mod geometry;
pub mod keybindings;
pub mod lists;
pub mod overview;
pub mod parse;
pub mod roster;
pub mod state;
pub mod tracing_sub;
pub mod transitions;
pub mod ui;
pub mod window;

pub use alert::{ALERT_HOLD, AlertNotifier};
pub use camera::{CameraRig, EntityHandle, FocusTarget};
pub use error::CommandError;
pub use fleet::{
    FleetCoordinator, FleetEvent, FleetNotification, FormationSummary, PendingRequest,
};
pub use geometry::Point3;
pub use overview::{Direction, OverviewSession};
pub use state::ConsoleState;
pub use transitions::{NullTransitions, Region, Transition, TransitionDriver};
pub use window::{
    FleetConsole, IDLE_LOG, OVERVIEW_PANEL_COUNT, PAGE_COMMAND, PAGE_COUNT, PAGE_EVENTS,
    PAGE_FORMATIONS, PAGE_STATUS,
};
