//! `FleetConsole`: the top-level modal state machine and command orchestrator.
//!
//! Owns the window/overlay flags, the current page, the formation command
//! draft, the overview session, the pending fleet request, both reconciled
//! lists, the selection roster, and the alert slot. Collaborators (fleet
//! coordinator, camera rig, transition driver) are injected at construction.
//!
//! Everything here runs on one logical control thread; the only suspensions
//! are the alert hold deadline (driven by `tick`) and the fleet
//! request/callback boundary (resolved by `on_preview_result` /
//! `on_build_result`).

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::alert::AlertNotifier;
use crate::camera::{CameraRig, FocusTarget};
use crate::error::CommandError;
use crate::fleet::{FleetCoordinator, FleetNotification, PendingRequest};
use crate::keybindings::{Action, KeyBindings};
use crate::lists::ListSync;
use crate::overview::{Direction, OverviewSession};
use crate::parse;
use crate::roster::SelectionRoster;
use crate::state::ConsoleState;
use crate::transitions::{Region, Transition, TransitionDriver};

/// Main sub-panel pages, in display order.
pub const PAGE_STATUS: usize = 0;
pub const PAGE_EVENTS: usize = 1;
pub const PAGE_COMMAND: usize = 2;
pub const PAGE_FORMATIONS: usize = 3;
pub const PAGE_COUNT: usize = 4;

/// Sub-panels of the overview overlay. The preview flow uses panel 0.
pub const OVERVIEW_PANEL_COUNT: usize = 2;

/// Status line shown while no command is in flight.
pub const IDLE_LOG: &str = "console ready... waiting";

pub struct FleetConsole<F, C, T>
where
    F: FleetCoordinator,
    C: CameraRig,
    T: TransitionDriver,
{
    fleet: F,
    camera: C,
    transitions: T,

    state: ConsoleState,
    current_page: usize,
    previous_page: Option<usize>,
    overview_panels: [bool; OVERVIEW_PANEL_COUNT],

    session: Option<OverviewSession>,
    pending: Option<PendingRequest>,
    attached: bool,

    // Published text surfaces.
    header_text: String,
    status_log: String,
    check_result: String,

    // Re-enterable command draft; cleared only on successful build.
    count_text: String,
    path_text: String,

    selected_drone: Option<String>,

    alert: AlertNotifier,
    roster: SelectionRoster,
    lists: ListSync,
    bindings: KeyBindings,
}

impl<F, C, T> FleetConsole<F, C, T>
where
    F: FleetCoordinator,
    C: CameraRig,
    T: TransitionDriver,
{
    pub fn new(fleet: F, camera: C, transitions: T) -> Self {
        let mut console = Self {
            fleet,
            camera,
            transitions,
            state: ConsoleState::new(),
            current_page: PAGE_STATUS,
            previous_page: None,
            overview_panels: [false; OVERVIEW_PANEL_COUNT],
            session: None,
            pending: None,
            attached: false,
            header_text: String::new(),
            status_log: IDLE_LOG.to_string(),
            check_result: String::new(),
            count_text: String::new(),
            path_text: String::new(),
            selected_drone: None,
            alert: AlertNotifier::new(),
            roster: SelectionRoster::new(),
            lists: ListSync::new(),
            bindings: KeyBindings::default(),
        };
        console.refresh_header();
        console
    }

    /// Seed both reconciled lists from the current fleet snapshot, as if
    /// one notification of each kind had arrived.
    pub fn initialize(&mut self) {
        self.lists.on_events_changed(&self.fleet);
        self.lists.on_formations_changed(&self.fleet, &mut self.roster);
    }

    // ---- subscription lifecycle ----

    /// Start reacting to fleet change notifications. Pair with [`detach`]
    /// on deactivation; the two must stay symmetric so a dormant console
    /// neither reacts to stale notifications nor leaks a subscription.
    ///
    /// [`detach`]: FleetConsole::detach
    pub fn attach(&mut self) {
        self.attached = true;
        tracing::debug!("console attached to fleet notifications");
    }

    pub fn detach(&mut self) {
        self.attached = false;
        tracing::debug!("console detached from fleet notifications");
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Route one push notification. Ignored (logged) while detached.
    pub fn handle_notification(&mut self, notification: FleetNotification) {
        if !self.attached {
            tracing::debug!(?notification, "notification ignored while detached");
            return;
        }
        match notification {
            FleetNotification::EventsChanged => {
                self.lists.on_events_changed(&self.fleet);
            }
            FleetNotification::FormationsChanged => {
                self.lists.on_formations_changed(&self.fleet, &mut self.roster);
            }
        }
    }

    // ---- main window ----

    /// Open or close the main window. A no-op while either overlay is
    /// active; the mutual exclusion lives in [`ConsoleState`].
    pub fn open_window(&mut self, open: bool) {
        if !self.state.set_main_open(open) {
            tracing::debug!(open, "main window toggle refused while overlay active");
            return;
        }
        if open {
            self.update_page(self.current_page);
            self.transitions.play(Region::Main, Transition::Intro);
        } else {
            self.transitions.play(Region::Main, Transition::Outro);
        }
        tracing::debug!(open, "main window toggled");
    }

    /// Switch the main sub-panel. Duplicate calls are no-ops so a page's
    /// intro never replays on re-selection.
    pub fn call_window(&mut self, page: usize) {
        if page == self.current_page {
            return;
        }
        self.update_page(page);
    }

    fn update_page(&mut self, page: usize) {
        if let Some(previous) = self.previous_page {
            self.transitions
                .play(Region::Page(previous), Transition::PageOutro);
        }
        self.previous_page = Some(page);
        self.current_page = page;
        self.transitions
            .play(Region::Page(page), Transition::PageIntro);
        self.refresh_header();
        self.status_log = IDLE_LOG.to_string();
        tracing::debug!(page, "page activated");
    }

    // ---- overview overlay ----

    /// Open the overview overlay showing sub-panel `panel`, with the
    /// walkthrough rewound to the first waypoint.
    pub fn open_overview_window(&mut self, panel: usize) {
        self.state.set_overview_active(true);
        if let Some(session) = self.session.as_mut() {
            session.rewind();
        }
        self.overview_panels = [false; OVERVIEW_PANEL_COUNT];
        if let Some(slot) = self.overview_panels.get_mut(panel) {
            *slot = true;
        }
        self.transitions
            .play(Region::Overview, Transition::SeparateIn);
        tracing::debug!(panel, "overview opened");
    }

    /// Close the overview overlay, dropping the session, clearing the
    /// coordinator's debug visualization, and resetting the camera.
    pub fn close_overview_window(&mut self) {
        self.state.set_overview_active(false);
        self.session = None;
        self.fleet.clear_debug_visualization();
        self.camera.reset_focus();
        self.transitions
            .play(Region::Overview, Transition::SeparateOut);
        tracing::debug!("overview closed");
    }

    /// Step the walkthrough and refocus the camera on the waypoint arrived
    /// at. Steps past either end clamp silently.
    pub fn navigate_overview(&mut self, direction: Direction) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Some(point) = session.advance(direction) {
            self.camera.focus_on(FocusTarget::Waypoint(point));
        }
    }

    // ---- selection overlay ----

    /// Toggle the selection overlay. Deliberately not gated by the main
    /// window state, unlike [`open_window`]; the picker must stay reachable
    /// while the console itself is closed.
    ///
    /// [`open_window`]: FleetConsole::open_window
    pub fn call_selection_window(&mut self, active: bool) {
        let transition = if active {
            Transition::FadeIn
        } else {
            Transition::FadeOut
        };
        self.transitions.play(Region::Selection, transition);
        self.state.set_selection_active(active);
    }

    /// One-shot modal pick: focus the camera on the drone and dismiss the
    /// picker. The dismissal is unconditional, so selecting while the
    /// overlay is already closed is idempotent.
    pub fn select_drone(&mut self, id: &str) {
        if let Some(handle) = self.fleet.entity_handle(id) {
            self.camera.focus_on(FocusTarget::Entity(handle));
        } else {
            tracing::warn!(id, "selected drone has no entity handle");
        }
        self.call_selection_window(false);
        self.selected_drone = Some(id.to_string());
    }

    // ---- formation command ----

    /// Validate the count field against the grammar and the live fleet
    /// capacity. Republishes the fleet-summary header on every invocation
    /// regardless of outcome.
    pub fn check_count(&mut self) -> Option<i64> {
        self.refresh_header();
        let count = match parse::parse_count(&self.count_text) {
            Ok(count) => count,
            Err(err) => {
                self.check_result = err.to_string();
                self.report(err);
                return None;
            }
        };
        if count <= self.fleet.available_count() {
            self.check_result = "ready to dispatch".to_string();
            Some(count)
        } else {
            let err = CommandError::InsufficientCapacity;
            self.check_result = err.to_string();
            self.report(err);
            None
        }
    }

    /// Validate the path field and ask the coordinator for a preview. The
    /// request itself changes no visible state; the overlay opens only when
    /// [`on_preview_result`] resolves successfully.
    ///
    /// [`on_preview_result`]: FleetConsole::on_preview_result
    pub fn request_overview(&mut self) {
        let Some(waypoints) = self.validated_route() else {
            return;
        };
        self.set_pending(PendingRequest::Preview {
            waypoints: waypoints.clone(),
        });
        self.fleet.request_preview(&waypoints);
    }

    /// Resolve an outstanding preview request. Success opens the overview
    /// seeded with the validated waypoints; failure leaves every prior
    /// state untouched.
    pub fn on_preview_result(&mut self, success: bool) {
        let Some(PendingRequest::Preview { .. }) = self.pending.as_ref() else {
            tracing::debug!(success, "preview result with no matching pending request");
            return;
        };
        let Some(PendingRequest::Preview { waypoints }) = self.pending.take() else {
            return;
        };
        if !success {
            self.report(CommandError::PreviewFailed);
            return;
        }
        // len >= 2 was validated before the request went out
        self.session = OverviewSession::new(waypoints);
        if self.session.is_none() {
            tracing::warn!("preview resolved with an unusable route");
            return;
        }
        self.open_overview_window(0);
    }

    /// Validate both fields and ask the coordinator to build the formation.
    pub fn request_build(&mut self) {
        let Some(count) = self.check_count() else {
            return;
        };
        let Some(waypoints) = self.validated_route() else {
            return;
        };
        self.set_pending(PendingRequest::Build {
            count,
            waypoints: waypoints.clone(),
        });
        self.fleet.request_build(count, &waypoints);
    }

    /// Resolve an outstanding build request. Success clears the draft and
    /// jumps to the formation list page; failure leaves the draft
    /// re-enterable and everything else unchanged.
    pub fn on_build_result(&mut self, success: bool) {
        let Some(PendingRequest::Build { .. }) = self.pending.as_ref() else {
            tracing::debug!(success, "build result with no matching pending request");
            return;
        };
        self.pending = None;
        if !success {
            self.report(CommandError::BuildFailed);
            return;
        }
        self.status_log = "[formation build succeeded]".to_string();
        self.count_text.clear();
        self.path_text.clear();
        self.call_window(PAGE_FORMATIONS);
    }

    /// Forward a formation-list dispatch action to the coordinator.
    pub fn dispatch_formation(&mut self, index: usize) {
        self.fleet.dispatch(index);
    }

    fn validated_route(&mut self) -> Option<Vec<crate::geometry::Point3>> {
        let waypoints = match parse::parse_waypoints(&self.path_text) {
            Ok(waypoints) => waypoints,
            Err(err) => {
                self.report(err);
                return None;
            }
        };
        if waypoints.len() < 2 {
            self.report(CommandError::InsufficientWaypoints);
            return None;
        }
        Some(waypoints)
    }

    fn set_pending(&mut self, request: PendingRequest) {
        if let Some(previous) = self.pending.replace(request) {
            // The contract forbids re-issuing before resolution; surface it
            // instead of enforcing it.
            tracing::warn!(?previous, "pending fleet request replaced before resolving");
        }
    }

    fn report(&mut self, err: CommandError) {
        self.status_log = err.detail().to_string();
        tracing::debug!(%err, "command rejected");
    }

    fn refresh_header(&mut self) {
        self.header_text = format!(
            "drone fleet [online: {} | working: {} | total: {}]",
            self.fleet.available_count(),
            self.fleet.working_count(),
            self.fleet.total_count()
        );
    }

    // ---- alerts & time ----

    /// Publish a transient alert, replacing any live one.
    pub fn show_alert(&mut self, text: impl Into<String>) {
        self.alert.show(text, &mut self.transitions);
    }

    /// Advance time-driven behavior (the alert hold deadline). Call from
    /// the host loop's idle tick.
    pub fn tick(&mut self) {
        self.alert.tick(&mut self.transitions);
    }

    // ---- input ----

    /// Route one key press through the default bindings. Returns true when
    /// the key mapped to a console action. `Quit` is the exception: it
    /// returns false so the host loop sees the key and decides how to exit.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        let Some(action) = self.bindings.action_for_key(key) else {
            return false;
        };
        match action {
            Action::ToggleConsole => self.open_window(!self.state.main_open()),
            Action::ToggleSelection => {
                self.call_selection_window(!self.state.selection_active())
            }
            Action::CloseOverview => {
                if self.state.overview_active() {
                    self.close_overview_window();
                }
            }
            Action::OverviewNext => self.navigate_overview(Direction::Next),
            Action::OverviewPrev => self.navigate_overview(Direction::Prev),
            Action::PageStatus => self.call_window(PAGE_STATUS),
            Action::PageEvents => self.call_window(PAGE_EVENTS),
            Action::PageCommand => self.call_window(PAGE_COMMAND),
            Action::PageFormations => self.call_window(PAGE_FORMATIONS),
            Action::Quit => return false,
        }
        true
    }

    // ---- published state & collaborator access ----

    pub fn state(&self) -> ConsoleState {
        self.state
    }

    pub fn interacting(&self) -> bool {
        self.state.interacting()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn overview_panels(&self) -> &[bool; OVERVIEW_PANEL_COUNT] {
        &self.overview_panels
    }

    pub fn session(&self) -> Option<&OverviewSession> {
        self.session.as_ref()
    }

    pub fn pending(&self) -> Option<&PendingRequest> {
        self.pending.as_ref()
    }

    pub fn header_text(&self) -> &str {
        &self.header_text
    }

    pub fn status_log(&self) -> &str {
        &self.status_log
    }

    pub fn check_result(&self) -> &str {
        &self.check_result
    }

    pub fn count_text(&self) -> &str {
        &self.count_text
    }

    pub fn set_count_text(&mut self, text: impl Into<String>) {
        self.count_text = text.into();
    }

    pub fn path_text(&self) -> &str {
        &self.path_text
    }

    pub fn set_path_text(&mut self, text: impl Into<String>) {
        self.path_text = text.into();
    }

    pub fn selected_drone(&self) -> Option<&str> {
        self.selected_drone.as_deref()
    }

    pub fn alert(&self) -> &AlertNotifier {
        &self.alert
    }

    pub fn roster(&self) -> &SelectionRoster {
        &self.roster
    }

    pub fn lists(&self) -> &ListSync {
        &self.lists
    }

    pub fn fleet(&self) -> &F {
        &self.fleet
    }

    pub fn fleet_mut(&mut self) -> &mut F {
        &mut self.fleet
    }

    pub fn camera(&self) -> &C {
        &self.camera
    }

    pub fn transitions(&self) -> &T {
        &self.transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::EntityHandle;
    use crate::fleet::{FleetEvent, FormationSummary};
    use crate::geometry::Point3;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[derive(Default)]
    struct FakeFleet {
        available: i64,
        working: i64,
        ids: Vec<String>,
        labels: Vec<(String, String)>,
        events: Vec<FleetEvent>,
        formations: Vec<FormationSummary>,
        preview_requests: Vec<Vec<Point3>>,
        build_requests: Vec<(i64, Vec<Point3>)>,
        dispatched: Vec<usize>,
        cleared_debug: usize,
    }

    impl FleetCoordinator for FakeFleet {
        fn available_count(&self) -> i64 {
            self.available
        }
        fn working_count(&self) -> i64 {
            self.working
        }
        fn total_count(&self) -> i64 {
            self.ids.len() as i64
        }
        fn drone_ids(&self) -> Vec<String> {
            self.ids.clone()
        }
        fn formation_label(&self, id: &str) -> String {
            self.labels
                .iter()
                .find(|(drone, _)| drone == id)
                .map(|(_, label)| label.clone())
                .unwrap_or_default()
        }
        fn entity_handle(&self, id: &str) -> Option<EntityHandle> {
            self.ids
                .iter()
                .any(|known| known == id)
                .then(|| EntityHandle(id.to_string()))
        }
        fn events(&self) -> Vec<FleetEvent> {
            self.events.clone()
        }
        fn formations(&self) -> Vec<FormationSummary> {
            self.formations.clone()
        }
        fn request_preview(&mut self, waypoints: &[Point3]) {
            self.preview_requests.push(waypoints.to_vec());
        }
        fn request_build(&mut self, count: i64, waypoints: &[Point3]) {
            self.build_requests.push((count, waypoints.to_vec()));
        }
        fn dispatch(&mut self, index: usize) {
            self.dispatched.push(index);
        }
        fn clear_debug_visualization(&mut self) {
            self.cleared_debug += 1;
        }
    }

    #[derive(Default)]
    struct FakeCamera {
        focuses: Vec<FocusTarget>,
        resets: usize,
    }

    impl CameraRig for FakeCamera {
        fn focus_on(&mut self, target: FocusTarget) {
            self.focuses.push(target);
        }
        fn reset_focus(&mut self) {
            self.resets += 1;
        }
    }

    #[derive(Default)]
    struct Recorder {
        plays: Vec<(Region, Transition)>,
    }

    impl TransitionDriver for Recorder {
        fn play(&mut self, region: Region, transition: Transition) {
            self.plays.push((region, transition));
        }
    }

    type TestConsole = FleetConsole<FakeFleet, FakeCamera, Recorder>;

    fn console() -> TestConsole {
        console_with(FakeFleet {
            available: 10,
            ..FakeFleet::default()
        })
    }

    fn console_with(fleet: FakeFleet) -> TestConsole {
        FleetConsole::new(fleet, FakeCamera::default(), Recorder::default())
    }

    fn plays_of(console: &TestConsole, wanted: Transition) -> usize {
        console
            .transitions()
            .plays
            .iter()
            .filter(|(_, t)| *t == wanted)
            .count()
    }

    #[test]
    fn open_window_refused_while_overview_active() {
        let mut console = console();
        console.open_window(true);
        console.open_overview_window(0);
        assert!(console.state().overview_active());
        let before = console.state().main_open();
        console.open_window(false);
        assert_eq!(console.state().main_open(), before);
        // no outro played for the refused toggle
        assert_eq!(plays_of(&console, Transition::Outro), 0);
    }

    #[test]
    fn open_window_refused_while_selection_active() {
        let mut console = console();
        console.call_selection_window(true);
        console.open_window(true);
        assert!(!console.state().main_open());
    }

    #[test]
    fn selection_toggle_is_never_gated() {
        let mut console = console();
        // main window closed, overview open: selection still toggles
        console.open_overview_window(0);
        console.call_selection_window(true);
        assert!(console.state().selection_active());
        console.call_selection_window(false);
        assert!(!console.state().selection_active());
    }

    #[test]
    fn duplicate_call_window_plays_one_intro() {
        let mut console = console();
        console.call_window(PAGE_COMMAND);
        console.call_window(PAGE_COMMAND);
        let intros = console
            .transitions()
            .plays
            .iter()
            .filter(|(r, t)| *r == Region::Page(PAGE_COMMAND) && *t == Transition::PageIntro)
            .count();
        assert_eq!(intros, 1);
        assert_eq!(console.current_page(), PAGE_COMMAND);
        assert_eq!(console.status_log(), IDLE_LOG);
    }

    #[test]
    fn page_switch_plays_outro_on_previous() {
        let mut console = console();
        console.call_window(PAGE_EVENTS);
        console.call_window(PAGE_FORMATIONS);
        assert!(console.transitions().plays.contains(&(
            Region::Page(PAGE_EVENTS),
            Transition::PageOutro
        )));
    }

    #[test]
    fn check_count_republishes_header_even_on_failure() {
        let mut console = console();
        console.fleet_mut().available = 4;
        console.set_count_text("not a number");
        assert_eq!(console.check_count(), None);
        assert!(console.header_text().contains("online: 4"));
        assert_eq!(console.check_result(), "input error");
    }

    #[test]
    fn check_count_distinguishes_format_from_capacity() {
        let mut console = console();
        console.set_count_text("oops");
        assert_eq!(console.check_count(), None);
        assert_eq!(
            console.status_log(),
            CommandError::InvalidFormat.detail()
        );
        console.set_count_text("11");
        assert_eq!(console.check_count(), None);
        assert_eq!(
            console.status_log(),
            CommandError::InsufficientCapacity.detail()
        );
        console.set_count_text("10");
        assert_eq!(console.check_count(), Some(10));
        assert_eq!(console.check_result(), "ready to dispatch");
    }

    #[test]
    fn preview_success_opens_seeded_overview() {
        let mut console = console();
        console.set_path_text("0,0,0;1,1,1;2,2,2");
        console.request_overview();
        // the request alone changes nothing visible
        assert!(!console.state().overview_active());
        assert_eq!(console.fleet().preview_requests.len(), 1);

        console.on_preview_result(true);
        assert!(console.state().overview_active());
        let session = console.session().unwrap();
        assert_eq!(session.len(), 3);
        assert_eq!(session.index(), 0);
        assert_eq!(console.overview_panels(), &[true, false]);
        assert!(console
            .transitions()
            .plays
            .contains(&(Region::Overview, Transition::SeparateIn)));
    }

    #[test]
    fn preview_failure_leaves_state_unchanged() {
        let mut console = console();
        console.set_path_text("0,0,0;1,1,1");
        console.request_overview();
        console.on_preview_result(false);
        assert!(!console.state().overview_active());
        assert!(console.session().is_none());
        assert!(console.pending().is_none());
        assert_eq!(console.status_log(), CommandError::PreviewFailed.detail());
    }

    #[test]
    fn short_route_is_rejected_before_any_request() {
        let mut console = console();
        console.set_path_text("1,1,1");
        console.request_overview();
        assert!(console.fleet().preview_requests.is_empty());
        assert!(console.pending().is_none());
        assert_eq!(
            console.status_log(),
            CommandError::InsufficientWaypoints.detail()
        );
    }

    #[test]
    fn malformed_route_is_rejected_whole() {
        let mut console = console();
        console.set_path_text("1,1;2,2,2");
        console.request_overview();
        assert!(console.fleet().preview_requests.is_empty());
        assert_eq!(console.status_log(), CommandError::MalformedPath.detail());
    }

    #[test]
    fn navigation_clamps_and_drives_the_camera() {
        let mut console = console();
        console.set_path_text("0,0,0;1,1,1;2,2,2");
        console.request_overview();
        console.on_preview_result(true);

        console.navigate_overview(Direction::Prev);
        assert_eq!(console.session().unwrap().index(), 0);
        console.navigate_overview(Direction::Next);
        console.navigate_overview(Direction::Next);
        console.navigate_overview(Direction::Next);
        assert_eq!(console.session().unwrap().index(), 2);
        // only the two real moves refocused the camera
        assert_eq!(console.camera().focuses.len(), 2);
        assert_eq!(
            console.camera().focuses[1],
            FocusTarget::Waypoint(Point3::new(2.0, 2.0, 2.0))
        );
    }

    #[test]
    fn closing_overview_resets_camera_and_debug_lines() {
        let mut console = console();
        console.set_path_text("0,0,0;1,1,1");
        console.request_overview();
        console.on_preview_result(true);
        console.close_overview_window();
        assert!(!console.state().overview_active());
        assert!(console.session().is_none());
        assert_eq!(console.fleet().cleared_debug, 1);
        assert_eq!(console.camera().resets, 1);
        assert!(console
            .transitions()
            .plays
            .contains(&(Region::Overview, Transition::SeparateOut)));
    }

    #[test]
    fn build_success_clears_draft_and_jumps_to_formations() {
        let mut console = console();
        console.set_count_text("3");
        console.set_path_text("0,0,0;5,5,5");
        console.request_build();
        assert_eq!(console.fleet().build_requests.len(), 1);
        assert_eq!(console.fleet().build_requests[0].0, 3);

        console.on_build_result(true);
        assert_eq!(console.count_text(), "");
        assert_eq!(console.path_text(), "");
        assert_eq!(console.current_page(), PAGE_FORMATIONS);
        assert_eq!(console.status_log(), "[formation build succeeded]");
    }

    #[test]
    fn build_failure_keeps_the_draft_re_enterable() {
        let mut console = console();
        console.set_count_text("3");
        console.set_path_text("0,0,0;5,5,5");
        console.request_build();
        console.on_build_result(false);
        assert_eq!(console.count_text(), "3");
        assert_eq!(console.path_text(), "0,0,0;5,5,5");
        assert_eq!(console.current_page(), PAGE_STATUS);
        assert_eq!(console.status_log(), CommandError::BuildFailed.detail());
    }

    #[test]
    fn build_is_not_requested_when_count_invalid() {
        let mut console = console();
        console.set_count_text("zz");
        console.set_path_text("0,0,0;5,5,5");
        console.request_build();
        assert!(console.fleet().build_requests.is_empty());
        assert!(console.pending().is_none());
    }

    #[test]
    fn stale_results_are_ignored() {
        let mut console = console();
        console.on_preview_result(true);
        console.on_build_result(true);
        assert!(!console.state().overview_active());
        assert_eq!(console.current_page(), PAGE_STATUS);
    }

    #[test]
    fn mismatched_result_kind_leaves_the_pending_request_intact() {
        let mut console = console();
        console.set_path_text("0,0,0;1,1,1");
        console.request_overview();

        // a stray build result must not consume the pending preview
        console.on_build_result(false);
        assert!(matches!(
            console.pending(),
            Some(PendingRequest::Preview { .. })
        ));
        console.on_preview_result(true);
        assert!(console.state().overview_active());
        console.close_overview_window();

        // and the other way around
        console.set_count_text("2");
        console.request_build();
        console.on_preview_result(true);
        assert!(matches!(
            console.pending(),
            Some(PendingRequest::Build { .. })
        ));
        assert!(!console.state().overview_active());
        console.on_build_result(true);
        assert_eq!(console.current_page(), PAGE_FORMATIONS);
    }

    #[test]
    fn select_drone_focuses_and_always_dismisses() {
        let mut console = console_with(FakeFleet {
            available: 2,
            ids: vec!["d1".into(), "d2".into()],
            ..FakeFleet::default()
        });
        console.call_selection_window(true);
        console.select_drone("d2");
        assert!(!console.state().selection_active());
        assert_eq!(console.selected_drone(), Some("d2"));
        assert_eq!(
            console.camera().focuses.last(),
            Some(&FocusTarget::Entity(EntityHandle("d2".into())))
        );
        // selecting with the overlay already closed still records and closes
        console.select_drone("d1");
        assert!(!console.state().selection_active());
        assert_eq!(console.selected_drone(), Some("d1"));
    }

    #[test]
    fn notifications_only_land_while_attached() {
        let mut console = console_with(FakeFleet {
            available: 1,
            events: vec![FleetEvent {
                drone_id: "d1".into(),
                message: "armed".into(),
            }],
            ..FakeFleet::default()
        });
        console.handle_notification(FleetNotification::EventsChanged);
        assert!(console.lists().events().is_empty());
        console.attach();
        console.handle_notification(FleetNotification::EventsChanged);
        assert_eq!(console.lists().events().len(), 1);
        console.detach();
        console.fleet_mut().events.clear();
        console.handle_notification(FleetNotification::EventsChanged);
        // stale snapshot stays; the detached console did not react
        assert_eq!(console.lists().events().len(), 1);
    }

    #[test]
    fn formations_notification_rebuilds_roster_with_fresh_labels() {
        let mut console = console_with(FakeFleet {
            available: 2,
            ids: vec!["d1".into(), "d2".into()],
            labels: vec![("d1".into(), "alpha".into())],
            formations: vec![FormationSummary {
                name: "alpha".into(),
                drone_count: 1,
            }],
            ..FakeFleet::default()
        });
        console.attach();
        console.handle_notification(FleetNotification::FormationsChanged);
        assert_eq!(console.lists().formations().len(), 1);
        let entries = console.roster().entries();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].highlighted);
        assert_eq!(entries[0].label, "alpha");
        assert!(!entries[1].highlighted);
    }

    #[test]
    fn esc_and_tab_keys_route_to_the_toggles() {
        let mut console = console();
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert!(console.handle_key(&esc));
        assert!(console.state().main_open());
        assert!(console.handle_key(&tab));
        assert!(console.state().selection_active());
        // Esc is now refused by the selection overlay, but still handled
        assert!(console.handle_key(&esc));
        assert!(console.state().main_open());
    }

    #[test]
    fn quit_key_is_left_to_the_host() {
        let mut console = console();
        let quit = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(!console.handle_key(&quit));
        assert!(!console.state().main_open());
    }

    #[test]
    fn dispatch_forwards_the_index() {
        let mut console = console();
        console.dispatch_formation(2);
        assert_eq!(console.fleet().dispatched, vec![2]);
    }

    #[test]
    fn initialize_seeds_both_lists() {
        let mut console = console_with(FakeFleet {
            available: 1,
            ids: vec!["d1".into()],
            events: vec![FleetEvent {
                drone_id: "d1".into(),
                message: "online".into(),
            }],
            ..FakeFleet::default()
        });
        console.initialize();
        assert_eq!(console.lists().events().len(), 1);
        assert!(console.lists().formations_placeholder());
        assert_eq!(console.roster().entries().len(), 1);
    }
}
