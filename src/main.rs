//! Demo ground-control console.
//!
//! Wires `FleetConsole` to a simulated fleet coordinator that resolves
//! preview/build requests after a fixed number of ticks and emits periodic
//! drone events. Collaborators that the real system would provide (camera
//! rig, view transitions) are stand-ins that log what they are asked to do.
//!
//! Keys: Esc toggles the console, Tab the drone picker, 1-4 switch pages,
//! `v` validates the count, `o` requests a path preview, `g` requests a
//! build, `n`/`p` (or arrows) walk the preview, Backspace closes it,
//! Enter picks the first drone while the picker is open, Ctrl+Q quits.

use std::collections::HashMap;
use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use fleet_console::camera::{CameraRig, FocusTarget};
use fleet_console::fleet::{FleetCoordinator, FleetEvent, FleetNotification, FormationSummary};
use fleet_console::geometry::Point3;
use fleet_console::transitions::{Region, Transition, TransitionDriver};
use fleet_console::window::FleetConsole;
use fleet_console::{EntityHandle, tracing_sub, ui};

#[derive(Debug, Parser)]
#[command(name = "fleet-console", about = "Drone fleet ground-control console demo")]
struct Args {
    /// Number of simulated drones.
    #[arg(long, default_value_t = 12)]
    drones: usize,

    /// Ticks before a preview/build request resolves.
    #[arg(long, default_value_t = 30)]
    resolve_ticks: u32,

    /// Ticks between simulated drone events.
    #[arg(long, default_value_t = 180)]
    event_ticks: u32,

    /// Poll interval per tick, in milliseconds.
    #[arg(long, default_value_t = 16)]
    tick_ms: u64,

    /// Pre-filled drone count field.
    #[arg(long, default_value_t = 3)]
    count: i64,

    /// Pre-filled waypoint path field.
    #[arg(long, default_value = "1,1,1;10,5,10;3,3,3")]
    path: String,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    tracing_sub::init_default();

    let sim = SimFleet::new(args.drones, args.resolve_ticks, args.event_ticks);
    let mut console = FleetConsole::new(sim, LoggingCamera, LoggingTransitions);
    console.initialize();
    console.attach();
    console.set_count_text(args.count.to_string());
    console.set_path_text(args.path.clone());

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(
        &mut terminal,
        &mut console,
        Duration::from_millis(args.tick_ms),
    );

    console.detach();
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

type DemoConsole = FleetConsole<SimFleet, LoggingCamera, LoggingTransitions>;

fn run<B>(
    terminal: &mut Terminal<B>,
    console: &mut DemoConsole,
    poll_interval: Duration,
) -> io::Result<()>
where
    B: ratatui::backend::Backend,
    io::Error: From<B::Error>,
{
    loop {
        for outcome in console.fleet_mut().step() {
            match outcome {
                SimOutcome::PreviewResolved(success) => console.on_preview_result(success),
                SimOutcome::BuildResolved(success) => console.on_build_result(success),
                SimOutcome::Notify(notification) => {
                    if notification == FleetNotification::EventsChanged {
                        let latest = console
                            .fleet()
                            .events()
                            .last()
                            .map(|event| format!("{}: {}", event.drone_id, event.message));
                        if let Some(text) = latest {
                            console.show_alert(text);
                        }
                    }
                    console.handle_notification(notification);
                }
            }
        }
        console.tick();

        terminal.draw(|frame| ui::render(frame, console))?;

        if !event::poll(poll_interval)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(());
        }
        if handle_demo_key(key.code, console) {
            continue;
        }
        console.handle_key(&key);
    }
}

/// Demo-only bindings that drive the command flow without a text editor.
fn handle_demo_key(code: KeyCode, console: &mut DemoConsole) -> bool {
    match code {
        KeyCode::Char('v') => {
            console.check_count();
            true
        }
        KeyCode::Char('o') => {
            console.request_overview();
            true
        }
        KeyCode::Char('g') => {
            console.request_build();
            true
        }
        KeyCode::Enter if console.state().selection_active() => {
            if let Some(id) = console.roster().entries().first().map(|e| e.id.clone()) {
                console.select_drone(&id);
            }
            true
        }
        _ => false,
    }
}

struct LoggingCamera;

impl CameraRig for LoggingCamera {
    fn focus_on(&mut self, target: FocusTarget) {
        tracing::debug!(?target, "camera focus");
    }

    fn reset_focus(&mut self) {
        tracing::debug!("camera reset to default target");
    }
}

struct LoggingTransitions;

impl TransitionDriver for LoggingTransitions {
    fn play(&mut self, region: Region, transition: Transition) {
        tracing::debug!(?region, %transition, "transition");
    }
}

enum SimOutcome {
    PreviewResolved(bool),
    BuildResolved(bool),
    Notify(FleetNotification),
}

/// In-process fleet stand-in. Requests resolve after a fixed number of
/// ticks; drone events fire on a period; builds assign unassigned drones to
/// a fresh group.
struct SimFleet {
    drones: Vec<String>,
    assignments: HashMap<String, String>,
    formations: Vec<FormationSummary>,
    events: Vec<FleetEvent>,
    preview_countdown: Option<u32>,
    build_countdown: Option<(u32, i64)>,
    event_countdown: u32,
    resolve_ticks: u32,
    event_ticks: u32,
    next_group: usize,
    event_seq: usize,
    events_dirty: bool,
}

const MAX_EVENTS: usize = 24;

const EVENT_MESSAGES: [&str; 4] = [
    "battery at 20%",
    "gps lock reacquired",
    "wind gust compensated",
    "payload secured",
];

impl SimFleet {
    fn new(drones: usize, resolve_ticks: u32, event_ticks: u32) -> Self {
        Self {
            drones: (0..drones).map(|i| format!("drone-{i:02}")).collect(),
            assignments: HashMap::new(),
            formations: Vec::new(),
            events: Vec::new(),
            preview_countdown: None,
            build_countdown: None,
            event_countdown: event_ticks,
            resolve_ticks,
            event_ticks,
            next_group: 1,
            event_seq: 0,
            events_dirty: false,
        }
    }

    fn step(&mut self) -> Vec<SimOutcome> {
        let mut outcomes = Vec::new();

        if let Some(ticks) = self.preview_countdown.as_mut() {
            if *ticks == 0 {
                self.preview_countdown = None;
                outcomes.push(SimOutcome::PreviewResolved(true));
            } else {
                *ticks -= 1;
            }
        }

        if let Some((ticks, count)) = self.build_countdown.as_mut() {
            if *ticks == 0 {
                let count = *count;
                self.build_countdown = None;
                let success = self.form_group(count);
                outcomes.push(SimOutcome::BuildResolved(success));
                if success {
                    outcomes.push(SimOutcome::Notify(FleetNotification::FormationsChanged));
                }
            } else {
                *ticks -= 1;
            }
        }

        if self.event_countdown == 0 {
            self.event_countdown = self.event_ticks;
            self.push_event();
        } else {
            self.event_countdown -= 1;
        }

        if self.events_dirty {
            self.events_dirty = false;
            outcomes.push(SimOutcome::Notify(FleetNotification::EventsChanged));
        }

        outcomes
    }

    fn form_group(&mut self, count: i64) -> bool {
        let wanted = count.max(0) as usize;
        let free: Vec<String> = self
            .drones
            .iter()
            .filter(|id| !self.assignments.contains_key(*id))
            .take(wanted)
            .cloned()
            .collect();
        if free.len() < wanted {
            return false;
        }
        let name = format!("group-{}", self.next_group);
        self.next_group += 1;
        for id in &free {
            self.assignments.insert(id.clone(), name.clone());
        }
        self.formations.push(FormationSummary {
            name,
            drone_count: free.len(),
        });
        true
    }

    fn push_event(&mut self) {
        if self.drones.is_empty() {
            return;
        }
        let drone = self.drones[self.event_seq % self.drones.len()].clone();
        let message = EVENT_MESSAGES[self.event_seq % EVENT_MESSAGES.len()].to_string();
        self.event_seq += 1;
        self.events.push(FleetEvent {
            drone_id: drone,
            message,
        });
        if self.events.len() > MAX_EVENTS {
            self.events.remove(0);
        }
        self.events_dirty = true;
    }
}

impl FleetCoordinator for SimFleet {
    fn available_count(&self) -> i64 {
        (self.drones.len() - self.assignments.len()) as i64
    }

    fn working_count(&self) -> i64 {
        self.assignments.len() as i64
    }

    fn total_count(&self) -> i64 {
        self.drones.len() as i64
    }

    fn drone_ids(&self) -> Vec<String> {
        self.drones.clone()
    }

    fn formation_label(&self, id: &str) -> String {
        self.assignments.get(id).cloned().unwrap_or_default()
    }

    fn entity_handle(&self, id: &str) -> Option<EntityHandle> {
        self.drones
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
        tracing::debug!(len = waypoints.len(), "sim preview requested");
        self.preview_countdown = Some(self.resolve_ticks);
    }

    fn request_build(&mut self, count: i64, waypoints: &[Point3]) {
        tracing::debug!(count, len = waypoints.len(), "sim build requested");
        self.build_countdown = Some((self.resolve_ticks, count));
    }

    fn dispatch(&mut self, index: usize) {
        if let Some(group) = self.formations.get(index) {
            let name = group.name.clone();
            self.events.push(FleetEvent {
                drone_id: name.clone(),
                message: "formation dispatched".to_string(),
            });
            self.events_dirty = true;
            tracing::debug!(index, name, "sim formation dispatched");
        }
    }

    fn clear_debug_visualization(&mut self) {
        tracing::debug!("sim debug path visualization cleared");
    }
}
