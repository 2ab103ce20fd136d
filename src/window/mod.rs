mod controller;

pub use controller::{
    FleetConsole, IDLE_LOG, OVERVIEW_PANEL_COUNT, PAGE_COMMAND, PAGE_COUNT, PAGE_EVENTS,
    PAGE_FORMATIONS, PAGE_STATUS,
};
