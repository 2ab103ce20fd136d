/// Modal region flags for the console.
///
/// The main window and the two overlays are tracked independently, but the
/// mutual-exclusion rule lives here: `main_open` may only change while no
/// overlay is active. Callers go through the accessors so the rule cannot be
/// bypassed by poking fields.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleState {
    main_open: bool,
    overview_active: bool,
    selection_active: bool,
}

impl ConsoleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn main_open(&self) -> bool {
        self.main_open
    }

    /// Attempt to change the main-window flag. Refused (returns false,
    /// nothing changes) while either overlay is active.
    pub fn set_main_open(&mut self, open: bool) -> bool {
        if self.overview_active || self.selection_active {
            return false;
        }
        self.main_open = open;
        true
    }

    pub fn overview_active(&self) -> bool {
        self.overview_active
    }

    pub fn set_overview_active(&mut self, active: bool) {
        self.overview_active = active;
    }

    pub fn selection_active(&self) -> bool {
        self.selection_active
    }

    pub fn set_selection_active(&mut self, active: bool) {
        self.selection_active = active;
    }

    /// True while the operator is engaged with the console UI.
    ///
    /// The overview walkthrough fully suppresses this, even when the
    /// selection overlay is concurrently active.
    pub fn interacting(&self) -> bool {
        if self.overview_active {
            return false;
        }
        self.main_open || self.selection_active
    }
}
