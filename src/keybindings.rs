use std::collections::HashMap;
use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    /// Toggle the main console window (refused while an overlay is active).
    ToggleConsole,
    /// Toggle the drone selection overlay (never gated).
    ToggleSelection,
    CloseOverview,
    OverviewNext,
    OverviewPrev,
    PageStatus,
    PageEvents,
    PageCommand,
    PageFormations,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Quit => "Quit",
            Action::ToggleConsole => "Toggle console window (Esc)",
            Action::ToggleSelection => "Toggle drone selection (Tab)",
            Action::CloseOverview => "Close overview",
            Action::OverviewNext => "Overview next waypoint",
            Action::OverviewPrev => "Overview previous waypoint",
            Action::PageStatus => "Status page",
            Action::PageEvents => "Events page",
            Action::PageCommand => "Formation command page",
            Action::PageFormations => "Formation list page",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.code == self.code && key.modifiers == self.mods
    }
}

#[derive(Debug, Clone)]
pub struct KeyBindings {
    map: HashMap<Action, Vec<KeyCombo>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        use Action::*;
        let mut kb = Self::new();
        kb.add(
            Quit,
            KeyCombo::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        );
        kb.add(
            ToggleConsole,
            KeyCombo::new(KeyCode::Esc, KeyModifiers::NONE),
        );
        kb.add(
            ToggleSelection,
            KeyCombo::new(KeyCode::Tab, KeyModifiers::NONE),
        );
        kb.add(
            CloseOverview,
            KeyCombo::new(KeyCode::Backspace, KeyModifiers::NONE),
        );
        kb.add(
            OverviewNext,
            KeyCombo::new(KeyCode::Right, KeyModifiers::NONE),
        );
        kb.add(
            OverviewNext,
            KeyCombo::new(KeyCode::Char('n'), KeyModifiers::NONE),
        );
        kb.add(
            OverviewPrev,
            KeyCombo::new(KeyCode::Left, KeyModifiers::NONE),
        );
        kb.add(
            OverviewPrev,
            KeyCombo::new(KeyCode::Char('p'), KeyModifiers::NONE),
        );
        kb.add(
            PageStatus,
            KeyCombo::new(KeyCode::Char('1'), KeyModifiers::NONE),
        );
        kb.add(
            PageEvents,
            KeyCombo::new(KeyCode::Char('2'), KeyModifiers::NONE),
        );
        kb.add(
            PageCommand,
            KeyCombo::new(KeyCode::Char('3'), KeyModifiers::NONE),
        );
        kb.add(
            PageFormations,
            KeyCombo::new(KeyCode::Char('4'), KeyModifiers::NONE),
        );
        kb
    }
}

impl KeyBindings {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn add(&mut self, action: Action, combo: KeyCombo) {
        self.map.entry(action).or_default().push(combo);
    }

    pub fn matches(&self, action: Action, key: &KeyEvent) -> bool {
        self.map
            .get(&action)
            .is_some_and(|list| list.iter().any(|c| c.matches(key)))
    }

    pub fn action_for_key(&self, key: &KeyEvent) -> Option<Action> {
        for (act, list) in &self.map {
            if list.iter().any(|c| c.matches(key)) {
                return Some(*act);
            }
        }
        None
    }
}
