use serde::Serialize;

use crate::config::dialog::{BUTTONS_PER_PANEL, PANEL_COUNT, SELECT_BUTTONS, SELECT_STRIDE};

/// Visible page of the mutator grid, always within `1..=PANEL_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Panel(u8);

impl Panel {
    pub const FIRST: Self = Self(1);
    pub const LAST: Self = Self(PANEL_COUNT);

    pub fn new(number: u8) -> Option<Self> {
        (1..=PANEL_COUNT).contains(&number).then_some(Self(number))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// Panel to the left, staying on the first panel
    pub fn previous(self) -> Self {
        if self.0 > 1 { Self(self.0 - 1) } else { self }
    }

    /// Panel to the right, staying on the last panel
    pub fn next(self) -> Self {
        if self.0 < PANEL_COUNT {
            Self(self.0 + 1)
        } else {
            self
        }
    }

    /// Catalog index of the first button on this panel
    pub fn offset(self) -> usize {
        (self.0 as usize - 1) * BUTTONS_PER_PANEL
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::FIRST
    }
}

impl std::fmt::Display for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a catalog entry sits in the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ButtonPosition {
    pub panel: Panel,
    /// Zero-based slot within the panel
    pub slot: usize,
    /// UI control id sent when the button is clicked
    pub control_id: i64,
}

impl ButtonPosition {
    /// Position of the catalog entry at `index`, if the grid has room for it
    pub fn for_index(index: usize) -> Option<Self> {
        let panel = Panel::new(u8::try_from(index / BUTTONS_PER_PANEL + 1).ok()?)?;
        let slot = index % BUTTONS_PER_PANEL;
        Some(Self {
            panel,
            slot,
            control_id: SELECT_BUTTONS.start() + slot as i64 * SELECT_STRIDE,
        })
    }
}
