//! Resolver options and game-client layout constants.
//!
//! This module contains:
//! - `ResolveOptions` - which detection strategies to run
//! - Layout constants of the custom mutation dialog
//! - Event tags and upgrade name markers used by the resolver

mod options;

pub use options::*;

/// Custom mutation dialog layout.
///
/// The mutator grid is split into panels of 15 buttons. Button control ids
/// are spaced 3 apart, starting at 41 for the first slot of the visible panel.
/// The selected list on the right side of the dialog has removal buttons
/// spaced 2 apart, starting at 88.
pub mod dialog {
    use std::ops::RangeInclusive;

    /// Number of mutator panels.
    pub const PANEL_COUNT: u8 = 4;

    /// Buttons per panel.
    pub const BUTTONS_PER_PANEL: usize = 15;

    /// Control ids of the mutator buttons on the visible panel.
    pub const SELECT_BUTTONS: RangeInclusive<i64> = 41..=83;

    /// Spacing between consecutive mutator button ids.
    pub const SELECT_STRIDE: i64 = 3;

    /// Control id of the "previous panel" arrow.
    pub const PREVIOUS_PANEL: i64 = 123;

    /// Control id of the "next panel" arrow.
    pub const NEXT_PANEL: i64 = 124;

    /// Control ids of the removal buttons in the selected list.
    pub const REMOVE_BUTTONS: RangeInclusive<i64> = 88..=106;

    /// Spacing between consecutive removal button ids.
    pub const REMOVE_STRIDE: i64 = 2;
}

/// Tracker upgrade naming.
pub mod upgrade {
    /// Marker contained in the upgrade type name of mutator info upgrades.
    pub const MUTATOR_INFO_MARKER: &str = "mutatorinfo";

    /// Number of leading characters stripped to get the upgrade key.
    pub const KEY_PREFIX_LEN: usize = 12;

    /// Player id whose upgrades carry the mutator info.
    pub const HOST_PLAYER_ID: i64 = 0;
}
