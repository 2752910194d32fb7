//! Custom mutation dialog reconstruction.
//!
//! The replay has no "mutator selected" event. What it does record are the
//! dialog control clicks of the host before the match starts, so the dialog
//! is replayed as a small state machine: the visible panel of the mutator
//! grid and the list of selected mutators.
//!
//! ## Control ids
//!
//! - `41..=83` - mutator button on the visible panel (3 ids per button)
//! - `123` / `124` - previous / next panel
//! - `88..=106` - remove a row from the selected list (2 ids per row)

use tracing::debug;

use crate::catalog::{MutatorCatalog, Panel};
use crate::config::dialog::{
    NEXT_PANEL, PREVIOUS_PANEL, REMOVE_BUTTONS, REMOVE_STRIDE, SELECT_BUTTONS, SELECT_STRIDE,
};
use crate::error::{Error, Result};
use crate::event::{EventKind, ReplayEvent};
use crate::resolve::Anomaly;

/// User id of the recording player.
const HOST_USER_ID: i64 = 0;

/// A dialog interaction derived from a control id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    /// Mutator button at `slot` of the visible panel
    Select { slot: usize },
    PreviousPanel,
    NextPanel,
    /// Remove row `index` of the selected list
    Remove { index: usize },
}

impl DialogAction {
    /// Returns `None` for controls that do not affect the mutator selection.
    pub fn from_control_id(control_id: i64) -> Option<Self> {
        match control_id {
            id if SELECT_BUTTONS.contains(&id) => Some(Self::Select {
                slot: ((id - SELECT_BUTTONS.start()) / SELECT_STRIDE) as usize,
            }),
            PREVIOUS_PANEL => Some(Self::PreviousPanel),
            NEXT_PANEL => Some(Self::NextPanel),
            id if REMOVE_BUTTONS.contains(&id) => Some(Self::Remove {
                index: ((id - REMOVE_BUTTONS.start()) / REMOVE_STRIDE) as usize,
            }),
            _ => None,
        }
    }
}

/// State of the custom mutation dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogState {
    panel: Panel,
    selected: Vec<String>,
}

impl DialogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn into_selected(self) -> Vec<String> {
        self.selected
    }

    /// Apply one action.
    ///
    /// On error the state is left unchanged.
    pub fn step(&mut self, action: DialogAction, catalog: &MutatorCatalog) -> Result<()> {
        match action {
            DialogAction::Select { slot } => {
                let index = slot + self.panel.offset();
                let mutator = catalog.get(index).ok_or(Error::CatalogIndexOutOfRange {
                    index,
                    len: catalog.len(),
                })?;
                debug!("Selected {} (panel {}, slot {})", mutator, self.panel, slot);
                self.selected.push(mutator.to_string());
            }
            DialogAction::PreviousPanel => self.panel = self.panel.previous(),
            DialogAction::NextPanel => self.panel = self.panel.next(),
            DialogAction::Remove { index } => {
                if index >= self.selected.len() {
                    return Err(Error::RemovalOutOfRange {
                        index,
                        len: self.selected.len(),
                    });
                }
                let removed = self.selected.remove(index);
                debug!("Removed {} (row {})", removed, index);
            }
        }
        Ok(())
    }
}

/// Dialog control clicks of the host made before the match started.
///
/// Scanning stops at the first cutscene bookmark; clicks at game loop 0 and
/// clicks by other users are ignored.
pub(crate) fn host_controls<'a>(
    events: &'a [ReplayEvent],
    anomalies: &mut Vec<Anomaly>,
) -> Vec<(&'a ReplayEvent, i64)> {
    let mut controls = Vec::new();

    for event in events {
        match event.kind() {
            Some(EventKind::DialogControl) if event.gameloop > 0 => match event.user_id() {
                Some(HOST_USER_ID) => match event.control_id() {
                    Ok(control_id) => controls.push((event, control_id)),
                    Err(e) => Anomaly::from_error(event, &e).record(anomalies),
                },
                Some(_) => {}
                None => Anomaly::new(event, "missing _userid").record(anomalies),
            },
            Some(EventKind::CutsceneBookmarkFired) => {
                debug!("Match started at loop {}", event.gameloop);
                break;
            }
            _ => {}
        }
    }

    controls
}

/// Replay the host's dialog clicks and return the final selection.
pub(crate) fn detect(
    events: &[ReplayEvent],
    catalog: &MutatorCatalog,
    anomalies: &mut Vec<Anomaly>,
) -> Vec<String> {
    let mut state = DialogState::new();

    for (event, control_id) in host_controls(events, anomalies) {
        let Some(action) = DialogAction::from_control_id(control_id) else {
            continue;
        };
        if let Err(e) = state.step(action, catalog) {
            Anomaly::from_error(event, &e).record(anomalies);
        }
    }

    state.into_selected()
}
