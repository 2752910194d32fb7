//! Mutator resolution.
//!
//! Two independent detections feed the result:
//! - tracker upgrades announced by mutator maps (`tracker`)
//! - replay of the custom mutation dialog (`dialog`)
//!
//! When both run, tracker results come first and dialog results are
//! appended. The lists are not merged or de-duplicated.

mod dialog;
mod tracker;

pub use dialog::{DialogAction, DialogState};
pub use tracker::upgrade_key;

use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::MutatorTables;
use crate::config::ResolveOptions;
use crate::error::Error;
use crate::event::ReplayEvent;

/// An event skipped during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Anomaly {
    pub gameloop: i64,
    pub event: String,
    pub message: String,
}

impl Anomaly {
    pub fn new(event: &ReplayEvent, message: impl Into<String>) -> Self {
        Self {
            gameloop: event.gameloop,
            event: event.event.clone(),
            message: message.into(),
        }
    }

    pub fn from_error(event: &ReplayEvent, error: &Error) -> Self {
        Self::new(event, error.to_string())
    }

    /// Log the skipped event and add it to `anomalies`
    pub(crate) fn record(self, anomalies: &mut Vec<Anomaly>) {
        warn!(
            "Skipping {} at loop {}: {}",
            self.event, self.gameloop, self.message
        );
        anomalies.push(self);
    }
}

/// Mutators found in a replay along with the events that had to be skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub mutators: Vec<String>,
    pub anomalies: Vec<Anomaly>,
}

impl Resolution {
    pub fn is_clean(&self) -> bool {
        self.anomalies.is_empty()
    }
}

/// Resolves mutators against a set of tables.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    tables: &'a MutatorTables,
}

impl<'a> Resolver<'a> {
    pub fn new(tables: &'a MutatorTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &'a MutatorTables {
        self.tables
    }

    /// Resolve the mutators of one replay.
    ///
    /// `events` must be in replay order. Malformed events are skipped and
    /// reported in [`Resolution::anomalies`].
    pub fn resolve(&self, events: &[ReplayEvent], options: ResolveOptions) -> Resolution {
        let mut anomalies = Vec::new();
        let mut mutators = Vec::new();

        if options.tracker_upgrades {
            mutators.extend(tracker::detect(
                events,
                self.tables.upgrade_ids(),
                &mut anomalies,
            ));
        }

        if options.custom_mutation_ui {
            mutators.extend(dialog::detect(
                events,
                self.tables.catalog(),
                &mut anomalies,
            ));
        }

        debug!(
            "Resolved {} mutators from {} events ({} skipped)",
            mutators.len(),
            events.len(),
            anomalies.len()
        );

        Resolution {
            mutators,
            anomalies,
        }
    }
}

impl Default for Resolver<'static> {
    fn default() -> Self {
        Self::new(MutatorTables::standard())
    }
}

/// Resolve mutators with the embedded tables.
pub fn resolve(events: &[ReplayEvent], options: ResolveOptions) -> Vec<String> {
    Resolver::default().resolve(events, options).mutators
}
