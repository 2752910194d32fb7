//! # mutscope-core
//!
//! Identifies the mutators of a StarCraft II co-op replay from its decoded
//! event stream.
//!
//! This crate provides:
//! - The mutator catalog and upgrade-id tables (embedded, or loaded from file)
//! - A replay event model over decoder output
//! - The resolver: tracker upgrade detection and custom mutation dialog
//!   reconstruction
//! - Console and JSON output formatting
//!
//! ```
//! use mutscope_core::{ReplayEvent, ResolveOptions, resolve};
//!
//! let events = vec![
//!     ReplayEvent::dialog_control(16, 0, 41),
//!     ReplayEvent::cutscene_bookmark(32),
//! ];
//! let mutators = resolve(&events, ResolveOptions::default());
//! assert_eq!(mutators.len(), 1);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod resolve;

// Re-export from catalog module
pub use catalog::{ButtonPosition, MutatorCatalog, MutatorTables, Panel, UpgradeIdTable};

// Re-export from config module
pub use config::ResolveOptions;

// Re-export from error module
pub use error::{Error, Result};

// Re-export from event module
pub use event::{EventKind, ReplayEvent, UserId, load_events, parse_events};

// Re-export from export module
pub use export::{
    ReplayReport, format_catalog_console, format_resolution_console, generate_catalog_json,
    generate_report_json,
};

// Re-export from resolve module
pub use resolve::{Anomaly, DialogAction, DialogState, Resolution, Resolver, resolve, upgrade_key};
