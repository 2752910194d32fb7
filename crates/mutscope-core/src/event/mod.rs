//! Decoded replay events.
//!
//! The resolver consumes the output of an external replay decoder: one
//! dictionary per event with a type tag, a game loop and type-specific
//! fields. This module contains:
//! - `ReplayEvent` - a single decoded event with typed payload accessors
//! - `EventKind` - the event types the resolver reacts to
//! - `load_events`, `parse_events` - readers for JSON and JSON-lines dumps

mod kind;
mod loader;
mod model;

pub use kind::*;
pub use loader::*;
pub use model::*;
