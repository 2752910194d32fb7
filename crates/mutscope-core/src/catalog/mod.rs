//! Mutator reference data.
//!
//! This module contains the static tables the resolver works against:
//! - `MutatorCatalog` - dialog-ordered mutators offered in custom mutation
//! - `UpgradeIdTable` - tracker upgrade keys mapped to mutator names
//! - `MutatorTables` - both tables, embedded or loaded from a tables file
//! - `Panel`, `ButtonPosition` - dialog grid coordinates

mod mutator_catalog;
mod panel;
mod registry;
mod tables;
mod upgrade_ids;

pub use mutator_catalog::*;
pub use panel::*;
pub use registry::*;
pub use tables::*;
pub use upgrade_ids::*;
