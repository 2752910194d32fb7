//! Output formatting for resolutions and tables.
//!
//! - `console` - coloured, human readable output
//! - `report` - JSON reports

mod console;
mod report;

pub use console::*;
pub use report::*;
