//! CLI argument definitions for mutscope.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use mutscope_core::ResolveOptions;

#[derive(Parser)]
#[command(name = "mutscope")]
#[command(about = "StarCraft II co-op mutator identification", version)]
pub struct Args {
    /// Config file (TOML); defaults to mutscope.toml when present
    #[arg(long, value_name = "FILE", env = "MUTSCOPE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Mutator tables file (JSON), replaces the embedded tables
    #[arg(long, value_name = "FILE", global = true)]
    pub tables: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Identify mutators from decoded replay event dumps
    Resolve {
        /// Event files (JSON array or JSON-lines)
        #[arg(required = true)]
        files: Vec<PathBuf>,
        #[command(flatten)]
        strategies: StrategyFlags,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the mutator catalog with dialog positions
    Catalog {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Strategy switches; each pair overrides the config file in both directions
/// and the last flag of a pair wins.
#[derive(ClapArgs, Debug, Default)]
pub struct StrategyFlags {
    /// Reconstruct the custom mutation dialog
    #[arg(long, overrides_with = "no_ui")]
    pub ui: bool,
    /// Skip custom mutation dialog reconstruction
    #[arg(long, overrides_with = "ui")]
    pub no_ui: bool,
    /// Read mutator info upgrades from tracker events
    #[arg(long, overrides_with = "no_tracker")]
    pub tracker: bool,
    /// Skip tracker upgrade detection
    #[arg(long, overrides_with = "tracker")]
    pub no_tracker: bool,
}

impl StrategyFlags {
    /// Apply the flags on top of the configured options
    pub fn apply(&self, mut options: ResolveOptions) -> ResolveOptions {
        if self.ui {
            options.custom_mutation_ui = true;
        }
        if self.no_ui {
            options.custom_mutation_ui = false;
        }
        if self.tracker {
            options.tracker_upgrades = true;
        }
        if self.no_tracker {
            options.tracker_upgrades = false;
        }
        options
    }
}
