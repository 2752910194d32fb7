//! Resolve command for identifying mutators in event dumps.

use std::path::PathBuf;

use anyhow::{Result, bail};
use mutscope_core::{
    MutatorTables, ReplayReport, Resolution, ResolveOptions, Resolver, format_resolution_console,
    generate_report_json, load_events,
};
use tracing::info;

/// Resolve the mutators of every file
///
/// Files that fail to load are reported and skipped; the command fails
/// after all files were processed if any of them could not be read.
pub fn run(
    files: &[PathBuf],
    tables: &MutatorTables,
    options: ResolveOptions,
    json: bool,
) -> Result<()> {
    if options.is_empty() {
        eprintln!("Both detection strategies are disabled; no mutators will be found");
    }

    let resolver = Resolver::new(tables);
    let mut resolved: Vec<(String, Resolution)> = Vec::with_capacity(files.len());
    let mut failed = 0usize;

    for file in files {
        let source = file.display().to_string();
        match load_events(file) {
            Ok(events) => {
                let resolution = resolver.resolve(&events, options);
                info!(
                    "{}: {} mutators from {} events",
                    source,
                    resolution.mutators.len(),
                    events.len()
                );
                resolved.push((source, resolution));
            }
            Err(e) => {
                eprintln!("{}", load_failure_message(&source, &e));
                failed += 1;
            }
        }
    }

    if json {
        let reports: Vec<ReplayReport<'_>> = resolved
            .iter()
            .map(|(source, resolution)| ReplayReport::new(source, resolution))
            .collect();
        println!("{}", generate_report_json(&reports)?);
    } else {
        for (source, resolution) in &resolved {
            print!("{}", format_resolution_console(source, resolution));
        }
    }

    if failed > 0 {
        bail!("{} of {} files could not be read", failed, files.len());
    }

    Ok(())
}

/// Single stderr line for a file that could not be loaded
fn load_failure_message(source: &str, error: &mutscope_core::Error) -> String {
    format!("Failed to load {}: {}", source, error)
}
