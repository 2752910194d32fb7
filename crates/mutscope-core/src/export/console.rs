//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::catalog::MutatorCatalog;
use crate::resolve::Resolution;

/// Format a resolution for console display
///
/// One mutator per line under a header naming the source, followed by any
/// skipped events.
pub fn format_resolution_console(source: &str, resolution: &Resolution) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "{}", source.bold());
    if resolution.mutators.is_empty() {
        let _ = writeln!(output, "  {}", "no mutators".dimmed());
    }
    for (index, mutator) in resolution.mutators.iter().enumerate() {
        let _ = writeln!(output, "  {:>2}. {}", index + 1, mutator.cyan());
    }

    if !resolution.anomalies.is_empty() {
        let _ = writeln!(
            output,
            "  {}",
            format!("{} events skipped", resolution.anomalies.len()).yellow()
        );
        for anomaly in &resolution.anomalies {
            let _ = writeln!(
                output,
                "    {} {}",
                format!("[{}]", anomaly.gameloop).dimmed(),
                anomaly.message
            );
        }
    }

    output
}

/// Format the catalog as a grid listing: panel, slot, control id and name
pub fn format_catalog_console(catalog: &MutatorCatalog) -> String {
    let mut output = String::new();
    let mut current_panel = None;

    for (name, position) in catalog.positions() {
        match position {
            Some(position) => {
                if current_panel != Some(position.panel) {
                    current_panel = Some(position.panel);
                    let _ = writeln!(output, "{}", format!("Panel {}", position.panel).bold());
                }
                let _ = writeln!(
                    output,
                    "  {:>2}  {}  {}",
                    position.slot + 1,
                    format!("#{}", position.control_id).dimmed(),
                    name
                );
            }
            None => {
                let _ = writeln!(output, "  {}  {}", "--".red(), name);
            }
        }
    }

    output
}
