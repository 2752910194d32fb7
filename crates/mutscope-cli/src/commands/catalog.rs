//! Catalog command for listing the mutator grid.

use anyhow::Result;
use mutscope_core::{MutatorTables, format_catalog_console, generate_catalog_json};

/// Print the catalog with panel, slot and control id of every entry
pub fn run(tables: &MutatorTables, json: bool) -> Result<()> {
    let catalog = tables.catalog();

    if json {
        println!("{}", generate_catalog_json(catalog)?);
    } else {
        print!("{}", format_catalog_console(catalog));
        eprintln!("{} mutators", catalog.len());
    }

    Ok(())
}
