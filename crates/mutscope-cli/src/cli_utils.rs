//! Common CLI utility functions shared across commands.

use std::path::Path;

use anyhow::{Context, Result};
use mutscope_core::MutatorTables;

/// Load a tables file, or fall back to the embedded tables.
pub fn load_tables(path: Option<&Path>) -> Result<MutatorTables> {
    match path {
        Some(path) => MutatorTables::load(path)
            .with_context(|| format!("Failed to load mutator tables {}", path.display())),
        None => Ok(MutatorTables::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_tables_without_path() {
        let tables = load_tables(None).unwrap();
        assert_eq!(&tables, MutatorTables::standard());
    }

    #[test]
    fn test_missing_tables_file() {
        let err = load_tables(Some(Path::new("/nonexistent/tables.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to load mutator tables"));
    }
}
