use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use serde::Deserialize;
use tracing::info;

use crate::catalog::{
    CUSTOM_MUTATION_DENY_LIST, MUTATOR_REGISTRY, MUTATOR_UPGRADE_IDS, MutatorCatalog,
    UpgradeIdTable,
};
use crate::error::{Error, Result};

static STANDARD_TABLES: LazyLock<MutatorTables> = LazyLock::new(MutatorTables::embedded);

/// Catalog and upgrade-id table used by a resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutatorTables {
    catalog: MutatorCatalog,
    upgrade_ids: UpgradeIdTable,
}

/// On-disk override of the embedded tables. Missing sections keep the
/// embedded data.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TablesFile {
    registry: Option<Vec<String>>,
    deny_list: Option<Vec<String>>,
    upgrade_ids: Option<HashMap<String, String>>,
}

impl MutatorTables {
    pub fn new(catalog: MutatorCatalog, upgrade_ids: UpgradeIdTable) -> Self {
        Self {
            catalog,
            upgrade_ids,
        }
    }

    /// Process-wide tables built from the embedded data
    pub fn standard() -> &'static Self {
        &STANDARD_TABLES
    }

    fn embedded() -> Self {
        Self {
            catalog: MutatorCatalog::without_denied(MUTATOR_REGISTRY, CUSTOM_MUTATION_DENY_LIST),
            upgrade_ids: UpgradeIdTable::from_pairs(MUTATOR_UPGRADE_IDS.iter().copied()),
        }
    }

    /// Load a tables file
    ///
    /// Format: JSON object with optional `registry`, `deny_list` and
    /// `upgrade_ids` sections.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let tables = Self::parse(&content)?;
        info!(
            "Loaded mutator tables from {:?} ({} catalog entries, {} upgrade ids)",
            path,
            tables.catalog.len(),
            tables.upgrade_ids.len()
        );
        Ok(tables)
    }

    /// Parse a tables file from string content
    pub fn parse(content: &str) -> Result<Self> {
        let file: TablesFile =
            serde_json::from_str(content).map_err(|e| Error::Tables(e.to_string()))?;

        let catalog = match (file.registry, file.deny_list) {
            (None, None) => Self::standard().catalog.clone(),
            (registry, deny_list) => {
                let registry = registry.unwrap_or_else(|| to_owned(MUTATOR_REGISTRY));
                let deny_list = deny_list.unwrap_or_else(|| to_owned(CUSTOM_MUTATION_DENY_LIST));
                MutatorCatalog::from_registry(&registry, &deny_list)?
            }
        };

        let upgrade_ids = match file.upgrade_ids {
            Some(ids) => UpgradeIdTable::from(ids),
            None => Self::standard().upgrade_ids.clone(),
        };

        Ok(Self {
            catalog,
            upgrade_ids,
        })
    }

    pub fn catalog(&self) -> &MutatorCatalog {
        &self.catalog
    }

    pub fn upgrade_ids(&self) -> &UpgradeIdTable {
        &self.upgrade_ids
    }
}

impl Default for MutatorTables {
    fn default() -> Self {
        Self::standard().clone()
    }
}

fn to_owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}
