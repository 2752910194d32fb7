use serde::Serialize;

use crate::catalog::{ButtonPosition, MutatorCatalog};
use crate::error::Result;
use crate::resolve::{Anomaly, Resolution};

/// Resolution of one replay, as written by the JSON exporter.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport<'a> {
    pub source: &'a str,
    pub mutators: &'a [String],
    pub anomalies: &'a [Anomaly],
}

impl<'a> ReplayReport<'a> {
    pub fn new(source: &'a str, resolution: &'a Resolution) -> Self {
        Self {
            source,
            mutators: &resolution.mutators,
            anomalies: &resolution.anomalies,
        }
    }
}

#[derive(Debug, Serialize)]
struct CatalogEntry<'a> {
    index: usize,
    name: &'a str,
    #[serde(flatten)]
    position: Option<ButtonPosition>,
}

/// Generate a JSON report for a set of resolved replays
pub fn generate_report_json(reports: &[ReplayReport<'_>]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

/// Generate a JSON listing of the catalog with dialog positions
pub fn generate_catalog_json(catalog: &MutatorCatalog) -> Result<String> {
    let entries: Vec<CatalogEntry<'_>> = catalog
        .positions()
        .enumerate()
        .map(|(index, (name, position))| CatalogEntry {
            index,
            name,
            position,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MutatorTables;
    use serde_json::Value;

    #[test]
    fn test_report_json() {
        let resolution = Resolution {
            mutators: vec!["Barrier".to_string()],
            anomalies: Vec::new(),
        };
        let json = generate_report_json(&[ReplayReport::new("a.json", &resolution)]).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["source"], "a.json");
        assert_eq!(value[0]["mutators"][0], "Barrier");
        assert!(value[0]["anomalies"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_catalog_json() {
        let catalog = MutatorTables::standard().catalog();
        let json = generate_catalog_json(catalog).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        let entries = value.as_array().unwrap();

        assert_eq!(entries.len(), catalog.len());
        assert_eq!(entries[0]["name"], catalog.get(0).unwrap());
        assert_eq!(entries[0]["panel"], 1);
        assert_eq!(entries[0]["control_id"], 41);
        assert_eq!(entries[15]["panel"], 2);
        assert_eq!(entries[15]["slot"], 0);
    }
}
