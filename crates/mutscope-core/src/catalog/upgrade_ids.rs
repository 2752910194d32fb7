use std::collections::HashMap;

/// Tracker upgrade keys mapped to mutator display names.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpgradeIdTable {
    ids: HashMap<String, String>,
}

impl UpgradeIdTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            ids: pairs
                .into_iter()
                .map(|(key, name)| (key.into(), name.into()))
                .collect(),
        }
    }

    /// Mutator name for an upgrade key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.ids.get(key).map(|s| s.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.ids.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.ids.iter()
    }
}

impl From<HashMap<String, String>> for UpgradeIdTable {
    fn from(ids: HashMap<String, String>) -> Self {
        Self { ids }
    }
}
