use serde::{Deserialize, Serialize};

/// Detection strategies to run when resolving mutators.
///
/// Both may be enabled, in which case tracker results come first and
/// dialog results are appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveOptions {
    /// Reconstruct the custom mutation dialog from UI control events.
    pub custom_mutation_ui: bool,
    /// Read mutator info upgrades from tracker events.
    pub tracker_upgrades: bool,
}

impl ResolveOptions {
    pub fn new(custom_mutation_ui: bool, tracker_upgrades: bool) -> Self {
        Self {
            custom_mutation_ui,
            tracker_upgrades,
        }
    }

    /// Neither strategy enabled
    pub fn none() -> Self {
        Self::new(false, false)
    }

    /// Both strategies enabled
    pub fn all() -> Self {
        Self::new(true, true)
    }

    pub fn is_empty(&self) -> bool {
        !self.custom_mutation_ui && !self.tracker_upgrades
    }
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self::new(true, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_dialog_only() {
        let options = ResolveOptions::default();
        assert!(options.custom_mutation_ui);
        assert!(!options.tracker_upgrades);
    }

    #[test]
    fn test_deserialize_partial() {
        let options: ResolveOptions = serde_json::from_str(r#"{"tracker_upgrades": true}"#).unwrap();
        assert_eq!(options, ResolveOptions::all());
    }

    #[test]
    fn test_none_is_empty() {
        assert!(ResolveOptions::none().is_empty());
        assert!(!ResolveOptions::default().is_empty());
    }
}
