use crate::catalog::{ButtonPosition, Panel};
use crate::config::dialog::{SELECT_BUTTONS, SELECT_STRIDE};
use crate::error::{Error, Result};

/// Mutators offered in the custom mutation dialog, in grid order.
///
/// Built once from the registry minus the deny-list and never changed
/// afterwards. Index `i` is the button at slot `i % 15` of panel `i / 15 + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MutatorCatalog {
    names: Vec<String>,
}

impl MutatorCatalog {
    /// Build a catalog, rejecting deny-list names missing from the registry.
    pub fn from_registry<S: AsRef<str>>(registry: &[S], deny_list: &[S]) -> Result<Self> {
        if let Some(missing) = deny_list
            .iter()
            .map(AsRef::as_ref)
            .find(|denied| !registry.iter().any(|name| name.as_ref() == *denied))
        {
            return Err(Error::Tables(format!(
                "deny-listed mutator {:?} is not in the registry",
                missing
            )));
        }

        Ok(Self::without_denied(registry, deny_list))
    }

    pub(crate) fn without_denied<S: AsRef<str>>(registry: &[S], deny_list: &[S]) -> Self {
        let names = registry
            .iter()
            .map(AsRef::as_ref)
            .filter(|name| !deny_list.iter().any(|denied| denied.as_ref() == *name))
            .map(str::to_string)
            .collect();
        Self { names }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|s| s.as_str())
    }

    /// Catalog index for a mutator button click on the given panel.
    ///
    /// Returns `None` for control ids outside the mutator button range.
    pub fn button_index(control_id: i64, panel: Panel) -> Option<usize> {
        if !SELECT_BUTTONS.contains(&control_id) {
            return None;
        }
        let slot = ((control_id - SELECT_BUTTONS.start()) / SELECT_STRIDE) as usize;
        Some(slot + panel.offset())
    }

    /// Mutator behind a button (control id 41-83) on a panel (1-4).
    pub fn mutator_for_button(&self, control_id: i64, panel: Panel) -> Option<&str> {
        Self::button_index(control_id, panel).and_then(|index| self.get(index))
    }

    /// Entries with their position in the dialog grid.
    pub fn positions(&self) -> impl Iterator<Item = (&str, Option<ButtonPosition>)> {
        self.iter()
            .enumerate()
            .map(|(index, name)| (name, ButtonPosition::for_index(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_catalog() -> MutatorCatalog {
        MutatorCatalog::from_registry(
            &["Barrier", "Nap Time", "Avenger", "Fear"],
            &["Nap Time"],
        )
        .unwrap()
    }

    #[test]
    fn test_deny_list_removed_in_order() {
        let catalog = small_catalog();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(0), Some("Barrier"));
        assert_eq!(catalog.get(1), Some("Avenger"));
        assert_eq!(catalog.get(2), Some("Fear"));
        assert_eq!(catalog.get(3), None);
        assert!(!catalog.contains("Nap Time"));
    }

    #[test]
    fn test_unknown_deny_entry_rejected() {
        let result = MutatorCatalog::from_registry(&["Barrier"], &["Nap Time"]);
        assert!(matches!(result, Err(Error::Tables(_))));
    }

    #[test]
    fn test_button_index() {
        assert_eq!(MutatorCatalog::button_index(41, Panel::FIRST), Some(0));
        assert_eq!(MutatorCatalog::button_index(83, Panel::FIRST), Some(14));
        assert_eq!(
            MutatorCatalog::button_index(41, Panel::new(2).unwrap()),
            Some(15)
        );
        assert_eq!(MutatorCatalog::button_index(83, Panel::LAST), Some(59));
        assert_eq!(MutatorCatalog::button_index(40, Panel::FIRST), None);
        assert_eq!(MutatorCatalog::button_index(84, Panel::FIRST), None);
    }

    #[test]
    fn test_mutator_for_button() {
        let catalog = small_catalog();
        assert_eq!(catalog.mutator_for_button(44, Panel::FIRST), Some("Avenger"));
        assert_eq!(catalog.mutator_for_button(41, Panel::LAST), None);
    }

    #[test]
    fn test_index_of() {
        let catalog = small_catalog();
        assert_eq!(catalog.index_of("Fear"), Some(2));
        assert_eq!(catalog.index_of("Nap Time"), None);
    }
}
