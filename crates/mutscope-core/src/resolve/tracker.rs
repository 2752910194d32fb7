//! Mutator detection from tracker upgrade events.
//!
//! Mutator maps grant player 0 an upgrade named `mutatorinfo_<key>` for each
//! active mutator. Random mutators are not announced this way and cannot be
//! detected.

use tracing::debug;

use crate::catalog::UpgradeIdTable;
use crate::config::upgrade::{HOST_PLAYER_ID, KEY_PREFIX_LEN, MUTATOR_INFO_MARKER};
use crate::event::{EventKind, ReplayEvent};
use crate::resolve::Anomaly;

/// Upgrade key of a mutator info upgrade name.
///
/// Returns `None` unless the name contains the `mutatorinfo` marker. The key
/// is everything after the first 12 characters of the name.
pub fn upgrade_key(upgrade_type_name: &str) -> Option<&str> {
    if !upgrade_type_name.contains(MUTATOR_INFO_MARKER) {
        return None;
    }
    let start = upgrade_type_name
        .char_indices()
        .nth(KEY_PREFIX_LEN)
        .map_or(upgrade_type_name.len(), |(i, _)| i);
    Some(&upgrade_type_name[start..])
}

/// Mutators announced by upgrade events for the host player, in event order.
pub(crate) fn detect(
    events: &[ReplayEvent],
    upgrade_ids: &UpgradeIdTable,
    anomalies: &mut Vec<Anomaly>,
) -> Vec<String> {
    let mut mutators = Vec::new();

    for event in events.iter().filter(|e| e.is(EventKind::Upgrade)) {
        let player_id = match event.player_id() {
            Ok(id) => id,
            Err(e) => {
                Anomaly::from_error(event, &e).record(anomalies);
                continue;
            }
        };
        if player_id != HOST_PLAYER_ID {
            continue;
        }

        let name = match event.upgrade_type_name() {
            Ok(name) => name,
            Err(e) => {
                Anomaly::from_error(event, &e).record(anomalies);
                continue;
            }
        };

        if let Some(mutator) = upgrade_key(&name).and_then(|key| upgrade_ids.get(key)) {
            debug!("Upgrade {} at loop {} -> {}", name, event.gameloop, mutator);
            mutators.push(mutator.to_string());
        }
    }

    mutators
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> UpgradeIdTable {
        UpgradeIdTable::from_pairs([("NightmareMode", "Nightmare Mode"), ("Barrier", "Barrier")])
    }

    #[test]
    fn test_upgrade_key() {
        assert_eq!(upgrade_key("mutatorinfo_Barrier"), Some("Barrier"));
        assert_eq!(upgrade_key("Xmutatorinfo"), Some(""));
        assert_eq!(upgrade_key("mutatorinfo"), Some(""));
        assert_eq!(upgrade_key("MutatorInfo_Barrier"), None);
        assert_eq!(upgrade_key("StimPack"), None);
    }

    #[test]
    fn test_upgrade_key_counts_characters() {
        assert_eq!(upgrade_key("mutatorinfoéXYZ"), Some("XYZ"));
    }

    #[test]
    fn test_detect_mapped_upgrade() {
        let events = vec![ReplayEvent::upgrade(0, 0, b"mutatorinfo_NightmareMode")];
        let mut anomalies = Vec::new();
        assert_eq!(
            detect(&events, &table(), &mut anomalies),
            vec!["Nightmare Mode"]
        );
        assert!(anomalies.is_empty());
    }

    #[test]
    fn test_detect_ignores_unmapped_and_other_players() {
        let events = vec![
            ReplayEvent::upgrade(0, 0, b"mutatorinfo_Unknown"),
            ReplayEvent::upgrade(0, 1, b"mutatorinfo_Barrier"),
            ReplayEvent::upgrade(0, 0, b"SprayTerran"),
        ];
        let mut anomalies = Vec::new();
        assert!(detect(&events, &table(), &mut anomalies).is_empty());
        assert!(anomalies.is_empty());
    }

    #[test]
    fn test_detect_skips_undecodable_name() {
        let events = vec![
            ReplayEvent::upgrade(0, 0, &[0xff, 0xfe]),
            ReplayEvent::upgrade(0, 0, b"mutatorinfo_Barrier"),
        ];
        let mut anomalies = Vec::new();
        assert_eq!(detect(&events, &table(), &mut anomalies), vec!["Barrier"]);
        assert_eq!(anomalies.len(), 1);
    }

    #[test]
    fn test_detect_skips_missing_player() {
        let events = vec![ReplayEvent::new(EventKind::Upgrade.tag(), 0)
            .with_field("m_upgradeTypeName", "mutatorinfo_Barrier")];
        let mut anomalies = Vec::new();
        assert!(detect(&events, &table(), &mut anomalies).is_empty());
        assert_eq!(anomalies.len(), 1);
    }
}
