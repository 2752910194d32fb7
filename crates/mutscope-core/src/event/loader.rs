use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::event::ReplayEvent;

/// Load decoded events from a file
///
/// See [`parse_events`] for the accepted formats.
pub fn load_events<P: AsRef<Path>>(path: P) -> Result<Vec<ReplayEvent>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let events = parse_events(&content)?;
    debug!("Loaded {} events from {:?}", events.len(), path);
    Ok(events)
}

/// Parse decoded events
///
/// Format: either a JSON array of event objects, or JSON-lines with one
/// event object per line. Blank lines are skipped.
///
/// Text that is not JSON fails the whole parse. A well-formed record that
/// does not describe an event (missing `_event`, mistyped `_gameloop`, ...)
/// is skipped with a warning and the remaining records are kept.
pub fn parse_events(content: &str) -> Result<Vec<ReplayEvent>> {
    if content.trim_start().starts_with('[') {
        let records: Vec<Value> = serde_json::from_str(content)?;
        return Ok(records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| convert_record(record, "record", index + 1))
            .collect());
    }

    let mut events = Vec::new();
    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record: Value = serde_json::from_str(line).map_err(|source| Error::EventParse {
            line: index + 1,
            source,
        })?;
        events.extend(convert_record(record, "line", index + 1));
    }
    Ok(events)
}

fn convert_record(record: Value, unit: &str, position: usize) -> Option<ReplayEvent> {
    match serde_json::from_value(record) {
        Ok(event) => Some(event),
        Err(e) => {
            warn!("Skipping malformed event on {} {}: {}", unit, position, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;

    #[test]
    fn test_parse_array() {
        let content = r#"[
            {"_event": "NNet.Game.STriggerDialogControlEvent", "_gameloop": 3, "_userid": {"m_userId": 0}, "m_controlId": 41},
            {"_event": "NNet.Game.STriggerCutsceneBookmarkFiredEvent", "_gameloop": 90}
        ]"#;
        let events = parse_events(content).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].kind(), Some(EventKind::CutsceneBookmarkFired));
    }

    #[test]
    fn test_parse_json_lines() {
        let content = concat!(
            r#"{"_event": "NNet.Game.STriggerDialogControlEvent", "_gameloop": 3, "_userid": {"m_userId": 0}, "m_controlId": 41}"#,
            "\n\n",
            r#"{"_event": "NNet.Replay.Tracker.SUpgradeEvent", "_gameloop": 0, "m_playerId": 0, "m_upgradeTypeName": "x"}"#,
            "\n"
        );
        let events = parse_events(content).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].control_id().unwrap(), 41);
    }

    #[test]
    fn test_parse_json_lines_reports_line() {
        let content = "{\"_event\": \"a\"}\n{not json}\n";
        match parse_events(content) {
            Err(Error::EventParse { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_parse_array_keeps_records_around_bad_user() {
        let content = r#"[
            {"_event": "NNet.Game.STriggerDialogControlEvent", "_gameloop": 3, "_userid": {"m_userId": 0}, "m_controlId": 41},
            {"_event": "NNet.Game.STriggerDialogControlEvent", "_gameloop": 4, "_userid": {}, "m_controlId": 44}
        ]"#;
        let events = parse_events(content).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].user_id(), Some(0));
        assert_eq!(events[1].user_id(), None);
    }

    #[test]
    fn test_parse_json_lines_skips_unconvertible_record() {
        let content = concat!(
            r#"{"_event": "NNet.Game.STriggerDialogControlEvent", "_gameloop": 3, "_userid": {"m_userId": 0}, "m_controlId": 41}"#,
            "\n",
            r#"{"_event": "NNet.Game.SCameraUpdateEvent", "_gameloop": null, "_userid": {"m_userId": 0}}"#,
            "\n",
            r#"{"_gameloop": 5}"#,
            "\n",
            r#"{"_event": "NNet.Game.STriggerCutsceneBookmarkFiredEvent", "_gameloop": 9}"#,
            "\n"
        );
        let events = parse_events(content).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].control_id().unwrap(), 41);
        assert_eq!(events[1].kind(), Some(EventKind::CutsceneBookmarkFired));
    }

    #[test]
    fn test_parse_array_skips_non_object() {
        let content = r#"[42, {"_event": "NNet.Game.STriggerCutsceneBookmarkFiredEvent", "_gameloop": 9}]"#;
        let events = parse_events(content).unwrap();
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_events("").unwrap().is_empty());
        assert!(parse_events("[]").unwrap().is_empty());
    }

    #[test]
    fn test_load_events_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        fs::write(
            &path,
            r#"[{"_event": "NNet.Game.STriggerCutsceneBookmarkFiredEvent", "_gameloop": 1}]"#,
        )
        .unwrap();

        let events = load_events(&path).unwrap();
        assert_eq!(events.len(), 1);
    }
}
