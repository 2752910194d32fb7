use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::event::EventKind;

/// User that generated a game event (`_userid`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserId {
    #[serde(rename = "m_userId")]
    pub user_id: i64,
}

/// A single event as produced by the replay decoder.
///
/// The type tag, game loop and user id are lifted out; every other field
/// stays in `payload` under its decoder name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayEvent {
    #[serde(rename = "_event")]
    pub event: String,
    #[serde(rename = "_gameloop", default)]
    pub gameloop: i64,
    /// `None` when absent or malformed; the resolver decides whether that matters
    #[serde(
        rename = "_userid",
        default,
        deserialize_with = "lenient_user",
        skip_serializing_if = "Option::is_none"
    )]
    pub user: Option<UserId>,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

fn lenient_user<'de, D>(deserializer: D) -> std::result::Result<Option<UserId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

impl ReplayEvent {
    pub fn new(event: impl Into<String>, gameloop: i64) -> Self {
        Self {
            event: event.into(),
            gameloop,
            user: None,
            payload: Map::new(),
        }
    }

    /// Dialog control click by a user
    pub fn dialog_control(gameloop: i64, user_id: i64, control_id: i64) -> Self {
        Self::new(EventKind::DialogControl.tag(), gameloop)
            .with_user(user_id)
            .with_field("m_controlId", control_id)
    }

    /// Cutscene bookmark marking the start of the match
    pub fn cutscene_bookmark(gameloop: i64) -> Self {
        Self::new(EventKind::CutsceneBookmarkFired.tag(), gameloop)
    }

    /// Tracker upgrade event; the name is stored as raw bytes like the decoder does
    pub fn upgrade(gameloop: i64, player_id: i64, upgrade_type_name: &[u8]) -> Self {
        Self::new(EventKind::Upgrade.tag(), gameloop)
            .with_field("m_playerId", player_id)
            .with_field("m_upgradeTypeName", upgrade_type_name.to_vec())
            .with_field("m_count", 1)
    }

    pub fn with_user(mut self, user_id: i64) -> Self {
        self.user = Some(UserId { user_id });
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(name.into(), value.into());
        self
    }

    pub fn kind(&self) -> Option<EventKind> {
        EventKind::from_tag(&self.event)
    }

    pub fn is(&self, kind: EventKind) -> bool {
        self.event == kind.tag()
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user.map(|u| u.user_id)
    }

    /// `m_controlId` of a dialog control event
    pub fn control_id(&self) -> Result<i64> {
        self.int_field("m_controlId")
    }

    /// `m_playerId` of a tracker event
    pub fn player_id(&self) -> Result<i64> {
        self.int_field("m_playerId")
    }

    /// `m_upgradeTypeName` of an upgrade event, decoded as UTF-8.
    ///
    /// Accepts a JSON string or an array of byte values.
    pub fn upgrade_type_name(&self) -> Result<String> {
        const FIELD: &str = "m_upgradeTypeName";

        match self.field(FIELD)? {
            Value::String(name) => Ok(name.clone()),
            Value::Array(values) => {
                let bytes = values
                    .iter()
                    .map(|v| v.as_u64().and_then(|b| u8::try_from(b).ok()))
                    .collect::<Option<Vec<u8>>>()
                    .ok_or_else(|| self.invalid_field(FIELD))?;
                String::from_utf8(bytes).map_err(|e| Error::Decode {
                    event: self.event.clone(),
                    field: FIELD,
                    message: e.to_string(),
                })
            }
            _ => Err(self.invalid_field(FIELD)),
        }
    }

    fn field(&self, name: &'static str) -> Result<&Value> {
        self.payload.get(name).ok_or_else(|| Error::MissingField {
            event: self.event.clone(),
            field: name,
        })
    }

    fn int_field(&self, name: &'static str) -> Result<i64> {
        self.field(name)?
            .as_i64()
            .ok_or_else(|| self.invalid_field(name))
    }

    fn invalid_field(&self, name: &'static str) -> Error {
        Error::InvalidField {
            event: self.event.clone(),
            field: name,
        }
    }
}
