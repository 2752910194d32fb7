use strum::{EnumString, IntoStaticStr};

/// Event types the resolver reacts to, keyed by their decoder tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr)]
pub enum EventKind {
    /// Click on a trigger dialog control
    #[strum(serialize = "NNet.Game.STriggerDialogControlEvent")]
    DialogControl,
    /// Cutscene bookmark; the first one marks the start of the match
    #[strum(serialize = "NNet.Game.STriggerCutsceneBookmarkFiredEvent")]
    CutsceneBookmarkFired,
    /// Upgrade granted to a player
    #[strum(serialize = "NNet.Replay.Tracker.SUpgradeEvent")]
    Upgrade,
}

impl EventKind {
    /// Decoder tag of this event type
    pub fn tag(self) -> &'static str {
        self.into()
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        tag.parse().ok()
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}
