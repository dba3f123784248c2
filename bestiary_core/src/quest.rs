use drop_core::QuestId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quests known to the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quest {
    ADrunkenDwarf,
    TheStolenWaffle,
    TheSwordOfThrazduin,
}

impl Quest {
    /// Numeric ID used in drop-table quest gates
    pub const fn id(self) -> QuestId {
        match self {
            Quest::ADrunkenDwarf => 1,
            Quest::TheStolenWaffle => 2,
            Quest::TheSwordOfThrazduin => 3,
        }
    }

    /// Get all quest variants
    pub fn all() -> &'static [Quest] {
        &[
            Quest::ADrunkenDwarf,
            Quest::TheStolenWaffle,
            Quest::TheSwordOfThrazduin,
        ]
    }
}

impl From<Quest> for QuestId {
    fn from(quest: Quest) -> QuestId {
        quest.id()
    }
}

impl fmt::Display for Quest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quest::ADrunkenDwarf => write!(f, "A Drunken Dwarf"),
            Quest::TheStolenWaffle => write!(f, "The Stolen Waffle"),
            Quest::TheSwordOfThrazduin => write!(f, "The Sword of Thrazduin"),
        }
    }
}
