use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Identifier of a quest, as handed out by the quest system
pub type QuestId = u32;

/// Drop rule for a single item in a drop table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropEntry {
    /// Per-trial drop chance, in (0, 1]
    pub chance: f64,
    /// Unique items drop at most once per resolution
    #[serde(default)]
    pub unique: bool,
    /// Quests gating this drop; empty means unconditional
    #[serde(default)]
    pub quests: Vec<QuestId>,
}

impl DropEntry {
    pub fn new(chance: f64) -> Self {
        DropEntry {
            chance,
            unique: false,
            quests: Vec::new(),
        }
    }

    /// Mark the entry as unique (drops at most once per resolution)
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Gate the entry on a set of quests
    pub fn gated_by<I: IntoIterator<Item = QuestId>>(mut self, quests: I) -> Self {
        self.quests = quests.into_iter().collect();
        self
    }

    /// Whether the drop always lands (chance of exactly 1)
    pub fn is_guaranteed(&self) -> bool {
        self.chance >= 1.0
    }

    /// Whether the quest gate passes: ungated, or at least one gating quest
    /// is in the active set
    pub fn quest_satisfied(&self, active_quests: &HashSet<QuestId>) -> bool {
        self.quests.is_empty() || self.quests.iter().any(|q| active_quests.contains(q))
    }
}
