use drop_core::QuestId;
use std::collections::HashSet;

/// Tracks the quests a player is actively working.
///
/// The set only ever grows over the player's lifetime; quests are never
/// removed once marked active.
#[derive(Debug, Clone, Default)]
pub struct Player {
    active_quests: HashSet<QuestId>,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a quest as active. Marking the same quest twice is a no-op.
    pub fn mark_active(&mut self, quest: impl Into<QuestId>) {
        self.active_quests.insert(quest.into());
    }

    /// Whether the player is actively working the given quest
    pub fn is_active(&self, quest: impl Into<QuestId>) -> bool {
        self.active_quests.contains(&quest.into())
    }

    /// Read-only view of the active quest set
    pub fn active_quests(&self) -> &HashSet<QuestId> {
        &self.active_quests
    }
}
