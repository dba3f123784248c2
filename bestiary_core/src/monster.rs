use drop_core::{resolve_drops, DropEntry, DropTable, QuestId};
use rand::RngCore;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Shared rare drop table instance, identical for every monster kind
static RARE_DROP_TABLE: OnceLock<DropTable> = OnceLock::new();

/// The rare drop table shared by all rare-eligible monsters.
///
/// Initialised once and shared by reference so monster kinds can never
/// diverge from each other.
pub fn rare_drop_table() -> &'static DropTable {
    RARE_DROP_TABLE.get_or_init(|| {
        DropTable::from_entries([
            ("Blue Party Hat", DropEntry::new(0.5).unique()),
            ("Red Party Hat", DropEntry::new(0.5).unique()),
        ])
        .expect("rare drop table is valid")
    })
}

/// An attackable NPC that drops loot on death
pub trait Monster {
    /// Examine text shown to the player.
    ///
    /// Starts with a capital letter and ends in `.`, `?` or `!`.
    fn examine(&self) -> &str;

    /// The monster's regular drop table
    fn drop_table(&self) -> &DropTable;

    /// Whether this monster can roll the rare drop table
    fn has_rare_drops(&self) -> bool;

    /// The rare table this monster rolls when eligible
    fn rare_drop_table(&self) -> &DropTable {
        rare_drop_table()
    }

    /// Roll the drop tables on death and return the items to drop
    fn drop_loot(&self, active_quests: &HashSet<QuestId>, rng: &mut dyn RngCore) -> Vec<String> {
        resolve_drops(
            self.drop_table(),
            self.rare_drop_table(),
            self.has_rare_drops(),
            active_quests,
            rng,
        )
    }
}
