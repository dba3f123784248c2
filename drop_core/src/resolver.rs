use crate::entry::{DropEntry, QuestId};
use crate::table::DropTable;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

/// Chance per loot event that an eligible monster's rare table is attempted
pub const RARE_ROLL_CHANCE: f64 = 0.0001;

/// Roll a monster's tables and return the dropped item names.
///
/// The regular table is always rolled. The rare table is only attempted when
/// `rare_eligible` and an outer roll lands below [`RARE_ROLL_CHANCE`], and it
/// yields at most one item per loot event.
pub fn resolve_drops<R: Rng + ?Sized>(
    regular: &DropTable,
    rare: &DropTable,
    rare_eligible: bool,
    active_quests: &HashSet<QuestId>,
    rng: &mut R,
) -> Vec<String> {
    let mut drops = Vec::new();

    roll_regular(&mut drops, regular, active_quests, rng);

    if rare_eligible && rng.gen::<f64>() < RARE_ROLL_CHANCE {
        roll_rare(&mut drops, rare, active_quests, rng);
    }

    drops
}

/// Deterministic resolution from a seed, for replaying a loot event
pub fn resolve_drops_seeded(
    regular: &DropTable,
    rare: &DropTable,
    rare_eligible: bool,
    active_quests: &HashSet<QuestId>,
    seed: u64,
) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    resolve_drops(regular, rare, rare_eligible, active_quests, &mut rng)
}

fn roll_regular<R: Rng + ?Sized>(
    drops: &mut Vec<String>,
    table: &DropTable,
    active_quests: &HashSet<QuestId>,
    rng: &mut R,
) {
    for (item, entry) in table.iter() {
        // A drop gated on several quests still rolls once at most, no matter
        // how many of them the player is working
        if !entry.quest_satisfied(active_quests) {
            continue;
        }
        try_add(drops, item, entry, rng);
    }
}

/// Roll the rare table: quest gates apply, first successful trial wins, and
/// at most one item drops
fn roll_rare<R: Rng + ?Sized>(
    drops: &mut Vec<String>,
    table: &DropTable,
    active_quests: &HashSet<QuestId>,
    rng: &mut R,
) {
    for (item, entry) in table.iter() {
        if !entry.quest_satisfied(active_quests) {
            continue;
        }
        if add_once(drops, item, entry.chance, rng) {
            break;
        }
    }
}

/// Apply an entry's drop rule, appending to `drops` on success
fn try_add<R: Rng + ?Sized>(
    drops: &mut Vec<String>,
    item: &str,
    entry: &DropEntry,
    rng: &mut R,
) -> bool {
    if entry.is_guaranteed() {
        drops.push(item.to_string());
        true
    } else if entry.unique {
        add_once(drops, item, entry.chance, rng)
    } else {
        // Stacking drop: keep appending while the trials keep succeeding
        let before = drops.len();
        while rng.gen::<f64>() < entry.chance {
            drops.push(item.to_string());
        }
        drops.len() > before
    }
}

/// Single trial capped at one copy; a guaranteed chance skips the roll
fn add_once<R: Rng + ?Sized>(drops: &mut Vec<String>, item: &str, chance: f64, rng: &mut R) -> bool {
    if chance >= 1.0 || rng.gen::<f64>() < chance {
        drops.push(item.to_string());
        true
    } else {
        false
    }
}
