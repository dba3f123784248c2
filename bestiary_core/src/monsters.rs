//! Built-in monster kinds

use crate::monster::Monster;
use crate::quest::Quest;
use drop_core::{DropEntry, DropTable};
use std::sync::OnceLock;

/// A farmhand guarding his crops. Not eligible for rare drops.
#[derive(Debug, Clone, Copy, Default)]
pub struct Farmer;

impl Monster for Farmer {
    fn examine(&self) -> &str {
        "This guy sure likes to grow stuff!"
    }

    fn drop_table(&self) -> &DropTable {
        static TABLE: OnceLock<DropTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            DropTable::from_entries([
                ("Bones", DropEntry::new(1.0)),
                ("Potato Seed", DropEntry::new(0.3)),
                ("Tomato Seed", DropEntry::new(0.2)),
                (
                    "Stolen Waffle",
                    DropEntry::new(1.0)
                        .unique()
                        .gated_by([Quest::TheStolenWaffle.id()]),
                ),
            ])
            .expect("farmer drop table is valid")
        })
    }

    fn has_rare_drops(&self) -> bool {
        false
    }
}

/// An overgrown brute from the hills. Eligible for rare drops.
#[derive(Debug, Clone, Copy, Default)]
pub struct HillGiant;

impl Monster for HillGiant {
    fn examine(&self) -> &str {
        "Overgrown brute hailing from the hills."
    }

    fn drop_table(&self) -> &DropTable {
        static TABLE: OnceLock<DropTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            DropTable::from_entries([
                ("Big Bones", DropEntry::new(1.0)),
                ("Limpwurt Root", DropEntry::new(0.3)),
                (
                    "Dwarven Emblem",
                    DropEntry::new(0.5)
                        .unique()
                        .gated_by([Quest::ADrunkenDwarf.id()]),
                ),
            ])
            .expect("hill giant drop table is valid")
        })
    }

    fn has_rare_drops(&self) -> bool {
        true
    }
}

/// Every built-in monster kind, for validation sweeps
pub fn all() -> Vec<Box<dyn Monster>> {
    vec![Box::new(Farmer), Box::new(HillGiant)]
}
