mod config;
mod entry;
mod resolver;
mod table;

pub use config::{DropConfig, TableFileConfig};
pub use entry::{DropEntry, QuestId};
pub use resolver::{resolve_drops, resolve_drops_seeded, RARE_ROLL_CHANCE};
pub use table::DropTable;

use thiserror::Error;

/// Error building a drop table from configuration
#[derive(Debug, Error)]
pub enum TableError {
    #[error("drop chance {chance} for '{item}' is outside (0, 1]")]
    ChanceOutOfRange { item: String, chance: f64 },
    #[error("duplicate item in drop table: {0}")]
    DuplicateItem(String),
    #[error("drop table entry has an empty item name")]
    EmptyItemName,
}
