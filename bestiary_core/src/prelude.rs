//! Prelude module for convenient imports
//!
//! ```rust
//! use bestiary_core::prelude::*;
//! ```

// Core types
pub use crate::monster::{rare_drop_table, Monster};
pub use crate::monsters::{Farmer, HillGiant};
pub use crate::player::Player;
pub use crate::quest::Quest;

// Config-defined monsters
pub use crate::bestiary::{Bestiary, BestiaryError, ConfiguredMonster};

// Re-exports from drop_core
pub use drop_core::{resolve_drops, DropEntry, DropTable, QuestId, RARE_ROLL_CHANCE};
