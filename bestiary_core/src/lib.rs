//! bestiary_core - Monsters, players, and loot for the drop simulation
//!
//! This library provides:
//! - Monster: the capability trait every monster kind implements
//! - Farmer / HillGiant: built-in monster kinds
//! - Player: active-quest tracking
//! - Bestiary: monster definitions loaded from TOML files
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use bestiary_core::prelude::*;
//!
//! let mut player = Player::new();
//! player.mark_active(Quest::TheStolenWaffle);
//!
//! let mut rng = rand::thread_rng();
//! let loot = Farmer.drop_loot(player.active_quests(), &mut rng);
//! println!("Farmer's loot: {:?}", loot);
//! ```

pub mod bestiary;
pub mod monster;
pub mod monsters;
pub mod player;
pub mod prelude;
pub mod quest;

// Core API - what most users need
pub use bestiary::{Bestiary, BestiaryError, ConfiguredMonster};
pub use monster::{rare_drop_table, Monster};
pub use monsters::{Farmer, HillGiant};
pub use player::Player;
pub use quest::Quest;

// Re-export commonly needed drop_core types
pub use drop_core::{resolve_drops, DropEntry, DropTable, QuestId, RARE_ROLL_CHANCE};
