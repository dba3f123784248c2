use crate::monster::Monster;
use drop_core::{DropConfig, DropTable};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error loading bestiary configuration
#[derive(Debug, Error)]
pub enum BestiaryError {
    #[error("IO error reading '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: Option<PathBuf>,
    },
    #[error("Parse error in '{path}': {error}")]
    Parse {
        error: toml::de::Error,
        path: PathBuf,
    },
    #[error("Validation error in '{path}': {message}")]
    Validation { message: String, path: PathBuf },
    #[error("Duplicate monster id: {0}")]
    DuplicateMonster(String),
}

/// TOML configuration for a monster file
#[derive(Debug, Deserialize)]
struct MonsterFileConfig {
    monster: MonsterConfig,
    #[serde(default)]
    drops: Vec<DropConfig>,
}

#[derive(Debug, Deserialize)]
struct MonsterConfig {
    id: String,
    examine: String,
    #[serde(default)]
    rare_drops: bool,
}

/// A monster kind defined in configuration rather than code
#[derive(Debug, Clone)]
pub struct ConfiguredMonster {
    id: String,
    examine: String,
    table: DropTable,
    rare_drops: bool,
}

impl ConfiguredMonster {
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Monster for ConfiguredMonster {
    fn examine(&self) -> &str {
        &self.examine
    }

    fn drop_table(&self) -> &DropTable {
        &self.table
    }

    fn has_rare_drops(&self) -> bool {
        self.rare_drops
    }
}

/// Registry of configured monsters, loaded from TOML files
#[derive(Debug, Default)]
pub struct Bestiary {
    monsters: HashMap<String, ConfiguredMonster>,
}

impl Bestiary {
    /// Create an empty bestiary
    pub fn new() -> Self {
        Self::default()
    }

    /// Load all monster definitions from a directory (recursively)
    pub fn load(dir: &Path) -> Result<Self, BestiaryError> {
        let mut bestiary = Self::new();
        bestiary.load_dir(dir)?;
        Ok(bestiary)
    }

    fn load_dir(&mut self, dir: &Path) -> Result<(), BestiaryError> {
        if !dir.exists() {
            return Ok(());
        }

        let entries = std::fs::read_dir(dir).map_err(|e| BestiaryError::Io {
            error: e,
            path: Some(dir.to_path_buf()),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| BestiaryError::Io {
                error: e,
                path: Some(dir.to_path_buf()),
            })?;
            let path = entry.path();

            if path.is_dir() {
                self.load_dir(&path)?;
            } else if path.extension().is_some_and(|ext| ext == "toml") {
                self.load_file(&path)?;
            }
        }

        Ok(())
    }

    /// Load a single monster file
    fn load_file(&mut self, path: &Path) -> Result<(), BestiaryError> {
        let content = std::fs::read_to_string(path).map_err(|e| BestiaryError::Io {
            error: e,
            path: Some(path.to_path_buf()),
        })?;

        let config: MonsterFileConfig =
            toml::from_str(&content).map_err(|e| BestiaryError::Parse {
                error: e,
                path: path.to_path_buf(),
            })?;

        let table = DropTable::from_config(config.drops).map_err(|e| BestiaryError::Validation {
            message: e.to_string(),
            path: path.to_path_buf(),
        })?;

        let monster = ConfiguredMonster {
            id: config.monster.id,
            examine: config.monster.examine,
            table,
            rare_drops: config.monster.rare_drops,
        };

        if self.monsters.contains_key(&monster.id) {
            return Err(BestiaryError::DuplicateMonster(monster.id));
        }
        self.monsters.insert(monster.id.clone(), monster);
        Ok(())
    }

    /// Get a monster by ID
    pub fn get(&self, id: &str) -> Option<&ConfiguredMonster> {
        self.monsters.get(id)
    }

    /// Check if a monster exists
    pub fn contains(&self, id: &str) -> bool {
        self.monsters.contains_key(id)
    }

    /// List all monster IDs
    pub fn monster_ids(&self) -> impl Iterator<Item = &str> {
        self.monsters.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Player;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::io::Write;
    use tempfile::TempDir;

    fn create_monster_file(dir: &Path, name: &str, content: &str) {
        let path = dir.join(format!("{}.toml", name));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn test_load_simple_monster() {
        let dir = TempDir::new().unwrap();
        create_monster_file(
            dir.path(),
            "farmer",
            r#"
[monster]
id = "farmer"
examine = "This guy sure likes to grow stuff!"

[[drops]]
item = "Bones"
chance = 1.0

[[drops]]
item = "Stolen Waffle"
chance = 1.0
unique = true
quests = [2]
"#,
        );

        let bestiary = Bestiary::load(dir.path()).unwrap();
        assert!(bestiary.contains("farmer"));

        let farmer = bestiary.get("farmer").unwrap();
        assert!(!farmer.has_rare_drops());
        assert_eq!(farmer.drop_table().len(), 2);
    }

    #[test]
    fn test_loaded_monster_drops_loot() {
        let dir = TempDir::new().unwrap();
        create_monster_file(
            dir.path(),
            "goblin",
            r#"
[monster]
id = "goblin"
examine = "An ugly green creature."
rare_drops = true

[[drops]]
item = "Goblin Mail"
chance = 1.0
"#,
        );

        let bestiary = Bestiary::load(dir.path()).unwrap();
        let goblin = bestiary.get("goblin").unwrap();

        let player = Player::new();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let loot = goblin.drop_loot(player.active_quests(), &mut rng);
        assert!(loot.contains(&"Goblin Mail".to_string()));
    }

    #[test]
    fn test_load_missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let bestiary = Bestiary::load(&dir.path().join("nope")).unwrap();
        assert!(bestiary.is_empty());
    }

    #[test]
    fn test_bad_chance_is_a_validation_error() {
        let dir = TempDir::new().unwrap();
        create_monster_file(
            dir.path(),
            "broken",
            r#"
[monster]
id = "broken"
examine = "Should not load."

[[drops]]
item = "Bones"
chance = 0.0
"#,
        );

        let result = Bestiary::load(dir.path());
        assert!(matches!(result, Err(BestiaryError::Validation { .. })));
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        create_monster_file(dir.path(), "broken", "[monster\nid=");

        let result = Bestiary::load(dir.path());
        assert!(matches!(result, Err(BestiaryError::Parse { .. })));
    }

    #[test]
    fn test_duplicate_monster_id() {
        let dir = TempDir::new().unwrap();
        let body = r#"
[monster]
id = "farmer"
examine = "This guy sure likes to grow stuff!"
"#;
        create_monster_file(dir.path(), "farmer_a", body);
        create_monster_file(dir.path(), "farmer_b", body);

        let result = Bestiary::load(dir.path());
        assert!(matches!(
            result,
            Err(BestiaryError::DuplicateMonster(id)) if id == "farmer"
        ));
    }
}
