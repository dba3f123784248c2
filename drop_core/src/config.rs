use crate::entry::QuestId;
use crate::table::DropTable;
use crate::TableError;
use serde::Deserialize;

/// TOML configuration for a standalone drop table file
#[derive(Debug, Deserialize)]
pub struct TableFileConfig {
    #[serde(default)]
    pub drops: Vec<DropConfig>,
}

impl TableFileConfig {
    /// Convert the parsed file into a validated drop table
    pub fn into_table(self) -> Result<DropTable, TableError> {
        DropTable::from_config(self.drops)
    }
}

/// Configuration for a single drop in a table
#[derive(Debug, Clone, Deserialize)]
pub struct DropConfig {
    pub item: String,
    pub chance: f64,
    #[serde(default)]
    pub unique: bool,
    #[serde(default)]
    pub quests: Vec<QuestId>,
}
