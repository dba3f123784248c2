use crate::config::DropConfig;
use crate::entry::DropEntry;
use crate::TableError;

/// An ordered drop table mapping item names to their drop rules
///
/// Entry order is preserved; it has no effect on drop semantics beyond
/// rare-table first-match resolution, but keeps rolls reproducible under a
/// seeded RNG.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropTable {
    entries: Vec<(String, DropEntry)>,
}

impl DropTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from (item, entry) pairs, validating each entry
    pub fn from_entries<I, S>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (S, DropEntry)>,
        S: Into<String>,
    {
        let mut table = DropTable::new();
        for (item, entry) in entries {
            table.insert(item, entry)?;
        }
        Ok(table)
    }

    /// Build a table from parsed drop configs
    pub fn from_config<I: IntoIterator<Item = DropConfig>>(drops: I) -> Result<Self, TableError> {
        Self::from_entries(drops.into_iter().map(|d| {
            (
                d.item,
                DropEntry {
                    chance: d.chance,
                    unique: d.unique,
                    quests: d.quests,
                },
            )
        }))
    }

    /// Append an entry, rejecting out-of-range chances and duplicate items
    pub fn insert(&mut self, item: impl Into<String>, entry: DropEntry) -> Result<(), TableError> {
        let item = item.into();
        if item.is_empty() {
            return Err(TableError::EmptyItemName);
        }
        // Also rejects NaN
        if !(entry.chance > 0.0 && entry.chance <= 1.0) {
            return Err(TableError::ChanceOutOfRange {
                item,
                chance: entry.chance,
            });
        }
        if self.entries.iter().any(|(name, _)| *name == item) {
            return Err(TableError::DuplicateItem(item));
        }
        self.entries.push((item, entry));
        Ok(())
    }

    /// Look up an entry by item name
    pub fn get(&self, item: &str) -> Option<&DropEntry> {
        self.entries
            .iter()
            .find(|(name, _)| name == item)
            .map(|(_, entry)| entry)
    }

    /// Iterate entries in table order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DropEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
