use crate::domain::menu::MenuItem;
use crate::domain::ports::MenuStore;
use crate::error::Result;
use crate::interfaces::json::menu_codec::{self, MenuRecord};

/// Keeps the serialized menu records in memory.
///
/// Goes through the same record codec as the file store, so it behaves like a
/// file that never touches disk. Handy for tests.
#[derive(Debug, Default, Clone)]
pub struct InMemoryMenuStore {
    records: Vec<MenuRecord>,
}

impl InMemoryMenuStore {
    /// Creates a new, empty in-memory menu store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store preloaded with raw records.
    pub fn with_records(records: Vec<MenuRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[MenuRecord] {
        &self.records
    }
}

impl MenuStore for InMemoryMenuStore {
    fn save(&mut self, items: &[MenuItem]) -> Result<()> {
        self.records = menu_codec::serialize(items);
        Ok(())
    }

    fn load(&self) -> Result<Vec<MenuItem>> {
        menu_codec::deserialize(self.records.clone())
    }
}
