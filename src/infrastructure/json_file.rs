use crate::domain::menu::MenuItem;
use crate::domain::ports::MenuStore;
use crate::error::Result;
use crate::interfaces::json::menu_codec::{self, MenuRecord};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Stores the menu as a pretty-printed JSON array of `MenuRecord`s.
///
/// Writes are not atomic; a failed save can leave a truncated file behind.
#[derive(Debug, Clone)]
pub struct JsonFileMenuStore {
    path: PathBuf,
}

impl JsonFileMenuStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MenuStore for JsonFileMenuStore {
    fn save(&mut self, items: &[MenuItem]) -> Result<()> {
        let records = menu_codec::serialize(items);
        let mut writer = BufWriter::new(File::create(&self.path)?);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
        records.serialize(&mut serializer)?;
        writer.flush()?;
        tracing::debug!(path = %self.path.display(), count = items.len(), "menu saved");
        Ok(())
    }

    fn load(&self) -> Result<Vec<MenuItem>> {
        let reader = BufReader::new(File::open(&self.path)?);
        let records: Vec<MenuRecord> = serde_json::from_reader(reader)?;
        let items = menu_codec::deserialize(records)?;
        tracing::debug!(path = %self.path.display(), count = items.len(), "menu loaded");
        Ok(items)
    }
}
