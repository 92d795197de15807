//! @acp:module "Persistence"
//! @acp:summary "Durable local copy of the answer set under one fixed key"
//! @acp:domain cli
//! @acp:layer service

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

use crate::error::{QudError, Result};
use crate::form::FormData;

/// Fixed key the answers are stored under
pub const STORAGE_KEY: &str = "questionsUpDownData";

/// Storage backend trait - one persisted copy of the form
pub trait Store {
    /// Read the persisted copy; `Ok(None)` when nothing was saved yet
    fn load(&self) -> Result<Option<FormData>>;

    /// Replace the persisted copy
    fn save(&mut self, data: &FormData) -> Result<()>;

    /// Remove the persisted copy; succeeds when there is none
    fn clear(&mut self) -> Result<()>;
}

/// Default data directory: `<platform data dir>/questions-up-down`
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("questions-up-down")
}

/// @acp:summary "Pretty-printed JSON file named after the storage key"
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store inside `dir`, as `<dir>/questionsUpDownData.json`
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", STORAGE_KEY)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Store for JsonFileStore {
    fn load(&self) -> Result<Option<FormData>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let data: FormData = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            QudError::StorageCorrupt(format!("{}: {}", self.path.display(), e))
        })?;
        Ok(Some(data))
    }

    fn save(&mut self, data: &FormData) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(writer, data)?;
        tracing::debug!("Saved {} fields to {}", data.len(), self.path.display());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process store, used by tests and dry runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saved: Option<FormData>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: FormData) -> Self {
        Self { saved: Some(data) }
    }

    pub fn saved(&self) -> Option<&FormData> {
        self.saved.as_ref()
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Result<Option<FormData>> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, data: &FormData) -> Result<()> {
        self.saved = Some(data.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.saved = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::FieldId;
    use tempfile::TempDir;

    fn sample() -> FormData {
        let mut data = FormData::new();
        data.set("problem-what".parse::<FieldId>().unwrap(), "Users waste time");
        data
    }

    #[test]
    fn test_missing_file_loads_none() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::in_dir(temp.path());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let temp = TempDir::new().unwrap();
        let mut store = JsonFileStore::in_dir(temp.path().join("nested"));
        store.save(&sample()).unwrap();

        assert!(store.path().ends_with("questionsUpDownData.json"));
        assert_eq!(store.load().unwrap(), Some(sample()));
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::in_dir(temp.path());
        fs::write(store.path(), "{ not json").unwrap();

        assert!(matches!(store.load(), Err(QudError::StorageCorrupt(_))));
    }

    #[test]
    fn test_clear_removes_file_and_tolerates_absence() {
        let temp = TempDir::new().unwrap();
        let mut store = JsonFileStore::in_dir(temp.path());
        store.save(&sample()).unwrap();

        store.clear().unwrap();
        assert!(!store.path().exists());
        store.clear().unwrap();
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());
        store.save(&sample()).unwrap();
        assert_eq!(store.saved(), Some(&sample()));
        store.clear().unwrap();
        assert!(store.saved().is_none());
    }
}
