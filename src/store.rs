use crate::todo::Todo;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The full persisted snapshot: next-id counter plus all todos in
/// insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataFile {
    #[serde(alias = "AvailableId")]
    pub available_id: u32,
    #[serde(alias = "Todos")]
    pub todos: Vec<Todo>,
}

impl DataFile {
    /// An empty snapshot, ready for the first todo to take id 1.
    pub fn new() -> Self {
        Self {
            available_id: 1,
            todos: Vec::new(),
        }
    }
}

impl Default for DataFile {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("data file not found")]
    NotFound,
    #[error("data file is corrupted: {0}")]
    Corrupt(#[source] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The atomic read/write boundary around a [`DataFile`] on disk.
///
/// Every mutation goes through a full read-modify-write cycle; writes land in
/// a sibling temp file first and are renamed over the target, so a crash
/// mid-write never leaves a torn data file behind.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Reads and parses the whole data file.
    ///
    /// A missing file is [`StoreError::NotFound`]; a file that exists but
    /// does not parse into a valid [`DataFile`] is [`StoreError::Corrupt`].
    /// No partial or defaulted snapshot is ever returned.
    pub fn read(&self) -> Result<DataFile, StoreError> {
        if !self.path.exists() {
            return Err(StoreError::NotFound);
        }

        // decode leniently: bytes that are not valid UTF-8 still reach the
        // parser, which then reports the file as corrupt rather than the
        // read failing as an opaque I/O error
        let bytes = fs::read(&self.path)?;
        let contents = String::from_utf8_lossy(&bytes);
        serde_json::from_str(&contents).map_err(StoreError::Corrupt)
    }

    /// Serializes the whole snapshot and atomically replaces the data file.
    pub fn write(&self, data: &DataFile) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(data)
            .map_err(|err| StoreError::Io(std::io::Error::other(err)))?;

        let mut temp_path = self.path.clone().into_os_string();
        temp_path.push(".tmp");
        let temp_path = PathBuf::from(temp_path);

        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::Status;
    use chrono::Utc;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonStore {
        JsonStore::new(dir.path().join("data.json"))
    }

    #[test]
    fn reading_missing_file_reports_not_found() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(matches!(store.read(), Err(StoreError::NotFound)));
    }

    #[test]
    fn reading_unparseable_file_reports_corrupt() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{ not json").unwrap();

        assert!(matches!(store.read(), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn reading_non_utf8_file_reports_corrupt() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), [0xff, 0xfe, 0x7b, 0x7d, 0xff]).unwrap();

        assert!(matches!(store.read(), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn reading_valid_json_with_wrong_shape_reports_corrupt() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"todos": []}"#).unwrap();

        // availableId is missing; no defaulted snapshot may be produced
        assert!(matches!(store.read(), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn written_data_file_reads_back_equal() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut data = DataFile::new();
        let now = Utc::now();
        data.todos.push(Todo::new(1, "buy milk".to_string(), now));
        data.todos.push(Todo {
            id: 2,
            description: "walk dog".to_string(),
            status: Status::Done,
            created_at: now,
            updated_at: now,
        });
        data.available_id = 3;

        store.write(&data).unwrap();
        let loaded = store.read().unwrap();

        assert_eq!(loaded, data);
    }

    #[test]
    fn write_leaves_no_temp_file_behind() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.write(&DataFile::new()).unwrap();

        assert!(!dir.path().join("data.json.tmp").exists());
    }

    #[test]
    fn writer_pretty_prints_camel_case_fields() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.write(&DataFile::new()).unwrap();
        let contents = fs::read_to_string(store.path()).unwrap();

        assert!(contents.contains("\"availableId\": 1"));
        assert!(contents.contains('\n'));
    }

    #[test]
    fn reader_accepts_pascal_case_fields() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"{
                "AvailableId": 2,
                "Todos": [
                    {
                        "Id": 1,
                        "Description": "legacy",
                        "Status": "Todo",
                        "CreatedAt": "2024-01-01T00:00:00Z",
                        "UpdatedAt": "2024-01-01T00:00:00Z"
                    }
                ]
            }"#,
        )
        .unwrap();

        let data = store.read().unwrap();

        assert_eq!(data.available_id, 2);
        assert_eq!(data.todos.len(), 1);
        assert_eq!(data.todos[0].description, "legacy");
    }

    #[test]
    fn stray_partial_temp_file_does_not_corrupt_existing_data() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut data = DataFile::new();
        data.todos
            .push(Todo::new(1, "keep me".to_string(), Utc::now()));
        data.available_id = 2;
        store.write(&data).unwrap();

        // a crash between temp-file write and rename leaves garbage at the
        // temp path; the target must still read back as the prior version
        fs::write(dir.path().join("data.json.tmp"), "{ half-writ").unwrap();

        let loaded = store.read().unwrap();
        assert_eq!(loaded, data);
    }
}
