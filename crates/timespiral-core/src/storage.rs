//! Persistence boundary.
//!
//! The core never serializes state implicitly; frontends inject an
//! `EventStore` into the session's owner and decide when to load and
//! save. Events and config travel as JSON with ISO-8601 date strings.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::ViewConfig;
use crate::event::TimeEvent;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io: {0}")]
    Io(#[from] io::Error),
    #[error("storage encoding: {0}")]
    Encoding(#[from] serde_json::Error),
}

pub trait EventStore {
    fn load_events(&self) -> Result<Vec<TimeEvent>, StorageError>;
    fn save_events(&self, events: &[TimeEvent]) -> Result<(), StorageError>;
    fn load_config(&self) -> Result<ViewConfig, StorageError>;
    fn save_config(&self, config: &ViewConfig) -> Result<(), StorageError>;
}

/// JSON files in a directory, events and config stored separately.
/// Missing files read back as empty/default state.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn events_path(&self) -> PathBuf {
        self.dir.join("events.json")
    }

    fn config_path(&self) -> PathBuf {
        self.dir.join("config.json")
    }

    fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>, StorageError> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(Some(serde_json::from_str(&text)?)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write_json<T: serde::Serialize>(&self, path: &Path, value: &T) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(path, serde_json::to_string_pretty(value)?)?;
        Ok(())
    }
}

impl EventStore for JsonFileStore {
    fn load_events(&self) -> Result<Vec<TimeEvent>, StorageError> {
        Ok(Self::read_json(&self.events_path())?.unwrap_or_default())
    }

    fn save_events(&self, events: &[TimeEvent]) -> Result<(), StorageError> {
        self.write_json(&self.events_path(), &events)
    }

    fn load_config(&self) -> Result<ViewConfig, StorageError> {
        Ok(Self::read_json(&self.config_path())?.unwrap_or_default())
    }

    fn save_config(&self, config: &ViewConfig) -> Result<(), StorageError> {
        self.write_json(&self.config_path(), config)
    }
}
