// Persisted state as a single JSON file.
//
// Контракт простой: одно чтение при старте, одна запись на каждом пути
// выхода. Конкурентных запусков нет — их сериализует внешний планировщик.
use crate::model::{PersistedState, StorageError};
use std::fs;
use std::path::PathBuf;
use tracing::info;

pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Читает состояние; если файла ещё нет — возвращает пустое.
    pub fn load(&self) -> Result<PersistedState, StorageError> {
        if !self.path.exists() {
            info!("No state file at {}, starting fresh", self.path.display());
            return Ok(PersistedState::default());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, state: &PersistedState) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
