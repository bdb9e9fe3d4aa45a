// Core structs: Category, ProductRecord, Snapshot, PersistedState, ChangeSet
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// Каноническая запись товара, собранная из сырого ответа каталога.
#[derive(Debug, Clone)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub price_rub: Option<f64>,
    pub category: String,
}

impl ProductRecord {
    /// Форма, в которой товар хранится между запусками (id живёт в ключе снапшота).
    pub fn stored(&self) -> StoredProduct {
        StoredProduct {
            name: self.name.clone(),
            price_rub: self.price_rub,
            category: self.category.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredProduct {
    pub name: String,
    pub price_rub: Option<f64>,
    pub category: String,
}

/// Все наблюдаемые товары текущего запуска, по одному на id.
pub type Snapshot = HashMap<String, StoredProduct>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedState {
    pub initialized: bool,
    #[serde(default, rename = "products")]
    pub snapshot: Snapshot,
    #[serde(default)]
    pub last_heartbeat_date: Option<String>,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            initialized: false,
            snapshot: Snapshot::new(),
            last_heartbeat_date: None,
        }
    }
}

#[derive(Debug, Default)]
pub struct ChangeSet {
    pub added: Vec<StoredProduct>,
    pub changed: Vec<(StoredProduct, StoredProduct)>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.changed.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("bad state json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("telegram api error [{status}]: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("telegram unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Notify(#[from] NotifyError),
}
