use crate::errors::AppError;
use crate::models::SubscriptionRecord;
use async_trait::async_trait;
use std::{
    env,
    path::PathBuf,
    sync::Mutex,
};
use tokio::fs;
use tracing::error;

/// One string-valued slot of durable storage. `read` returns `None` when the
/// slot has never been written or cannot be reached.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    async fn read(&self) -> Option<String>;
    async fn write(&self, payload: &str) -> std::io::Result<()>;
}

pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl StorageBackend for JsonFileStorage {
    async fn read(&self) -> Option<String> {
        match fs::read_to_string(&self.path).await {
            Ok(payload) => Some(payload),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                error!("failed to read data file: {err}");
                None
            }
        }
    }

    async fn write(&self, payload: &str) -> std::io::Result<()> {
        fs::write(&self.path, payload).await
    }
}

/// In-memory backend, used as a stand-in for the file in tests.
#[derive(Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

#[async_trait]
impl StorageBackend for MemoryStorage {
    async fn read(&self) -> Option<String> {
        self.slot.lock().unwrap().clone()
    }

    async fn write(&self, payload: &str) -> std::io::Result<()> {
        *self.slot.lock().unwrap() = Some(payload.to_string());
        Ok(())
    }
}

/// Canonical ordered record list, mirrored to the backend on every mutation.
/// Record identity is positional; indices go stale on any structural change.
pub struct RecordStore {
    backend: Box<dyn StorageBackend>,
    records: Vec<SubscriptionRecord>,
}

impl RecordStore {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self {
            backend,
            records: Vec::new(),
        }
    }

    /// A missing or malformed document leaves the list empty; the failure is
    /// logged but never surfaced.
    pub async fn load(&mut self) {
        self.records = match self.backend.read().await {
            Some(payload) => match serde_json::from_str(&payload) {
                Ok(records) => records,
                Err(err) => {
                    error!("failed to parse stored records: {err}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
    }

    pub async fn persist(&self) -> Result<(), AppError> {
        let payload = serde_json::to_string_pretty(&self.records).map_err(AppError::internal)?;
        self.backend.write(&payload).await?;
        Ok(())
    }

    pub fn records(&self) -> &[SubscriptionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SubscriptionRecord> {
        self.records.get(index)
    }

    pub fn add(&mut self, record: SubscriptionRecord) {
        self.records.push(record);
    }

    pub fn update(&mut self, index: usize, record: SubscriptionRecord) -> Result<(), AppError> {
        let slot = self
            .records
            .get_mut(index)
            .ok_or_else(|| AppError::not_found(format!("no record at index {index}")))?;
        *slot = record;
        Ok(())
    }

    pub fn delete(&mut self, index: usize) -> Result<(), AppError> {
        if index >= self.records.len() {
            return Err(AppError::not_found(format!("no record at index {index}")));
        }
        self.records.remove(index);
        Ok(())
    }
}

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/records.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, plan: &str) -> SubscriptionRecord {
        SubscriptionRecord {
            name: name.to_string(),
            phone: "555-0100".to_string(),
            plan: plan.to_string(),
            price: "10".to_string(),
            start: "2024-01-01".to_string(),
            end: "2024-02-01".to_string(),
        }
    }

    #[tokio::test]
    async fn load_from_empty_backend_yields_empty_list() {
        let mut store = RecordStore::new(Box::new(MemoryStorage::default()));
        store.load().await;
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn load_malformed_payload_yields_empty_list() {
        let backend = MemoryStorage::default();
        backend.write("not json at all").await.unwrap();
        let mut store = RecordStore::new(Box::new(backend));
        store.load().await;
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn persist_then_load_round_trips() {
        let mut store = RecordStore::new(Box::new(MemoryStorage::default()));
        store.add(record("Alice", "VPN"));
        store.add(record("Bob", "Zoom"));
        store.persist().await.unwrap();

        store.load().await;
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0).unwrap().name, "Alice");
        assert_eq!(store.get(1).unwrap().name, "Bob");
    }

    #[tokio::test]
    async fn update_replaces_in_place_and_keeps_order() {
        let mut store = RecordStore::new(Box::new(MemoryStorage::default()));
        store.add(record("Alice", "VPN"));
        store.add(record("Bob", "Zoom"));

        store.update(0, record("Alicia", "VPN")).unwrap();
        assert_eq!(store.get(0).unwrap().name, "Alicia");
        assert_eq!(store.get(1).unwrap().name, "Bob");
    }

    #[tokio::test]
    async fn update_out_of_range_is_rejected() {
        let mut store = RecordStore::new(Box::new(MemoryStorage::default()));
        store.add(record("Alice", "VPN"));
        let err = store.update(1, record("Bob", "Zoom")).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::NOT_FOUND);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn delete_shifts_later_records_down() {
        let mut store = RecordStore::new(Box::new(MemoryStorage::default()));
        store.add(record("Alice", "VPN"));
        store.add(record("Bob", "Zoom"));
        store.add(record("Carol", "Spotify"));

        store.delete(1).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0).unwrap().name, "Alice");
        assert_eq!(store.get(1).unwrap().name, "Carol");

        assert!(store.delete(2).is_err());
    }
}
