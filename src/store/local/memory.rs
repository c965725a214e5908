use std::{
  collections::HashMap,
  sync::atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::store::errors::DBError;

use super::KeyValueStore;

/// Process-local store that counts every write.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
  entries: Mutex<HashMap<String, String>>,
  writes: AtomicUsize,
}

impl MemoryKvStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn writes(&self) -> usize {
    self.writes.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl KeyValueStore for MemoryKvStore {
  async fn get(&self, key: &str) -> Result<Option<String>, DBError> {
    Ok(self.entries.lock().await.get(key).cloned())
  }

  async fn set(&self, key: &str, value: &str) -> Result<(), DBError> {
    self.entries.lock().await.insert(key.to_string(), value.to_string());
    self.writes.fetch_add(1, Ordering::SeqCst);
    Ok(())
  }
}
