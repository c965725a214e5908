mod file;
mod memory;

use std::fmt;

use async_trait::async_trait;

use crate::store::errors::DBError;

pub use file::FileKvStore;
pub use memory::MemoryKvStore;

pub const PRODUCTS_KEY: &str = "db_candles_v1";
pub const REVIEWS_KEY: &str = "db_reviews_v1";

/// Durable string-keyed, string-valued storage that outlives the process.
#[async_trait]
pub trait KeyValueStore: fmt::Debug + Send + Sync {
  async fn get(&self, key: &str) -> Result<Option<String>, DBError>;
  async fn set(&self, key: &str, value: &str) -> Result<(), DBError>;
}
