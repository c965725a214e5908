mod pgstore;

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use crate::store::errors::DBError;

pub use pgstore::PgRemoteStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
  Products,
  Reviews,
}

impl Collection {
  pub fn table(&self) -> &'static str {
    match self {
      Collection::Products => "products",
      Collection::Reviews => "reviews",
    }
  }
}

impl fmt::Display for Collection {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.table())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
  pub column: &'static str,
  pub descending: bool,
}

impl Order {
  pub const fn desc(column: &'static str) -> Self {
    Self { column, descending: true }
  }
}

/// Remote collection service. Rows travel as loosely typed JSON objects; the
/// gateway decodes them into its own records.
#[async_trait]
pub trait RemoteStore: fmt::Debug + Send + Sync {
  async fn select(&self, collection: Collection, order: Option<Order>)
  -> Result<Vec<Value>, DBError>;

  /// Returns the rows as stored by the remote side.
  async fn insert(&self, collection: Collection, row: Value) -> Result<Vec<Value>, DBError>;
}
