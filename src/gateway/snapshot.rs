use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::{
  gateway::Gateway,
  store::{
    errors::{DBError, ErrorType},
    remote::{Collection, Order},
  },
};

/// Where one entity lives on each side, and what seeds an empty local store.
pub(super) struct Catalog<T> {
  pub collection: Collection,
  pub key: &'static str,
  pub order: Option<Order>,
  pub defaults: fn() -> Vec<T>,
}

/// Keeps every row that decodes; the rest are logged and dropped.
fn decode_rows<T: DeserializeOwned>(collection: Collection, rows: Vec<Value>) -> Vec<T> {
  rows
    .into_iter()
    .enumerate()
    .filter_map(|(idx, row)| match serde_json::from_value::<T>(row) {
      Ok(decoded) => Some(decoded),
      Err(err) => {
        warn!(collection = %collection, row = idx, error = %err, "skipping malformed remote row");
        None
      }
    })
    .collect()
}

impl Gateway {
  pub(super) async fn list_catalog<T>(&self, c: &Catalog<T>) -> Result<Vec<T>, DBError>
  where
    T: Serialize + DeserializeOwned,
  {
    if let Some(rows) = self.remote_rows(c).await {
      return Ok(rows);
    }

    self.pause(self.delays.read).await;
    self.local_rows(c).await
  }

  pub(super) async fn create_in_catalog<T>(&self, c: &Catalog<T>, record: T) -> Result<T, DBError>
  where
    T: Serialize + DeserializeOwned,
  {
    if let Some(remote) = &self.remote {
      match serde_json::to_value(&record) {
        Ok(row) => match remote.insert(c.collection, row).await {
          Ok(rows) => {
            let confirmed = rows.into_iter().next().map(serde_json::from_value::<T>);
            return match confirmed {
              Some(Ok(confirmed)) => Ok(confirmed),
              Some(Err(err)) => {
                warn!(collection = %c.collection, error = %err, "remote insert returned an undecodable row");
                Ok(record)
              }
              None => Ok(record),
            };
          }
          Err(err) => {
            error!(collection = %c.collection, error = %err, "remote insert failed");
          }
        },
        Err(err) => {
          error!(collection = %c.collection, error = %err, "failed to encode record for remote insert");
        }
      }
    }

    self.pause(self.delays.write).await;

    // an enabled remote owns the catalog; the local snapshot is not a write-behind cache
    if !self.remote_enabled {
      let mut current = self.list_catalog(c).await?;
      current.insert(0, record);
      self.local_write(c, &current).await?;
      return Ok(current.swap_remove(0));
    }

    Ok(record)
  }

  async fn remote_rows<T: DeserializeOwned>(&self, c: &Catalog<T>) -> Option<Vec<T>> {
    let remote = self.remote.as_ref()?;

    match remote.select(c.collection, c.order).await {
      Ok(rows) if rows.is_empty() => {
        warn!(collection = %c.collection, "remote collection is empty, falling back to local storage");
        None
      }
      Ok(rows) => {
        let decoded = decode_rows::<T>(c.collection, rows);
        if decoded.is_empty() {
          warn!(collection = %c.collection, "no remote row could be decoded, falling back to local storage");
          return None;
        }
        Some(decoded)
      }
      Err(err) => {
        warn!(collection = %c.collection, error = %err, "remote select failed, falling back to local storage");
        None
      }
    }
  }

  async fn local_rows<T>(&self, c: &Catalog<T>) -> Result<Vec<T>, DBError>
  where
    T: Serialize + DeserializeOwned,
  {
    match self.local.get(c.key).await? {
      Some(stored) => serde_json::from_str(&stored).map_err(|err| {
        DBError::new(
          ErrorType::JsonUnmarshal,
          Some(Box::new(err)),
          "local snapshot is not valid JSON",
          "catalog.gateway.local_rows",
          c.key,
        )
      }),
      None => {
        let defaults = (c.defaults)();
        self.local_write(c, &defaults).await?;
        debug!(key = c.key, count = defaults.len(), "seeded local storage with bundled defaults");
        Ok(defaults)
      }
    }
  }

  async fn local_write<T: Serialize>(&self, c: &Catalog<T>, rows: &[T]) -> Result<(), DBError> {
    let encoded = serde_json::to_string(rows).map_err(|err| {
      DBError::new(
        ErrorType::JsonMarshal,
        Some(Box::new(err)),
        "failed to encode local snapshot",
        "catalog.gateway.local_write",
        c.key,
      )
    })?;

    self.local.set(c.key, &encoded).await
  }
}
