use std::{str::FromStr, sync::Arc};

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{
  Pool, Postgres, Row,
  postgres::{PgConnectOptions, PgPoolOptions},
};

use crate::{
  models::{config::RemoteConfig, errors::InternalError},
  store::errors::{DBError, ErrorType, handle_db_error},
};

use super::{Collection, Order, RemoteStore};

/// Remote collections kept as Postgres tables whose columns carry the wire
/// field names (`"reviewCount"`, `"avatarUrl"`, ...).
#[derive(Debug, Clone)]
pub struct PgRemoteStore {
  pub(crate) db: Arc<Pool<Postgres>>,
}

#[derive(Debug)]
pub struct PgRemoteStoreArgs {
  pub db: Arc<Pool<Postgres>>,
}

impl PgRemoteStore {
  pub fn new(args: PgRemoteStoreArgs) -> Self {
    Self { db: args.db }
  }

  /// Builds the pool without touching the network; the first query connects.
  /// Any endpoint sqlx accepts works, including socket-only URLs such as
  /// `postgres:///catalog?host=/run/postgresql`.
  pub fn connect_lazy(cfg: &RemoteConfig) -> Result<Self, InternalError> {
    let path = "catalog.remote.connect_lazy";
    let mk_err = |msg: &str, err: Box<dyn std::error::Error + Send + Sync>| InternalError {
      temp: false,
      err,
      msg: msg.into(),
      path: path.into(),
    };

    let opts = PgConnectOptions::from_str(&cfg.endpoint)
      .map_err(|e| mk_err("failed to parse remote store endpoint", Box::new(e)))?
      .password(&cfg.access_key);

    let db = PgPoolOptions::new()
      .max_connections(cfg.max_connections.max(1))
      .acquire_timeout(cfg.acquire_timeout())
      .connect_lazy_with(opts);

    Ok(Self::new(PgRemoteStoreArgs { db: Arc::new(db) }))
  }
}

fn select_sql(collection: Collection, order: Option<Order>) -> String {
  let mut sql = format!(r#"SELECT row_to_json(t.*) AS doc FROM {} AS t"#, collection.table());
  if let Some(order) = order {
    let direction = if order.descending { "DESC" } else { "ASC" };
    sql.push_str(&format!(r#" ORDER BY t."{}" {}"#, order.column, direction));
  }
  sql
}

fn insert_sql(collection: Collection) -> String {
  let table = collection.table();
  format!(
    r#"INSERT INTO {table} AS t SELECT * FROM jsonb_populate_record(NULL::{table}, $1) RETURNING row_to_json(t.*) AS doc"#
  )
}

fn rows_to_docs(rows: Vec<sqlx::postgres::PgRow>, path: &str) -> Result<Vec<Value>, DBError> {
  rows
    .iter()
    .map(|row| {
      row.try_get::<Value, _>("doc").map_err(|err| {
        DBError::new(
          ErrorType::JsonUnmarshal,
          Some(Box::new(err)),
          "failed to read row document",
          path,
          "",
        )
      })
    })
    .collect()
}

#[async_trait]
impl RemoteStore for PgRemoteStore {
  async fn select(
    &self,
    collection: Collection,
    order: Option<Order>,
  ) -> Result<Vec<Value>, DBError> {
    let path = "catalog.remote.select";
    let sql = select_sql(collection, order);

    let rows = sqlx::query(&sql)
      .fetch_all(self.db.as_ref())
      .await
      .map_err(|err| handle_db_error(err, path))?;

    rows_to_docs(rows, path)
  }

  async fn insert(&self, collection: Collection, row: Value) -> Result<Vec<Value>, DBError> {
    let path = "catalog.remote.insert";
    let sql = insert_sql(collection);

    let rows = sqlx::query(&sql)
      .bind(row)
      .fetch_all(self.db.as_ref())
      .await
      .map_err(|err| handle_db_error(err, path))?;

    rows_to_docs(rows, path)
  }
}
