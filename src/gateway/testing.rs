use std::sync::{
  Arc, Mutex,
  atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde_json::Value;

use crate::{
  gateway::{Gateway, GatewayArgs, LocalDelays},
  models::time::FixedClock,
  store::{
    errors::{DBError, ErrorType},
    local::KeyValueStore,
    remote::{Collection, Order, RemoteStore},
  },
};

#[derive(Debug, Clone)]
pub(crate) enum SelectBehavior {
  Fail,
  Empty,
  Rows(Vec<Value>),
}

#[derive(Debug, Clone)]
pub(crate) enum InsertBehavior {
  Fail,
  Echo,
  Confirm(Value),
}

#[derive(Debug)]
pub(crate) struct FakeRemote {
  select: SelectBehavior,
  insert: InsertBehavior,
  selects: AtomicUsize,
  last_order: Mutex<Option<Order>>,
  inserted: Mutex<Vec<Value>>,
}

impl FakeRemote {
  pub(crate) fn new(select: SelectBehavior) -> Self {
    Self {
      select,
      insert: InsertBehavior::Fail,
      selects: AtomicUsize::new(0),
      last_order: Mutex::new(None),
      inserted: Mutex::new(Vec::new()),
    }
  }

  pub(crate) fn with_insert(mut self, insert: InsertBehavior) -> Self {
    self.insert = insert;
    self
  }

  pub(crate) fn selects(&self) -> usize {
    self.selects.load(Ordering::SeqCst)
  }

  pub(crate) fn last_order(&self) -> Option<Order> {
    *self.last_order.lock().unwrap()
  }

  pub(crate) fn inserted(&self) -> Vec<Value> {
    self.inserted.lock().unwrap().clone()
  }
}

fn unreachable_remote(path: &str) -> DBError {
  DBError::new(ErrorType::Connection, None, "remote store is unreachable", path, "")
}

#[async_trait]
impl RemoteStore for FakeRemote {
  async fn select(
    &self,
    _collection: Collection,
    order: Option<Order>,
  ) -> Result<Vec<Value>, DBError> {
    self.selects.fetch_add(1, Ordering::SeqCst);
    *self.last_order.lock().unwrap() = order;
    match &self.select {
      SelectBehavior::Fail => Err(unreachable_remote("fake.select")),
      SelectBehavior::Empty => Ok(vec![]),
      SelectBehavior::Rows(rows) => Ok(rows.clone()),
    }
  }

  async fn insert(&self, _collection: Collection, row: Value) -> Result<Vec<Value>, DBError> {
    self.inserted.lock().unwrap().push(row.clone());
    match &self.insert {
      InsertBehavior::Fail => Err(unreachable_remote("fake.insert")),
      InsertBehavior::Echo => Ok(vec![row]),
      InsertBehavior::Confirm(confirmed) => Ok(vec![confirmed.clone()]),
    }
  }
}

pub(crate) fn fixed_clock() -> FixedClock {
  FixedClock(Utc.with_ymd_and_hms(2024, 10, 5, 9, 30, 0).unwrap().fixed_offset())
}

pub(crate) fn local_gateway(local: Arc<dyn KeyValueStore>) -> Gateway {
  Gateway::new(GatewayArgs {
    remote: None,
    local,
    delays: LocalDelays::none(),
    clock: Arc::new(fixed_clock()),
  })
}

pub(crate) fn remote_gateway(remote: Arc<FakeRemote>, local: Arc<dyn KeyValueStore>) -> Gateway {
  Gateway::new(GatewayArgs {
    remote: Some(remote),
    local,
    delays: LocalDelays::none(),
    clock: Arc::new(fixed_clock()),
  })
}
