mod products;
mod reviews;
mod snapshot;

#[cfg(test)]
pub(crate) mod testing;

use std::{sync::Arc, time::Duration};

use tracing::{error, info};

use crate::{
  models::{
    config::{Config, LOCAL_READ_DELAY_MS, LOCAL_WRITE_DELAY_MS, LocalConfig},
    time::{Clock, SystemClock},
  },
  store::{
    local::{FileKvStore, KeyValueStore},
    remote::{PgRemoteStore, RemoteStore},
  },
};

/// Pauses on the local path so callers keep a visible loading state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalDelays {
  pub read: Duration,
  pub write: Duration,
}

impl Default for LocalDelays {
  fn default() -> Self {
    Self {
      read: Duration::from_millis(LOCAL_READ_DELAY_MS),
      write: Duration::from_millis(LOCAL_WRITE_DELAY_MS),
    }
  }
}

impl LocalDelays {
  pub fn none() -> Self {
    Self { read: Duration::ZERO, write: Duration::ZERO }
  }
}

impl From<&LocalConfig> for LocalDelays {
  fn from(cfg: &LocalConfig) -> Self {
    Self {
      read: Duration::from_millis(cfg.read_delay_ms),
      write: Duration::from_millis(cfg.write_delay_ms),
    }
  }
}

/// Catalog access for products and reviews: remote collections first, the
/// local snapshot when the remote side is off, failing or empty.
#[derive(Debug)]
pub struct Gateway {
  pub(crate) remote_enabled: bool,
  pub(crate) remote: Option<Arc<dyn RemoteStore>>,
  pub(crate) local: Arc<dyn KeyValueStore>,
  pub(crate) delays: LocalDelays,
  pub(crate) clock: Arc<dyn Clock>,
}

#[derive(Debug)]
pub struct GatewayArgs {
  pub remote: Option<Arc<dyn RemoteStore>>,
  pub local: Arc<dyn KeyValueStore>,
  pub delays: LocalDelays,
  pub clock: Arc<dyn Clock>,
}

impl Gateway {
  /// Remote mode is on exactly when a remote store is given.
  pub fn new(args: GatewayArgs) -> Gateway {
    let remote_enabled = args.remote.is_some();
    if remote_enabled {
      info!("catalog gateway using remote collections");
    } else {
      info!("catalog gateway using local storage (offline mode)");
    }

    Gateway {
      remote_enabled,
      remote: args.remote,
      local: args.local,
      delays: args.delays,
      clock: args.clock,
    }
  }

  /// Remote mode follows `remote.endpoint` and `remote.access_key`. When both
  /// are set but the client can't be built, reads go local and creates still
  /// leave the local snapshot alone.
  pub fn from_config(cfg: &Config) -> Gateway {
    let local: Arc<dyn KeyValueStore> = Arc::new(FileKvStore::new(cfg.local.data_dir.clone()));
    let delays = LocalDelays::from(&cfg.local);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    if !cfg.remote.is_enabled() {
      return Gateway::new(GatewayArgs { remote: None, local, delays, clock });
    }

    match PgRemoteStore::connect_lazy(&cfg.remote) {
      Ok(store) => Gateway::new(GatewayArgs { remote: Some(Arc::new(store)), local, delays, clock }),
      Err(err) => {
        error!(error = %err, "failed to initialize remote store, reads fall back to local storage");
        Gateway { remote_enabled: true, remote: None, local, delays, clock }
      }
    }
  }

  pub fn is_remote_enabled(&self) -> bool {
    self.remote_enabled
  }

  pub(crate) async fn pause(&self, delay: Duration) {
    if !delay.is_zero() {
      tokio::time::sleep(delay).await;
    }
  }
}
