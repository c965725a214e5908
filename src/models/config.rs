use std::{fs, path::Path, path::PathBuf, time::Duration};

use serde::Deserialize;

use crate::models::errors::InternalError;

pub const LOCAL_READ_DELAY_MS: u64 = 300;
pub const LOCAL_WRITE_DELAY_MS: u64 = 500;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
  pub remote: RemoteConfig,
  pub local: LocalConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
  pub endpoint: String,
  pub access_key: String,
  pub max_connections: u32,
  pub acquire_timeout_ms: u64,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LocalConfig {
  pub data_dir: PathBuf,
  pub read_delay_ms: u64,
  pub write_delay_ms: u64,
}

impl Default for RemoteConfig {
  fn default() -> Self {
    RemoteConfig {
      endpoint: "".to_string(),
      access_key: "".to_string(),
      max_connections: 5,
      acquire_timeout_ms: 5000,
    }
  }
}

impl Default for LocalConfig {
  fn default() -> Self {
    LocalConfig {
      data_dir: PathBuf::from(".catalog"),
      read_delay_ms: LOCAL_READ_DELAY_MS,
      write_delay_ms: LOCAL_WRITE_DELAY_MS,
    }
  }
}

impl RemoteConfig {
  /// Remote mode needs both an endpoint and an access key.
  pub fn is_enabled(&self) -> bool {
    !self.endpoint.is_empty() && !self.access_key.is_empty()
  }

  pub fn acquire_timeout(&self) -> Duration {
    Duration::from_millis(self.acquire_timeout_ms)
  }
}

impl Config {
  pub fn load(path: impl AsRef<Path>) -> Result<Config, InternalError> {
    let path_str = "catalog.config.load";
    let yaml_string = fs::read_to_string(path.as_ref()).map_err(|err| InternalError {
      temp: false,
      msg: format!("failed to load config file {}", path.as_ref().display()),
      path: path_str.into(),
      err: Box::new(err),
    })?;

    Config::parse(&yaml_string)
  }

  pub fn parse(yaml_string: &str) -> Result<Config, InternalError> {
    serde_yaml::from_str(yaml_string).map_err(|err| InternalError {
      temp: false,
      msg: "failed to parse config data".into(),
      path: "catalog.config.parse".into(),
      err: Box::new(err),
    })
  }
}
