use std::{io::ErrorKind, path::PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::{
  store::errors::{DBError, ErrorType},
  utils::ids::new_id,
};

use super::KeyValueStore;

/// One `<key>.json` file per key under `dir`.
#[derive(Debug, Clone)]
pub struct FileKvStore {
  dir: PathBuf,
}

impl FileKvStore {
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self { dir: dir.into() }
  }

  fn key_path(&self, key: &str) -> PathBuf {
    let file: String = key
      .chars()
      .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
      .collect();
    self.dir.join(format!("{}.json", file))
  }
}

#[async_trait]
impl KeyValueStore for FileKvStore {
  async fn get(&self, key: &str) -> Result<Option<String>, DBError> {
    let path = self.key_path(key);
    match fs::read_to_string(&path).await {
      Ok(value) => Ok(Some(value)),
      Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
      Err(err) => Err(DBError::new(
        ErrorType::Io,
        Some(Box::new(err)),
        "failed to read local snapshot",
        "catalog.local.file.get",
        path.display().to_string(),
      )),
    }
  }

  async fn set(&self, key: &str, value: &str) -> Result<(), DBError> {
    let path_str = "catalog.local.file.set";
    let mk_err = |msg: &str, err: std::io::Error| {
      DBError::new(ErrorType::Io, Some(Box::new(err)), msg, path_str, self.dir.display().to_string())
    };

    fs::create_dir_all(&self.dir)
      .await
      .map_err(|e| mk_err("failed to create local data directory", e))?;

    // write aside then rename so readers never see a half-written snapshot
    let target = self.key_path(key);
    let tmp = self.dir.join(format!(".{}.tmp", new_id()));
    fs::write(&tmp, value).await.map_err(|e| mk_err("failed to write local snapshot", e))?;
    if let Err(err) = fs::rename(&tmp, &target).await {
      let _ = fs::remove_file(&tmp).await;
      return Err(mk_err("failed to replace local snapshot", err));
    }

    Ok(())
  }
}
