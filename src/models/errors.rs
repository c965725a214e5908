use std::error::Error;

use derive_more::Display;
use thiserror::Error as ThisError;

use crate::store::errors::{BoxedErr, DBError};

#[derive(Debug, Display)]
#[display("InternalError: {} {} {} {}", temp, err, msg, path)]
pub struct InternalError {
  pub temp: bool,
  pub err: BoxedErr,
  pub msg: String,
  pub path: String,
}

impl Error for InternalError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    Some(&*self.err)
  }
}

/// A draft rejected before reaching any store.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("{where_}: {field}: {id}")]
pub struct AppError {
  pub where_: String,
  pub field: String,
  pub id: String,
}

impl AppError {
  pub fn new(where_: impl Into<String>, field: impl Into<String>, id: impl Into<String>) -> Self {
    Self { where_: where_.into(), field: field.into(), id: id.into() }
  }
}

#[derive(Debug, ThisError)]
pub enum GatewayError {
  #[error(transparent)]
  Invalid(#[from] AppError),
  #[error(transparent)]
  Store(#[from] DBError),
}

impl GatewayError {
  pub fn as_invalid(&self) -> Option<&AppError> {
    match self {
      GatewayError::Invalid(err) => Some(err),
      GatewayError::Store(_) => None,
    }
  }
}
