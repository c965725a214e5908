use std::error::Error;
use std::fmt;

use sqlx::error::Error as SqlxError;
use sqlx::postgres::PgDatabaseError;

pub type BoxedErr = Box<dyn Error + Send + Sync>;

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorType {
  NoRows,
  UniqueViolation,
  NotNullViolation,
  JsonMarshal,
  JsonUnmarshal,
  Connection,
  Privileges,
  Io,
  Internal,
}

impl fmt::Display for ErrorType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ErrorType::NoRows => write!(f, "no_rows"),
      ErrorType::UniqueViolation => write!(f, "unique_violation"),
      ErrorType::NotNullViolation => write!(f, "not_null_violation"),
      ErrorType::JsonMarshal => write!(f, "json_marshal"),
      ErrorType::JsonUnmarshal => write!(f, "json_unmarshal"),
      ErrorType::Connection => write!(f, "connection_exception"),
      ErrorType::Privileges => write!(f, "insufficient_privilege"),
      ErrorType::Io => write!(f, "io_error"),
      ErrorType::Internal => write!(f, "internal_error"),
    }
  }
}

/// Failure reported by either backing store. The remote one is swallowed by
/// the gateway, the local one reaches the caller.
#[derive(Debug)]
pub struct DBError {
  pub err_type: ErrorType,
  pub err: Option<BoxedErr>,
  pub msg: String,
  pub path: String,
  pub details: String,
}

impl fmt::Display for DBError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut parts = Vec::new();

    if !self.path.is_empty() {
      parts.push(format!("path: {}", self.path));
    }

    parts.push(format!("err_type: {}", self.err_type));

    if !self.msg.is_empty() {
      parts.push(format!("msg: {}", self.msg));
    }

    if !self.details.is_empty() {
      parts.push(format!("details: {}", self.details));
    }

    if let Some(ref err) = self.err {
      parts.push(format!("err: {}", err));
    }

    write!(f, "{}", parts.join(", "))
  }
}

impl Error for DBError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    self.err.as_ref().map(|e| &**e as &dyn Error)
  }
}

impl DBError {
  pub fn new(
    err_type: ErrorType,
    err: Option<BoxedErr>,
    msg: impl Into<String>,
    path: impl Into<String>,
    details: impl Into<String>,
  ) -> Self {
    Self { err_type, err, msg: msg.into(), path: path.into(), details: details.into() }
  }
}

pub fn handle_db_error(err: SqlxError, path: &str) -> DBError {
  match err {
    SqlxError::Database(db_err) => {
      let (code, details, column) = match db_err.try_downcast_ref::<PgDatabaseError>() {
        Some(pg_err) => (
          pg_err.code().to_string(),
          pg_err.detail().unwrap_or("").to_string(),
          pg_err.column().unwrap_or("field").to_string(),
        ),
        None => (String::new(), String::new(), "field".to_string()),
      };

      let (err_type, msg) = match code.as_str() {
        "23505" => (ErrorType::UniqueViolation, "record already exists".to_string()),
        "23502" => (ErrorType::NotNullViolation, format!("{} cannot be null", column)),
        "08000" | "08003" | "08006" => {
          (ErrorType::Connection, "database connection exception".to_string())
        }
        "42501" => {
          (ErrorType::Privileges, "insufficient permissions to perform an action".to_string())
        }
        _ => (ErrorType::Internal, "database error".to_string()),
      };

      DBError::new(err_type, Some(Box::new(SqlxError::Database(db_err))), msg, path, details)
    }

    SqlxError::RowNotFound => DBError::new(
      ErrorType::NoRows,
      Some(Box::new(SqlxError::RowNotFound)),
      "the requested resource is not found",
      path,
      "",
    ),

    SqlxError::PoolTimedOut | SqlxError::PoolClosed | SqlxError::Io(_) | SqlxError::Tls(_) => {
      DBError::new(ErrorType::Connection, Some(Box::new(err)), "remote store is unreachable", path, "")
    }

    _ => DBError::new(ErrorType::Internal, Some(Box::new(err)), "database error", path, ""),
  }
}
