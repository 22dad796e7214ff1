use thiserror::Error;

/// Errors raised by dashboard state and the local store
#[derive(Error, Debug)]
pub enum DashboardError {
  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Storage format error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("Validation error: {0}")]
  Validation(String),

  #[error("Not found: {0}")]
  NotFound(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
