use thiserror::Error;

use crate::domain::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum InvoiceError {
  #[error("Can't find invoice with id {0}")]
  NotFound(i32),

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),
}

impl From<sqlx::Error> for InvoiceError {
  fn from(error: sqlx::Error) -> Self {
    InvoiceError::Repository(RepositoryError::from(error))
  }
}

impl From<InvoiceError> for RepositoryError {
  fn from(error: InvoiceError) -> Self {
    match error {
      InvoiceError::Repository(repo_err) => repo_err,
      InvoiceError::NotFound(_) => RepositoryError::QueryFailed(error.to_string()),
    }
  }
}
