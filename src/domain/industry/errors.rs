use thiserror::Error;

use crate::domain::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum IndustryError {
  #[error("Can't find industry with code {0}")]
  NotFound(String),

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),
}

impl From<sqlx::Error> for IndustryError {
  fn from(error: sqlx::Error) -> Self {
    IndustryError::Repository(RepositoryError::from(error))
  }
}

impl From<IndustryError> for RepositoryError {
  fn from(error: IndustryError) -> Self {
    match error {
      IndustryError::Repository(repo_err) => repo_err,
      IndustryError::NotFound(_) => RepositoryError::QueryFailed(error.to_string()),
    }
  }
}
