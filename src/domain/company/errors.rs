use thiserror::Error;

use crate::domain::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum CompanyError {
  #[error("Can't find company with code {0}")]
  NotFound(String),

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),

  #[error("Validation error: {0}")]
  Validation(#[from] ValidationError),
}

#[derive(Debug, Error)]
pub enum ValidationError {
  #[error("Company name must not be empty")]
  CompanyNameEmpty,

  #[error("Company code must not be empty")]
  CompanyCodeEmpty,

  #[error("Cannot derive a company code from name '{name}'")]
  CannotDeriveCode { name: String },
}

impl From<sqlx::Error> for CompanyError {
  fn from(error: sqlx::Error) -> Self {
    CompanyError::Repository(RepositoryError::from(error))
  }
}

impl From<CompanyError> for RepositoryError {
  fn from(error: CompanyError) -> Self {
    match error {
      CompanyError::Repository(repo_err) => repo_err,
      CompanyError::NotFound(_) | CompanyError::Validation(_) => {
        RepositoryError::QueryFailed(error.to_string())
      }
    }
  }
}
