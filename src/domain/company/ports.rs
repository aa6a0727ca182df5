use async_trait::async_trait;

use super::{entities::Company, errors::CompanyError};

#[async_trait]
pub trait CompanyRepository: Send + Sync {
  async fn find_all(&self) -> Result<Vec<Company>, CompanyError>;
  async fn find_by_code(&self, code: &str) -> Result<Option<Company>, CompanyError>;
  async fn create(&self, company: Company) -> Result<Company, CompanyError>;

  /// Overwrite name and description, returning `None` when no row has `code`
  async fn update(
    &self,
    code: &str,
    name: &str,
    description: Option<&str>,
  ) -> Result<Option<Company>, CompanyError>;

  /// Returns whether a row was removed
  async fn delete(&self, code: &str) -> Result<bool, CompanyError>;
}
