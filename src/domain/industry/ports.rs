use async_trait::async_trait;

use super::entities::{CompanyIndustry, Industry};
use super::errors::IndustryError;

#[async_trait]
pub trait IndustryRepository: Send + Sync {
  async fn find_all(&self) -> Result<Vec<Industry>, IndustryError>;
  async fn find_by_code(&self, code: &str) -> Result<Option<Industry>, IndustryError>;
  async fn create(&self, industry: Industry) -> Result<Industry, IndustryError>;

  /// Distinct industry labels joined to a company
  async fn find_labels_by_company_code(&self, comp_code: &str)
  -> Result<Vec<String>, IndustryError>;

  /// Insert one association row. Unknown codes are rejected by the schema.
  async fn associate(&self, relation: CompanyIndustry) -> Result<CompanyIndustry, IndustryError>;
}
