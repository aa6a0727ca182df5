use std::sync::Arc;

use super::{
  entities::{CompanyIndustry, Industry},
  errors::IndustryError,
  ports::IndustryRepository,
};

/// Industry service implementing the industry resource and its association
/// with companies
pub struct IndustryService {
  industry_repo: Arc<dyn IndustryRepository>,
}

impl IndustryService {
  pub fn new(industry_repo: Arc<dyn IndustryRepository>) -> Self {
    Self { industry_repo }
  }

  pub async fn list_industries(&self) -> Result<Vec<Industry>, IndustryError> {
    self.industry_repo.find_all().await
  }

  pub async fn get_industry(&self, code: &str) -> Result<Industry, IndustryError> {
    self
      .industry_repo
      .find_by_code(code)
      .await?
      .ok_or_else(|| IndustryError::NotFound(code.to_string()))
  }

  pub async fn create_industry(&self, industry: Industry) -> Result<Industry, IndustryError> {
    let created = self.industry_repo.create(industry).await?;
    tracing::info!(industry_code = %created.code, "Industry created");
    Ok(created)
  }

  /// Link a company to an industry.
  ///
  /// Neither code is looked up first; the store's foreign keys decide.
  pub async fn associate(
    &self,
    industry_code: &str,
    comp_code: &str,
  ) -> Result<CompanyIndustry, IndustryError> {
    let relation = self
      .industry_repo
      .associate(CompanyIndustry::new(industry_code, comp_code))
      .await?;

    tracing::info!(
      industry_code = %relation.industry_code,
      comp_code = %relation.comp_code,
      "Company associated with industry"
    );
    Ok(relation)
  }
}
