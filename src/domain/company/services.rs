use std::sync::Arc;

use crate::domain::errors::RepositoryError;
use crate::domain::industry::IndustryRepository;
use crate::domain::invoice::InvoiceRepository;

use super::{
  entities::{Company, CompanyDetails},
  errors::CompanyError,
  ports::CompanyRepository,
  value_objects::{CompanyCode, CompanyName},
};

/// Input for company creation
#[derive(Debug, Clone)]
pub struct NewCompany {
  /// Explicit code; derived from `name` when absent
  pub code: Option<String>,
  pub name: String,
  pub description: Option<String>,
}

/// Company service implementing the company resource
pub struct CompanyService {
  company_repo: Arc<dyn CompanyRepository>,
  invoice_repo: Arc<dyn InvoiceRepository>,
  industry_repo: Arc<dyn IndustryRepository>,
}

impl CompanyService {
  pub fn new(
    company_repo: Arc<dyn CompanyRepository>,
    invoice_repo: Arc<dyn InvoiceRepository>,
    industry_repo: Arc<dyn IndustryRepository>,
  ) -> Self {
    Self {
      company_repo,
      invoice_repo,
      industry_repo,
    }
  }

  pub async fn list_companies(&self) -> Result<Vec<Company>, CompanyError> {
    self.company_repo.find_all().await
  }

  /// Get a company with its invoices and industry labels.
  ///
  /// Three sequential reads, not wrapped in a transaction.
  pub async fn get_company_details(&self, code: &str) -> Result<CompanyDetails, CompanyError> {
    let company = self
      .company_repo
      .find_by_code(code)
      .await?
      .ok_or_else(|| CompanyError::NotFound(code.to_string()))?;

    let invoices = self
      .invoice_repo
      .find_by_company_code(&company.code)
      .await
      .map_err(RepositoryError::from)?;

    let industries = self
      .industry_repo
      .find_labels_by_company_code(&company.code)
      .await
      .map_err(RepositoryError::from)?;

    Ok(CompanyDetails {
      company,
      invoices,
      industries,
    })
  }

  /// Create company, slugging the code from the name if none was given
  pub async fn create_company(&self, new_company: NewCompany) -> Result<Company, CompanyError> {
    let name = CompanyName::new(new_company.name)?;
    let code = match new_company.code {
      Some(code) => CompanyCode::new(code)?,
      None => CompanyCode::from_name(&name)?,
    };

    let company = Company::new(code, name, new_company.description);
    let created = self.company_repo.create(company).await?;

    tracing::info!(code = %created.code, "Company created");
    Ok(created)
  }

  /// Update name and description of an existing company
  pub async fn update_company(
    &self,
    code: &str,
    name: String,
    description: Option<String>,
  ) -> Result<Company, CompanyError> {
    let name = CompanyName::new(name)?;

    let updated = self
      .company_repo
      .update(code, name.as_str(), description.as_deref())
      .await?
      .ok_or_else(|| CompanyError::NotFound(code.to_string()))?;

    tracing::debug!(code = %updated.code, "Company updated");
    Ok(updated)
  }

  /// Delete company, returning whether it existed.
  ///
  /// Invoices and industry links go with it through the schema's cascades.
  pub async fn delete_company(&self, code: &str) -> Result<bool, CompanyError> {
    let deleted = self.company_repo.delete(code).await?;
    if deleted {
      tracing::info!(code = %code, "Company deleted");
    } else {
      tracing::debug!(code = %code, "No company to delete");
    }
    Ok(deleted)
  }
}
