use rust_decimal::Decimal;
use std::sync::Arc;

use crate::domain::company::CompanyRepository;
use crate::domain::errors::RepositoryError;

use super::{
  entities::{Invoice, InvoiceDetails, NewInvoice},
  errors::InvoiceError,
  ports::InvoiceRepository,
};

/// Invoice service implementing the invoice resource
pub struct InvoiceService {
  invoice_repo: Arc<dyn InvoiceRepository>,
  company_repo: Arc<dyn CompanyRepository>,
}

impl InvoiceService {
  pub fn new(
    invoice_repo: Arc<dyn InvoiceRepository>,
    company_repo: Arc<dyn CompanyRepository>,
  ) -> Self {
    Self {
      invoice_repo,
      company_repo,
    }
  }

  pub async fn list_invoices(&self) -> Result<Vec<Invoice>, InvoiceError> {
    self.invoice_repo.find_all().await
  }

  /// Get an invoice and the company it belongs to
  pub async fn get_invoice_details(&self, id: i32) -> Result<InvoiceDetails, InvoiceError> {
    let invoice = self
      .invoice_repo
      .find_by_id(id)
      .await?
      .ok_or(InvoiceError::NotFound(id))?;

    let company = self
      .company_repo
      .find_by_code(&invoice.comp_code)
      .await
      .map_err(RepositoryError::from)?;

    if company.is_none() {
      tracing::warn!(
        invoice_id = id,
        comp_code = %invoice.comp_code,
        "Company disappeared while reading invoice"
      );
    }

    Ok(InvoiceDetails { invoice, company })
  }

  /// Create invoice; the store fills in id, paid flag and dates
  pub async fn create_invoice(&self, invoice: NewInvoice) -> Result<Invoice, InvoiceError> {
    let created = self.invoice_repo.create(invoice).await?;
    tracing::info!(
      invoice_id = created.id,
      comp_code = %created.comp_code,
      "Invoice created"
    );
    Ok(created)
  }

  /// Change the amount of an invoice, leaving every other field untouched
  pub async fn update_invoice_amount(
    &self,
    id: i32,
    amt: Decimal,
  ) -> Result<Invoice, InvoiceError> {
    let updated = self
      .invoice_repo
      .update_amount(id, amt)
      .await?
      .ok_or(InvoiceError::NotFound(id))?;

    tracing::debug!(invoice_id = id, %amt, "Invoice amount updated");
    Ok(updated)
  }

  /// Delete invoice, returning whether it existed
  pub async fn delete_invoice(&self, id: i32) -> Result<bool, InvoiceError> {
    let deleted = self.invoice_repo.delete(id).await?;
    if deleted {
      tracing::info!(invoice_id = id, "Invoice deleted");
    } else {
      tracing::debug!(invoice_id = id, "No invoice to delete");
    }
    Ok(deleted)
  }
}
