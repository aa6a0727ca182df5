use async_trait::async_trait;
use rust_decimal::Decimal;

use super::entities::{Invoice, NewInvoice};
use super::errors::InvoiceError;

#[async_trait]
pub trait InvoiceRepository: Send + Sync {
  async fn find_all(&self) -> Result<Vec<Invoice>, InvoiceError>;
  async fn find_by_id(&self, id: i32) -> Result<Option<Invoice>, InvoiceError>;
  async fn find_by_company_code(&self, comp_code: &str) -> Result<Vec<Invoice>, InvoiceError>;
  async fn create(&self, invoice: NewInvoice) -> Result<Invoice, InvoiceError>;

  /// Set `amt` only, returning `None` when no row has `id`
  async fn update_amount(&self, id: i32, amt: Decimal) -> Result<Option<Invoice>, InvoiceError>;

  /// Returns whether a row was removed
  async fn delete(&self, id: i32) -> Result<bool, InvoiceError>;
}
