use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::company::Company;
use crate::domain::industry::{CompanyIndustry, Industry};
use crate::domain::invoice::Invoice;

/// Message returned by every delete endpoint
pub const DELETED_MESSAGE: &str = "Deleted";

/// Request for company creation
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCompanyRequest {
  /// Explicit company code; slugged from `name` when omitted
  #[serde(default)]
  pub code: Option<String>,

  pub name: String,

  #[serde(default)]
  pub description: Option<String>,
}

/// Request for company update
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCompanyRequest {
  pub name: String,

  #[serde(default)]
  pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyResponse {
  pub company: Company,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyListResponse {
  pub companies: Vec<Company>,
}

/// Request for invoice creation
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInvoiceRequest {
  pub comp_code: String,
  pub amt: Decimal,
}

/// Request for invoice update; only the amount can change
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateInvoiceRequest {
  pub amt: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct InvoiceResponse {
  pub invoice: Invoice,
}

#[derive(Debug, Clone, Serialize)]
pub struct InvoiceListResponse {
  pub invoices: Vec<Invoice>,
}

/// Request for industry creation
#[derive(Debug, Clone, Deserialize)]
pub struct CreateIndustryRequest {
  pub code: String,
  pub industry: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndustryResponse {
  pub industry: Industry,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndustryListResponse {
  pub industries: Vec<Industry>,
}

/// Echo of a newly created company/industry association
#[derive(Debug, Clone, Serialize)]
pub struct RelationResponse {
  pub relation: CompanyIndustry,
}

/// Acknowledgement for deletes.
///
/// The status and message are the same whether or not a row existed;
/// `deleted` tells the two apart.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
  pub msg: String,
  pub deleted: bool,
}

impl DeleteResponse {
  pub fn new(deleted: bool) -> Self {
    Self {
      msg: DELETED_MESSAGE.to_string(),
      deleted,
    }
  }
}

/// Standard error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
  pub error: ErrorBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
  /// Human-readable error message
  pub message: String,

  /// HTTP status code
  pub status: u16,
}
