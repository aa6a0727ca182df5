use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::company::Company;

/// Invoice entity as stored; `id`, `paid` and the dates are assigned by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
  pub id: i32,
  pub comp_code: String,
  #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
  pub amt: Decimal,
  pub paid: bool,
  pub add_date: NaiveDate,
  pub paid_date: Option<NaiveDate>,
}

/// Fields the client supplies when creating an invoice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInvoice {
  pub comp_code: String,
  pub amt: Decimal,
}

impl NewInvoice {
  pub fn new(comp_code: impl Into<String>, amt: Decimal) -> Self {
    Self {
      comp_code: comp_code.into(),
      amt,
    }
  }
}

/// An invoice with its owning company.
///
/// The two rows are read separately, so `company` is `None` if the company was
/// deleted in between.
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceDetails {
  pub invoice: Invoice,
  pub company: Option<Company>,
}
