use serde::{Deserialize, Serialize};

use super::value_objects::{CompanyCode, CompanyName};
use crate::domain::invoice::Invoice;

/// Company entity, keyed by its code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
  pub code: String,
  pub name: String,
  pub description: Option<String>,
}

impl Company {
  /// Create new company (for creation)
  pub fn new(code: CompanyCode, name: CompanyName, description: Option<String>) -> Self {
    Self {
      code: code.into_inner(),
      name: name.into_inner(),
      description,
    }
  }
}

/// A company together with the rows that reference it
#[derive(Debug, Clone, Serialize)]
pub struct CompanyDetails {
  pub company: Company,
  pub invoices: Vec<Invoice>,
  /// Distinct industry labels the company is associated with
  pub industries: Vec<String>,
}
