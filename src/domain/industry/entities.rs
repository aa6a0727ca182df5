use serde::{Deserialize, Serialize};

/// Industry entity; `industry` is the human-readable label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Industry {
  pub code: String,
  pub industry: String,
}

impl Industry {
  pub fn new(code: impl Into<String>, industry: impl Into<String>) -> Self {
    Self {
      code: code.into(),
      industry: industry.into(),
    }
  }
}

/// One row of the company/industry association
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyIndustry {
  pub industry_code: String,
  pub comp_code: String,
}

impl CompanyIndustry {
  pub fn new(industry_code: impl Into<String>, comp_code: impl Into<String>) -> Self {
    Self {
      industry_code: industry_code.into(),
      comp_code: comp_code.into(),
    }
  }
}
