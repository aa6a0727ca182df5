use lazy_static::lazy_static;
use regex::Regex;

use super::errors::ValidationError;

lazy_static! {
  /// Punctuation and vowels dropped when deriving a code from a name
  static ref STRIPPED_CHARS: Regex = Regex::new(r#"[*+~.()'"!:@aeiou]"#).unwrap();
  /// Anything left that cannot appear in a code
  static ref UNSLUGGABLE_CHARS: Regex = Regex::new(r"[^a-z0-9\s-]").unwrap();
}

/// Company name value object with validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyName(String);

impl CompanyName {
  pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
    let name = name.into().trim().to_string();

    if name.is_empty() {
      return Err(ValidationError::CompanyNameEmpty);
    }

    Ok(Self(name))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

/// Company code, either supplied by the client or slugged from the name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyCode(String);

impl CompanyCode {
  pub fn new(code: impl Into<String>) -> Result<Self, ValidationError> {
    let code = code.into().trim().to_string();

    if code.is_empty() {
      return Err(ValidationError::CompanyCodeEmpty);
    }

    Ok(Self(code))
  }

  /// Derive a code from a company name.
  ///
  /// The name is lower-cased, the characters `* + ~ . ( ) ' " ! : @` and the
  /// vowels are removed, and the remaining words are joined with single
  /// hyphens: `"Apple Inc."` becomes `"ppl-nc"`.
  pub fn from_name(name: &CompanyName) -> Result<Self, ValidationError> {
    let lowered = name.as_str().to_lowercase();
    let stripped = STRIPPED_CHARS.replace_all(&lowered, "");
    let cleaned = UNSLUGGABLE_CHARS.replace_all(&stripped, "");

    let slug = cleaned
      .split(|c: char| c.is_whitespace() || c == '-')
      .filter(|part| !part.is_empty())
      .collect::<Vec<_>>()
      .join("-");

    if slug.is_empty() {
      return Err(ValidationError::CannotDeriveCode {
        name: name.as_str().to_string(),
      });
    }

    Ok(Self(slug))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn slug(name: &str) -> String {
    CompanyCode::from_name(&CompanyName::new(name).unwrap())
      .unwrap()
      .into_inner()
  }

  #[test]
  fn test_slug_strips_vowels_and_punctuation() {
    assert_eq!(slug("Apple Inc."), "ppl-nc");
    assert_eq!(slug("Test Co!"), "tst-c");
    assert_eq!(slug("International Business Machines"), "ntrntnl-bsnss-mchns");
  }

  #[test]
  fn test_slug_contains_only_lowercase_consonants_and_hyphens() {
    let code = slug("Big (Happy) Dog's \"Treats\" ~ Co: @HQ + *more*");

    assert!(
      code
        .chars()
        .all(|c| c == '-' || (c.is_ascii_lowercase() && !"aeiou".contains(c)))
    );
    assert!(!code.starts_with('-'));
    assert!(!code.ends_with('-'));
    assert!(!code.contains("--"));
  }

  #[test]
  fn test_slug_keeps_digits() {
    assert_eq!(slug("Studio 54"), "std-54");
  }

  #[test]
  fn test_slug_collapses_hyphens() {
    assert_eq!(slug("E-Trade"), "trd");
    assert_eq!(slug("Foo A-Bar"), "f-br");
    assert_eq!(slug("Rock -- Roll -"), "rck-rll");
  }

  #[test]
  fn test_slug_drops_words_that_vanish() {
    assert_eq!(slug("A Bright Idea"), "brght-d");
  }

  #[test]
  fn test_slug_of_only_vowels_is_rejected() {
    let name = CompanyName::new("Aeiou").unwrap();
    let result = CompanyCode::from_name(&name);

    assert!(matches!(
      result,
      Err(ValidationError::CannotDeriveCode { .. })
    ));
  }

  #[test]
  fn test_company_code_is_trimmed() {
    let code = CompanyCode::new("  ibm ").unwrap();
    assert_eq!(code.as_str(), "ibm");
  }

  #[test]
  fn test_empty_company_code_is_rejected() {
    assert!(CompanyCode::new("   ").is_err());
  }

  #[test]
  fn test_empty_company_name_is_rejected() {
    assert!(matches!(
      CompanyName::new(""),
      Err(ValidationError::CompanyNameEmpty)
    ));
  }
}
