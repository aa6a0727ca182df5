use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use std::fmt;

use crate::domain::company::CompanyError;
use crate::domain::industry::IndustryError;
use crate::domain::invoice::InvoiceError;

use super::dtos::{ErrorBody, ErrorResponse};

const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred";

/// API error type that maps domain errors to HTTP responses
#[derive(Debug)]
pub enum ApiError {
  /// A lookup by key found no row (404 Not Found)
  NotFound(String),

  /// Malformed request or rejected input (400 Bad Request)
  BadRequest(String),

  /// Store or unclassified failure (500 Internal Server Error)
  Internal(String),
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
      ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    let message = match self {
      ApiError::NotFound(msg) | ApiError::BadRequest(msg) => msg.clone(),
      ApiError::Internal(msg) => {
        // Store details stay in the logs
        tracing::error!("Internal error: {}", msg);
        INTERNAL_ERROR_MESSAGE.to_string()
      }
    };

    HttpResponse::build(status)
      .content_type(ContentType::json())
      .json(ErrorResponse {
        error: ErrorBody {
          message,
          status: status.as_u16(),
        },
      })
  }
}

impl From<CompanyError> for ApiError {
  fn from(error: CompanyError) -> Self {
    match error {
      CompanyError::NotFound(_) => ApiError::NotFound(error.to_string()),
      CompanyError::Validation(e) => ApiError::BadRequest(e.to_string()),
      CompanyError::Repository(e) => ApiError::Internal(format!("Repository error: {}", e)),
    }
  }
}

impl From<InvoiceError> for ApiError {
  fn from(error: InvoiceError) -> Self {
    match error {
      InvoiceError::NotFound(_) => ApiError::NotFound(error.to_string()),
      InvoiceError::Repository(e) => ApiError::Internal(format!("Repository error: {}", e)),
    }
  }
}

impl From<IndustryError> for ApiError {
  fn from(error: IndustryError) -> Self {
    match error {
      IndustryError::NotFound(_) => ApiError::NotFound(error.to_string()),
      IndustryError::Repository(e) => ApiError::Internal(format!("Repository error: {}", e)),
    }
  }
}
