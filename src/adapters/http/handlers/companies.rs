use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::{
  adapters::http::{
    dtos::{
      CompanyListResponse, CompanyResponse, CreateCompanyRequest, DeleteResponse,
      UpdateCompanyRequest,
    },
    errors::ApiError,
  },
  domain::company::{CompanyService, NewCompany},
};

/// List companies
/// GET /companies
pub async fn list_companies_handler(
  service: web::Data<Arc<CompanyService>>,
) -> Result<HttpResponse, ApiError> {
  let companies = service.list_companies().await?;

  Ok(HttpResponse::Ok().json(CompanyListResponse { companies }))
}

/// Get company with its invoices and industries
/// GET /companies/{code}
pub async fn get_company_handler(
  code: web::Path<String>,
  service: web::Data<Arc<CompanyService>>,
) -> Result<HttpResponse, ApiError> {
  let details = service.get_company_details(&code).await?;

  Ok(HttpResponse::Ok().json(details))
}

/// Create company
/// POST /companies
pub async fn create_company_handler(
  request: web::Json<CreateCompanyRequest>,
  service: web::Data<Arc<CompanyService>>,
) -> Result<HttpResponse, ApiError> {
  let request = request.into_inner();

  let company = service
    .create_company(NewCompany {
      code: request.code,
      name: request.name,
      description: request.description,
    })
    .await?;

  Ok(HttpResponse::Created().json(CompanyResponse { company }))
}

/// Update company name and description
/// PUT /companies/{code}
pub async fn update_company_handler(
  code: web::Path<String>,
  request: web::Json<UpdateCompanyRequest>,
  service: web::Data<Arc<CompanyService>>,
) -> Result<HttpResponse, ApiError> {
  let request = request.into_inner();

  let company = service
    .update_company(&code, request.name, request.description)
    .await?;

  Ok(HttpResponse::Ok().json(CompanyResponse { company }))
}

/// Delete company
/// DELETE /companies/{code}
pub async fn delete_company_handler(
  code: web::Path<String>,
  service: web::Data<Arc<CompanyService>>,
) -> Result<HttpResponse, ApiError> {
  let deleted = service.delete_company(&code).await?;

  Ok(HttpResponse::Ok().json(DeleteResponse::new(deleted)))
}
