use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::{
  adapters::http::{
    dtos::{CreateIndustryRequest, IndustryListResponse, IndustryResponse, RelationResponse},
    errors::ApiError,
  },
  domain::industry::{Industry, IndustryService},
};

/// List industries
/// GET /industries
pub async fn list_industries_handler(
  service: web::Data<Arc<IndustryService>>,
) -> Result<HttpResponse, ApiError> {
  let industries = service.list_industries().await?;

  Ok(HttpResponse::Ok().json(IndustryListResponse { industries }))
}

/// Get industry; the row is returned unwrapped
/// GET /industries/{code}
pub async fn get_industry_handler(
  code: web::Path<String>,
  service: web::Data<Arc<IndustryService>>,
) -> Result<HttpResponse, ApiError> {
  let industry = service.get_industry(&code).await?;

  Ok(HttpResponse::Ok().json(industry))
}

/// Create industry
/// POST /industries
pub async fn create_industry_handler(
  request: web::Json<CreateIndustryRequest>,
  service: web::Data<Arc<IndustryService>>,
) -> Result<HttpResponse, ApiError> {
  let request = request.into_inner();

  let industry = service
    .create_industry(Industry::new(request.code, request.industry))
    .await?;

  Ok(HttpResponse::Created().json(IndustryResponse { industry }))
}

/// Associate a company with an industry
/// POST /industries/{industry_code}/{comp_code}
pub async fn associate_company_handler(
  path: web::Path<(String, String)>,
  service: web::Data<Arc<IndustryService>>,
) -> Result<HttpResponse, ApiError> {
  let (industry_code, comp_code) = path.into_inner();

  let relation = service.associate(&industry_code, &comp_code).await?;

  Ok(HttpResponse::Created().json(RelationResponse { relation }))
}
