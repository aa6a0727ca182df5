use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::domain::company::CompanyService;
use crate::domain::industry::IndustryService;
use crate::domain::invoice::InvoiceService;

use super::errors::ApiError;
use super::handlers::companies::{
  create_company_handler, delete_company_handler, get_company_handler, list_companies_handler,
  update_company_handler,
};
use super::handlers::industries::{
  associate_company_handler, create_industry_handler, get_industry_handler,
  list_industries_handler,
};
use super::handlers::invoices::{
  create_invoice_handler, delete_invoice_handler, get_invoice_handler, list_invoices_handler,
  update_invoice_handler,
};

/// Services the API routes dispatch to
#[derive(Clone)]
pub struct ApiDependencies {
  pub company_service: Arc<CompanyService>,
  pub invoice_service: Arc<InvoiceService>,
  pub industry_service: Arc<IndustryService>,
}

/// Configure every API route plus the JSON/path extractor error handling.
///
/// # Routes
///
/// - `/companies` - see [`configure_company_routes`]
/// - `/invoices` - see [`configure_invoice_routes`]
/// - `/industries` - see [`configure_industry_routes`]
/// - GET `/health`
/// - anything else answers 404 with the JSON error body
///
/// # Example
///
/// ```no_run
/// use actix_web::App;
/// # use biztime::adapters::http::routes::{ApiDependencies, configure_api_routes};
///
/// # fn example(deps: ApiDependencies) {
/// let app = App::new().configure(|cfg| configure_api_routes(cfg, deps.clone()));
/// # }
/// ```
pub fn configure_api_routes(cfg: &mut web::ServiceConfig, deps: ApiDependencies) {
  cfg
    .app_data(json_config())
    .app_data(path_config())
    .service(
      web::scope("/companies")
        .configure(|cfg| configure_company_routes(cfg, deps.company_service.clone())),
    )
    .service(
      web::scope("/invoices")
        .configure(|cfg| configure_invoice_routes(cfg, deps.invoice_service.clone())),
    )
    .service(
      web::scope("/industries")
        .configure(|cfg| configure_industry_routes(cfg, deps.industry_service.clone())),
    )
    .route("/health", web::get().to(health_check))
    .default_service(web::route().to(not_found));
}

/// Configure company routes
///
/// - GET / - List companies
/// - POST / - Create company (code slugged from name when omitted)
/// - GET /{code} - Company with invoices and industries
/// - PUT /{code} - Update name and description
/// - DELETE /{code} - Delete company
pub fn configure_company_routes(cfg: &mut web::ServiceConfig, service: Arc<CompanyService>) {
  cfg
    .app_data(web::Data::new(service))
    .route("", web::get().to(list_companies_handler))
    .route("", web::post().to(create_company_handler))
    .route("/{code}", web::get().to(get_company_handler))
    .route("/{code}", web::put().to(update_company_handler))
    .route("/{code}", web::delete().to(delete_company_handler));
}

/// Configure invoice routes
///
/// - GET / - List invoices
/// - POST / - Create invoice
/// - GET /{id} - Invoice with its company
/// - PUT /{id} - Update amount
/// - DELETE /{id} - Delete invoice
pub fn configure_invoice_routes(cfg: &mut web::ServiceConfig, service: Arc<InvoiceService>) {
  cfg
    .app_data(web::Data::new(service))
    .route("", web::get().to(list_invoices_handler))
    .route("", web::post().to(create_invoice_handler))
    .route("/{id}", web::get().to(get_invoice_handler))
    .route("/{id}", web::put().to(update_invoice_handler))
    .route("/{id}", web::delete().to(delete_invoice_handler));
}

/// Configure industry routes
///
/// - GET / - List industries
/// - POST / - Create industry
/// - GET /{code} - Single industry
/// - POST /{industry_code}/{comp_code} - Associate company with industry
pub fn configure_industry_routes(cfg: &mut web::ServiceConfig, service: Arc<IndustryService>) {
  cfg
    .app_data(web::Data::new(service))
    .route("", web::get().to(list_industries_handler))
    .route("", web::post().to(create_industry_handler))
    .route("/{code}", web::get().to(get_industry_handler))
    .route(
      "/{industry_code}/{comp_code}",
      web::post().to(associate_company_handler),
    );
}

/// Bodies that fail to deserialize get the same JSON error shape as domain errors
fn json_config() -> web::JsonConfig {
  web::JsonConfig::default().error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into())
}

fn path_config() -> web::PathConfig {
  web::PathConfig::default().error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into())
}

/// Unmatched paths and methods get the JSON error body too
async fn not_found() -> Result<HttpResponse, ApiError> {
  Err(ApiError::NotFound("Not Found".to_string()))
}

/// Health check endpoint
async fn health_check() -> HttpResponse {
  HttpResponse::Ok().body("OK")
}
