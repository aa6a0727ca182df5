use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::{
  adapters::http::{
    dtos::{
      CreateInvoiceRequest, DeleteResponse, InvoiceListResponse, InvoiceResponse,
      UpdateInvoiceRequest,
    },
    errors::ApiError,
  },
  domain::invoice::{InvoiceService, NewInvoice},
};

/// List invoices
/// GET /invoices
pub async fn list_invoices_handler(
  service: web::Data<Arc<InvoiceService>>,
) -> Result<HttpResponse, ApiError> {
  let invoices = service.list_invoices().await?;

  Ok(HttpResponse::Ok().json(InvoiceListResponse { invoices }))
}

/// Get invoice with its company
/// GET /invoices/{id}
pub async fn get_invoice_handler(
  id: web::Path<i32>,
  service: web::Data<Arc<InvoiceService>>,
) -> Result<HttpResponse, ApiError> {
  let details = service.get_invoice_details(id.into_inner()).await?;

  Ok(HttpResponse::Ok().json(details))
}

/// Create invoice
/// POST /invoices
pub async fn create_invoice_handler(
  request: web::Json<CreateInvoiceRequest>,
  service: web::Data<Arc<InvoiceService>>,
) -> Result<HttpResponse, ApiError> {
  let request = request.into_inner();

  let invoice = service
    .create_invoice(NewInvoice::new(request.comp_code, request.amt))
    .await?;

  Ok(HttpResponse::Created().json(InvoiceResponse { invoice }))
}

/// Update invoice amount
/// PUT /invoices/{id}
pub async fn update_invoice_handler(
  id: web::Path<i32>,
  request: web::Json<UpdateInvoiceRequest>,
  service: web::Data<Arc<InvoiceService>>,
) -> Result<HttpResponse, ApiError> {
  let invoice = service
    .update_invoice_amount(id.into_inner(), request.amt)
    .await?;

  Ok(HttpResponse::Ok().json(InvoiceResponse { invoice }))
}

/// Delete invoice
/// DELETE /invoices/{id}
pub async fn delete_invoice_handler(
  id: web::Path<i32>,
  service: web::Data<Arc<InvoiceService>>,
) -> Result<HttpResponse, ApiError> {
  let deleted = service.delete_invoice(id.into_inner()).await?;

  Ok(HttpResponse::Ok().json(DeleteResponse::new(deleted)))
}
