pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use dtos::{DeleteResponse, ErrorResponse};
pub use errors::ApiError;
pub use middleware::{RequestId, RequestIdExt, RequestIdMiddleware};
pub use routes::{
  ApiDependencies, configure_api_routes, configure_company_routes, configure_industry_routes,
  configure_invoice_routes,
};
