//! Company, invoice and industry records over HTTP.
//!
//! - `domain` - entities, repository ports and services per resource
//! - `infrastructure` - configuration and the Postgres repositories
//! - `adapters` - the actix-web surface

pub mod adapters;
pub mod domain;
pub mod infrastructure;
