pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{Company, CompanyDetails};
pub use errors::{CompanyError, ValidationError};
pub use ports::CompanyRepository;
pub use services::{CompanyService, NewCompany};
pub use value_objects::{CompanyCode, CompanyName};
