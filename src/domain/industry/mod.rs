pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;

pub use entities::{CompanyIndustry, Industry};
pub use errors::IndustryError;
pub use ports::IndustryRepository;
pub use services::IndustryService;
