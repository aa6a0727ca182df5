pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;

pub use entities::{Invoice, InvoiceDetails, NewInvoice};
pub use errors::InvoiceError;
pub use ports::InvoiceRepository;
pub use services::InvoiceService;
