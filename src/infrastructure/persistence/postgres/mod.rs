pub mod company_repository;
pub mod industry_repository;
pub mod invoice_repository;

pub use company_repository::PostgresCompanyRepository;
pub use industry_repository::PostgresIndustryRepository;
pub use invoice_repository::PostgresInvoiceRepository;
