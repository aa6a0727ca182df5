pub mod companies;
pub mod industries;
pub mod invoices;
