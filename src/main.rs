use actix_web::{App, HttpServer, middleware::Logger};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use biztime::{
  adapters::http::{ApiDependencies, RequestIdMiddleware, configure_api_routes},
  domain::{company::CompanyService, industry::IndustryService, invoice::InvoiceService},
  infrastructure::{
    config::Config,
    persistence::postgres::{
      PostgresCompanyRepository, PostgresIndustryRepository, PostgresInvoiceRepository,
    },
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "biztime=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting biztime");

  let config = Config::load().map_err(|e| {
    tracing::error!("Failed to load configuration: {}", e);
    std::io::Error::new(
      std::io::ErrorKind::InvalidInput,
      format!("Invalid configuration: {}", e),
    )
  })?;
  tracing::info!("Configuration loaded successfully");

  let db_pool = tokio::time::timeout(
    Duration::from_secs(config.database.connect_timeout_seconds),
    PgPoolOptions::new()
      .max_connections(config.database.max_connections)
      .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_seconds))
      .connect(&config.database.url),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Database connection timed out after {} seconds. Is PostgreSQL running?",
      config.database.connect_timeout_seconds
    );
    std::io::Error::new(
      std::io::ErrorKind::TimedOut,
      format!(
        "Database connection timed out after {} seconds",
        config.database.connect_timeout_seconds
      ),
    )
  })?
  .map_err(|e| {
    tracing::error!("Failed to connect to database: {}", e);
    match e {
      sqlx::Error::Io(_) => std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "Could not connect to database. Is PostgreSQL running?",
      ),
      _ => std::io::Error::other(format!("Database error: {}", e)),
    }
  })?;

  tracing::info!("Database connection pool created");

  sqlx::migrate!("./migrations")
    .run(&db_pool)
    .await
    .map_err(|e| {
      tracing::error!("Failed to run database migrations: {}", e);
      std::io::Error::other(format!("Migration error: {}", e))
    })?;
  tracing::info!("Database migrations completed");

  // Repositories share the pool
  let company_repo = Arc::new(PostgresCompanyRepository::new(db_pool.clone()));
  let invoice_repo = Arc::new(PostgresInvoiceRepository::new(db_pool.clone()));
  let industry_repo = Arc::new(PostgresIndustryRepository::new(db_pool.clone()));

  let deps = ApiDependencies {
    company_service: Arc::new(CompanyService::new(
      company_repo.clone(),
      invoice_repo.clone(),
      industry_repo.clone(),
    )),
    invoice_service: Arc::new(InvoiceService::new(
      invoice_repo.clone(),
      company_repo.clone(),
    )),
    industry_service: Arc::new(IndustryService::new(industry_repo.clone())),
  };

  let (host, port) = config.bind_address();
  tracing::info!("Starting HTTP server on {}:{}", host, port);

  HttpServer::new(move || {
    App::new()
      .wrap(Logger::default())
      .wrap(RequestIdMiddleware::new())
      .configure(|cfg| configure_api_routes(cfg, deps.clone()))
  })
  .bind((host, port))?
  .run()
  .await
}
