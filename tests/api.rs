use actix_web::{
  App,
  http::StatusCode,
  test::{self, TestRequest},
};
use serde_json::{Value, json};
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::sync::Arc;
use testcontainers::ImageExt;
use testcontainers_modules::postgres::Postgres;
use testcontainers_modules::testcontainers::{ContainerAsync, runners::AsyncRunner};

use biztime::{
  adapters::http::{ApiDependencies, RequestIdMiddleware, configure_api_routes},
  domain::{company::CompanyService, industry::IndustryService, invoice::InvoiceService},
  infrastructure::persistence::postgres::{
    PostgresCompanyRepository, PostgresIndustryRepository, PostgresInvoiceRepository,
  },
};

async fn setup_test_db() -> (PgPool, ContainerAsync<Postgres>) {
  let container = Postgres::default()
    .with_tag("16-alpine")
    .start()
    .await
    .expect("Failed to start postgres container");

  let host = container.get_host().await.expect("Failed to get host");
  let port = container
    .get_host_port_ipv4(5432)
    .await
    .expect("Failed to get port");
  let database_url = format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

  let pool = PgPoolOptions::new()
    .max_connections(5)
    .connect(&database_url)
    .await
    .expect("Failed to connect to test database");

  sqlx::migrate!("./migrations")
    .run(&pool)
    .await
    .expect("Failed to run migrations");

  (pool, container)
}

/// Company `tst` with invoice 1 (500, paid) as fixture rows
async fn seed(pool: &PgPool) {
  sqlx::query(
    "INSERT INTO companies (code, name, description) VALUES ('tst', 'test company', 'a test company')",
  )
  .execute(pool)
  .await
  .expect("Failed to insert company");

  sqlx::query(
    r#"
        INSERT INTO invoices (id, comp_code, amt, paid, add_date, paid_date)
        VALUES (1, 'tst', 500, true, '2018-01-01', '2018-01-02')
        "#,
  )
  .execute(pool)
  .await
  .expect("Failed to insert invoice");

  // Keep the serial ahead of the explicit id
  sqlx::query("SELECT setval('invoices_id_seq', 1)")
    .execute(pool)
    .await
    .expect("Failed to bump invoice sequence");
}

fn dependencies(pool: &PgPool) -> ApiDependencies {
  let company_repo = Arc::new(PostgresCompanyRepository::new(pool.clone()));
  let invoice_repo = Arc::new(PostgresInvoiceRepository::new(pool.clone()));
  let industry_repo = Arc::new(PostgresIndustryRepository::new(pool.clone()));

  ApiDependencies {
    company_service: Arc::new(CompanyService::new(
      company_repo.clone(),
      invoice_repo.clone(),
      industry_repo.clone(),
    )),
    invoice_service: Arc::new(InvoiceService::new(invoice_repo, company_repo)),
    industry_service: Arc::new(IndustryService::new(industry_repo)),
  }
}

macro_rules! init_app {
  ($pool:expr) => {{
    let deps = dependencies($pool);
    test::init_service(
      App::new()
        .wrap(RequestIdMiddleware::new())
        .configure(move |cfg| configure_api_routes(cfg, deps)),
    )
    .await
  }};
}

fn test_company() -> Value {
  json!({"code": "tst", "name": "test company", "description": "a test company"})
}

fn test_invoice() -> Value {
  json!({
    "id": 1,
    "comp_code": "tst",
    "amt": 500.0,
    "paid": true,
    "add_date": "2018-01-01",
    "paid_date": "2018-01-02"
  })
}

// Companies

#[actix_web::test]
async fn test_list_companies() {
  let (pool, _container) = setup_test_db().await;
  seed(&pool).await;
  let app = init_app!(&pool);

  let resp = test::call_service(&app, TestRequest::get().uri("/companies").to_request()).await;

  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({"companies": [test_company()]}));
}

#[actix_web::test]
async fn test_get_company_with_invoices_and_industries() {
  let (pool, _container) = setup_test_db().await;
  seed(&pool).await;
  sqlx::query("INSERT INTO industries (code, industry) VALUES ('acct', 'Accounting'), ('tech', 'Technology')")
    .execute(&pool)
    .await
    .unwrap();
  sqlx::query("INSERT INTO companies_industries (industry_code, comp_code) VALUES ('acct', 'tst')")
    .execute(&pool)
    .await
    .unwrap();
  let app = init_app!(&pool);

  let resp = test::call_service(&app, TestRequest::get().uri("/companies/tst").to_request()).await;

  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(
    body,
    json!({
      "company": test_company(),
      "invoices": [test_invoice()],
      "industries": ["Accounting"]
    })
  );
}

#[actix_web::test]
async fn test_company_industries_are_distinct() {
  let (pool, _container) = setup_test_db().await;
  seed(&pool).await;
  sqlx::query("INSERT INTO industries (code, industry) VALUES ('sw', 'Technology'), ('hw', 'Technology')")
    .execute(&pool)
    .await
    .unwrap();
  let app = init_app!(&pool);

  for uri in ["/industries/sw/tst", "/industries/hw/tst"] {
    let resp = test::call_service(&app, TestRequest::post().uri(uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
  }

  let resp = test::call_service(&app, TestRequest::get().uri("/companies/tst").to_request()).await;
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["industries"], json!(["Technology"]));
}

#[actix_web::test]
async fn test_get_missing_company_is_404() {
  let (pool, _container) = setup_test_db().await;
  let app = init_app!(&pool);

  let resp = test::call_service(&app, TestRequest::get().uri("/companies/nope").to_request()).await;

  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["error"]["status"], 404);
  assert_eq!(body["error"]["message"], "Can't find company with code nope");
}

#[actix_web::test]
async fn test_create_company_with_code() {
  let (pool, _container) = setup_test_db().await;
  let app = init_app!(&pool);

  let company = json!({"code": "tst2", "name": "test company 2", "description": "a second test company"});
  let req = TestRequest::post()
    .uri("/companies")
    .set_json(&company)
    .to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::CREATED);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({"company": company}));
}

#[actix_web::test]
async fn test_create_company_slugs_code_from_name() {
  let (pool, _container) = setup_test_db().await;
  let app = init_app!(&pool);

  let req = TestRequest::post()
    .uri("/companies")
    .set_json(json!({"name": "Apple Inc.", "description": "Maker of OSX."}))
    .to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::CREATED);
  let body: Value = test::read_body_json(resp).await;
  let code = body["company"]["code"].as_str().unwrap();
  assert_eq!(code, "ppl-nc");
  assert!(!code.chars().any(|c| "aeiou".contains(c)));
}

#[actix_web::test]
async fn test_create_duplicate_company_is_500() {
  let (pool, _container) = setup_test_db().await;
  seed(&pool).await;
  let app = init_app!(&pool);

  let req = TestRequest::post()
    .uri("/companies")
    .set_json(test_company())
    .to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["error"]["message"], "An internal server error occurred");
}

#[actix_web::test]
async fn test_create_company_with_malformed_body_is_400() {
  let (pool, _container) = setup_test_db().await;
  let app = init_app!(&pool);

  let req = TestRequest::post()
    .uri("/companies")
    .set_json(json!({"description": "no name"}))
    .to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["error"]["status"], 400);
}

#[actix_web::test]
async fn test_update_company() {
  let (pool, _container) = setup_test_db().await;
  seed(&pool).await;
  let app = init_app!(&pool);

  let req = TestRequest::put()
    .uri("/companies/tst")
    .set_json(json!({"code": "tst", "name": "edited company", "description": "a edited company"}))
    .to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(
    body,
    json!({"company": {"code": "tst", "name": "edited company", "description": "a edited company"}})
  );
}

#[actix_web::test]
async fn test_update_missing_company_is_404_without_mutation() {
  let (pool, _container) = setup_test_db().await;
  seed(&pool).await;
  let app = init_app!(&pool);

  let req = TestRequest::put()
    .uri("/companies/nope")
    .set_json(json!({"name": "edited company", "description": "edited"}))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);

  let resp = test::call_service(&app, TestRequest::get().uri("/companies").to_request()).await;
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({"companies": [test_company()]}));
}

#[actix_web::test]
async fn test_delete_company() {
  let (pool, _container) = setup_test_db().await;
  seed(&pool).await;
  let app = init_app!(&pool);

  let resp = test::call_service(&app, TestRequest::delete().uri("/companies/tst").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({"msg": "Deleted", "deleted": true}));

  let resp = test::call_service(&app, TestRequest::delete().uri("/companies/tst").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({"msg": "Deleted", "deleted": false}));
}

// Invoices

#[actix_web::test]
async fn test_list_invoices() {
  let (pool, _container) = setup_test_db().await;
  seed(&pool).await;
  let app = init_app!(&pool);

  let resp = test::call_service(&app, TestRequest::get().uri("/invoices").to_request()).await;

  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({"invoices": [test_invoice()]}));
}

#[actix_web::test]
async fn test_get_invoice_with_company() {
  let (pool, _container) = setup_test_db().await;
  seed(&pool).await;
  let app = init_app!(&pool);

  let resp = test::call_service(&app, TestRequest::get().uri("/invoices/1").to_request()).await;

  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(
    body,
    json!({"invoice": test_invoice(), "company": test_company()})
  );
}

#[actix_web::test]
async fn test_get_missing_invoice_is_404() {
  let (pool, _container) = setup_test_db().await;
  let app = init_app!(&pool);

  let resp = test::call_service(&app, TestRequest::get().uri("/invoices/99").to_request()).await;

  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["error"]["message"], "Can't find invoice with id 99");
}

#[actix_web::test]
async fn test_get_invoice_with_non_integer_id_is_400() {
  let (pool, _container) = setup_test_db().await;
  let app = init_app!(&pool);

  let resp = test::call_service(&app, TestRequest::get().uri("/invoices/abc").to_request()).await;

  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_create_invoice() {
  let (pool, _container) = setup_test_db().await;
  seed(&pool).await;
  let app = init_app!(&pool);

  let req = TestRequest::post()
    .uri("/invoices")
    .set_json(json!({"comp_code": "tst", "amt": 53453200}))
    .to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::CREATED);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["invoice"]["amt"].as_f64(), Some(53453200.0));
  assert_eq!(body["invoice"]["comp_code"], "tst");
  assert_eq!(body["invoice"]["paid"], false);
  assert!(body["invoice"]["paid_date"].is_null());
  assert_eq!(body["invoice"]["id"], 2);
}

#[actix_web::test]
async fn test_create_invoice_for_unknown_company_is_500() {
  let (pool, _container) = setup_test_db().await;
  let app = init_app!(&pool);

  let req = TestRequest::post()
    .uri("/invoices")
    .set_json(json!({"comp_code": "nope", "amt": 10}))
    .to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn test_update_invoice_changes_only_amount() {
  let (pool, _container) = setup_test_db().await;
  seed(&pool).await;
  let app = init_app!(&pool);

  let req = TestRequest::put()
    .uri("/invoices/1")
    .set_json(json!({"amt": 25}))
    .to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  let mut expected = test_invoice();
  expected["amt"] = json!(25.0);
  assert_eq!(body, json!({"invoice": expected}));
}

#[actix_web::test]
async fn test_update_missing_invoice_is_404() {
  let (pool, _container) = setup_test_db().await;
  let app = init_app!(&pool);

  let req = TestRequest::put()
    .uri("/invoices/99")
    .set_json(json!({"amt": 25}))
    .to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delete_invoice() {
  let (pool, _container) = setup_test_db().await;
  seed(&pool).await;
  let app = init_app!(&pool);

  let resp = test::call_service(&app, TestRequest::delete().uri("/invoices/1").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({"msg": "Deleted", "deleted": true}));

  let resp = test::call_service(&app, TestRequest::delete().uri("/invoices/1").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({"msg": "Deleted", "deleted": false}));
}

// Industries

#[actix_web::test]
async fn test_create_list_and_get_industry() {
  let (pool, _container) = setup_test_db().await;
  let app = init_app!(&pool);

  let req = TestRequest::post()
    .uri("/industries")
    .set_json(json!({"code": "acct", "industry": "Accounting"}))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::CREATED);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({"industry": {"code": "acct", "industry": "Accounting"}}));

  let resp = test::call_service(&app, TestRequest::get().uri("/industries").to_request()).await;
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({"industries": [{"code": "acct", "industry": "Accounting"}]}));

  let resp = test::call_service(&app, TestRequest::get().uri("/industries/acct").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({"code": "acct", "industry": "Accounting"}));
}

#[actix_web::test]
async fn test_get_missing_industry_is_404() {
  let (pool, _container) = setup_test_db().await;
  let app = init_app!(&pool);

  let resp = test::call_service(&app, TestRequest::get().uri("/industries/nope").to_request()).await;

  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_associate_company_with_industry() {
  let (pool, _container) = setup_test_db().await;
  seed(&pool).await;
  sqlx::query("INSERT INTO industries (code, industry) VALUES ('acct', 'Accounting')")
    .execute(&pool)
    .await
    .unwrap();
  let app = init_app!(&pool);

  let resp = test::call_service(&app, TestRequest::post().uri("/industries/acct/tst").to_request()).await;

  assert_eq!(resp.status(), StatusCode::CREATED);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(
    body,
    json!({"relation": {"industry_code": "acct", "comp_code": "tst"}})
  );

  let resp = test::call_service(&app, TestRequest::get().uri("/companies/tst").to_request()).await;
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["industries"], json!(["Accounting"]));
}

#[actix_web::test]
async fn test_associate_unknown_company_is_500() {
  let (pool, _container) = setup_test_db().await;
  sqlx::query("INSERT INTO industries (code, industry) VALUES ('acct', 'Accounting')")
    .execute(&pool)
    .await
    .unwrap();
  let app = init_app!(&pool);

  let resp = test::call_service(&app, TestRequest::post().uri("/industries/acct/nope").to_request()).await;

  assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn test_unmatched_routes_get_json_404() {
  let (pool, _container) = setup_test_db().await;
  let app = init_app!(&pool);

  for req in [
    TestRequest::get().uri("/nope").to_request(),
    TestRequest::delete().uri("/industries/x").to_request(),
  ] {
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["status"], 404);
    assert_eq!(body["error"]["message"], "Not Found");
  }
}

#[actix_web::test]
async fn test_responses_carry_request_id() {
  let (pool, _container) = setup_test_db().await;
  let app = init_app!(&pool);

  let resp = test::call_service(&app, TestRequest::get().uri("/health").to_request()).await;

  assert_eq!(resp.status(), StatusCode::OK);
  assert!(resp.headers().contains_key("x-request-id"));
}
