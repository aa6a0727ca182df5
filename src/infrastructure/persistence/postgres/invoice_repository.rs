use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use crate::domain::invoice::{Invoice, InvoiceError, InvoiceRepository, NewInvoice};

#[derive(Debug, FromRow)]
struct InvoiceRow {
  id: i32,
  comp_code: String,
  amt: Decimal,
  paid: bool,
  add_date: NaiveDate,
  paid_date: Option<NaiveDate>,
}

impl From<InvoiceRow> for Invoice {
  fn from(row: InvoiceRow) -> Self {
    Invoice {
      id: row.id,
      comp_code: row.comp_code,
      amt: row.amt,
      paid: row.paid,
      add_date: row.add_date,
      paid_date: row.paid_date,
    }
  }
}

pub struct PostgresInvoiceRepository {
  pool: PgPool,
}

impl PostgresInvoiceRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl InvoiceRepository for PostgresInvoiceRepository {
  async fn find_all(&self) -> Result<Vec<Invoice>, InvoiceError> {
    let rows = sqlx::query_as::<_, InvoiceRow>(
      r#"
            SELECT id, comp_code, amt, paid, add_date, paid_date
            FROM invoices
            ORDER BY id
            "#,
    )
    .fetch_all(&self.pool)
    .await?;

    Ok(rows.into_iter().map(Invoice::from).collect())
  }

  async fn find_by_id(&self, id: i32) -> Result<Option<Invoice>, InvoiceError> {
    let row = sqlx::query_as::<_, InvoiceRow>(
      r#"
            SELECT id, comp_code, amt, paid, add_date, paid_date
            FROM invoices
            WHERE id = $1
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(Invoice::from))
  }

  async fn find_by_company_code(&self, comp_code: &str) -> Result<Vec<Invoice>, InvoiceError> {
    let rows = sqlx::query_as::<_, InvoiceRow>(
      r#"
            SELECT id, comp_code, amt, paid, add_date, paid_date
            FROM invoices
            WHERE comp_code = $1
            ORDER BY id
            "#,
    )
    .bind(comp_code)
    .fetch_all(&self.pool)
    .await?;

    Ok(rows.into_iter().map(Invoice::from).collect())
  }

  async fn create(&self, invoice: NewInvoice) -> Result<Invoice, InvoiceError> {
    let row = sqlx::query_as::<_, InvoiceRow>(
      r#"
            INSERT INTO invoices (comp_code, amt)
            VALUES ($1, $2)
            RETURNING id, comp_code, amt, paid, add_date, paid_date
            "#,
    )
    .bind(&invoice.comp_code)
    .bind(invoice.amt)
    .fetch_one(&self.pool)
    .await?;

    Ok(row.into())
  }

  async fn update_amount(&self, id: i32, amt: Decimal) -> Result<Option<Invoice>, InvoiceError> {
    let row = sqlx::query_as::<_, InvoiceRow>(
      r#"
            UPDATE invoices
            SET amt = $2
            WHERE id = $1
            RETURNING id, comp_code, amt, paid, add_date, paid_date
            "#,
    )
    .bind(id)
    .bind(amt)
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(Invoice::from))
  }

  async fn delete(&self, id: i32) -> Result<bool, InvoiceError> {
    let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await?;

    Ok(result.rows_affected() > 0)
  }
}
