use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::domain::company::{Company, CompanyError, CompanyRepository};

#[derive(Debug, FromRow)]
struct CompanyRow {
  code: String,
  name: String,
  description: Option<String>,
}

impl From<CompanyRow> for Company {
  fn from(row: CompanyRow) -> Self {
    Company {
      code: row.code,
      name: row.name,
      description: row.description,
    }
  }
}

pub struct PostgresCompanyRepository {
  pool: PgPool,
}

impl PostgresCompanyRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl CompanyRepository for PostgresCompanyRepository {
  async fn find_all(&self) -> Result<Vec<Company>, CompanyError> {
    let rows = sqlx::query_as::<_, CompanyRow>(
      r#"
            SELECT code, name, description
            FROM companies
            ORDER BY code
            "#,
    )
    .fetch_all(&self.pool)
    .await?;

    Ok(rows.into_iter().map(Company::from).collect())
  }

  async fn find_by_code(&self, code: &str) -> Result<Option<Company>, CompanyError> {
    let row = sqlx::query_as::<_, CompanyRow>(
      r#"
            SELECT code, name, description
            FROM companies
            WHERE code = $1
            "#,
    )
    .bind(code)
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(Company::from))
  }

  async fn create(&self, company: Company) -> Result<Company, CompanyError> {
    let row = sqlx::query_as::<_, CompanyRow>(
      r#"
            INSERT INTO companies (code, name, description)
            VALUES ($1, $2, $3)
            RETURNING code, name, description
            "#,
    )
    .bind(&company.code)
    .bind(&company.name)
    .bind(company.description.as_deref())
    .fetch_one(&self.pool)
    .await?;

    Ok(row.into())
  }

  async fn update(
    &self,
    code: &str,
    name: &str,
    description: Option<&str>,
  ) -> Result<Option<Company>, CompanyError> {
    let row = sqlx::query_as::<_, CompanyRow>(
      r#"
            UPDATE companies
            SET name = $2, description = $3
            WHERE code = $1
            RETURNING code, name, description
            "#,
    )
    .bind(code)
    .bind(name)
    .bind(description)
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(Company::from))
  }

  async fn delete(&self, code: &str) -> Result<bool, CompanyError> {
    let result = sqlx::query("DELETE FROM companies WHERE code = $1")
      .bind(code)
      .execute(&self.pool)
      .await?;

    Ok(result.rows_affected() > 0)
  }
}
