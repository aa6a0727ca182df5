use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::domain::industry::{CompanyIndustry, Industry, IndustryError, IndustryRepository};

#[derive(Debug, FromRow)]
struct IndustryRow {
  code: String,
  industry: String,
}

impl From<IndustryRow> for Industry {
  fn from(row: IndustryRow) -> Self {
    Industry {
      code: row.code,
      industry: row.industry,
    }
  }
}

pub struct PostgresIndustryRepository {
  pool: PgPool,
}

impl PostgresIndustryRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl IndustryRepository for PostgresIndustryRepository {
  async fn find_all(&self) -> Result<Vec<Industry>, IndustryError> {
    let rows = sqlx::query_as::<_, IndustryRow>(
      r#"
            SELECT code, industry
            FROM industries
            ORDER BY code
            "#,
    )
    .fetch_all(&self.pool)
    .await?;

    Ok(rows.into_iter().map(Industry::from).collect())
  }

  async fn find_by_code(&self, code: &str) -> Result<Option<Industry>, IndustryError> {
    let row = sqlx::query_as::<_, IndustryRow>(
      r#"
            SELECT code, industry
            FROM industries
            WHERE code = $1
            "#,
    )
    .bind(code)
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(Industry::from))
  }

  async fn create(&self, industry: Industry) -> Result<Industry, IndustryError> {
    let row = sqlx::query_as::<_, IndustryRow>(
      r#"
            INSERT INTO industries (code, industry)
            VALUES ($1, $2)
            RETURNING code, industry
            "#,
    )
    .bind(&industry.code)
    .bind(&industry.industry)
    .fetch_one(&self.pool)
    .await?;

    Ok(row.into())
  }

  async fn find_labels_by_company_code(
    &self,
    comp_code: &str,
  ) -> Result<Vec<String>, IndustryError> {
    let labels = sqlx::query_scalar::<_, String>(
      r#"
            SELECT DISTINCT i.industry
            FROM industries AS i
            JOIN companies_industries AS ci ON ci.industry_code = i.code
            WHERE ci.comp_code = $1
            ORDER BY i.industry
            "#,
    )
    .bind(comp_code)
    .fetch_all(&self.pool)
    .await?;

    Ok(labels)
  }

  async fn associate(&self, relation: CompanyIndustry) -> Result<CompanyIndustry, IndustryError> {
    sqlx::query(
      r#"
            INSERT INTO companies_industries (industry_code, comp_code)
            VALUES ($1, $2)
            "#,
    )
    .bind(&relation.industry_code)
    .bind(&relation.comp_code)
    .execute(&self.pool)
    .await?;

    Ok(relation)
  }
}
