//! Amazon page repository for database operations.

use domain::models::{Amazon, SubmitPage};
use sqlx::{PgPool, Postgres, Transaction};
use tracing::debug;

use crate::entities::{AmazonEntity, PointKind};
use crate::metrics::QueryTimer;

const AMAZON_COLUMNS: &str = "id, design_id, \
     product_image, product_image_caption, product_title, product_subtitle, product_content, \
     company_image, company_image_caption, company_title, company_subtitle, company_content, \
     created_at, updated_at";

/// Repository for preview page database operations.
#[derive(Clone)]
pub struct AmazonRepository {
    pool: PgPool,
}

impl AmazonRepository {
    /// Creates a new AmazonRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every saved page, oldest first.
    pub async fn list_all(&self) -> Result<Vec<AmazonEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_amazon");
        let result = sqlx::query_as::<_, AmazonEntity>(&format!(
            "SELECT {} FROM amazon ORDER BY id",
            AMAZON_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a page row by ID.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<AmazonEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_amazon_by_id");
        let result = sqlx::query_as::<_, AmazonEntity>(&format!(
            "SELECT {} FROM amazon WHERE id = $1",
            AMAZON_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Bulletpoints of one kind for a page, in submission order.
    pub async fn find_points(&self, amazon_id: i64, kind: PointKind) -> Result<Vec<String>, sqlx::Error> {
        let timer = QueryTimer::new("find_amazon_points");
        let result = sqlx::query_scalar::<_, String>(&format!(
            "SELECT text FROM {} WHERE amazon_id = $1 ORDER BY position",
            kind.table()
        ))
        .bind(amazon_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a page together with its product and company bulletpoints.
    pub async fn find_page(&self, id: i64) -> Result<Option<Amazon>, sqlx::Error> {
        let Some(entity) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let product_points = self.find_points(id, PointKind::Product).await?;
        let company_points = self.find_points(id, PointKind::Company).await?;
        Ok(Some(entity.into_domain(product_points, company_points)))
    }

    /// Create or update a page and replace its bulletpoints.
    ///
    /// Runs in a single transaction. Returns `None` (and writes nothing)
    /// when `page.amazon_id` names a row that does not exist.
    pub async fn save_page(&self, page: &SubmitPage) -> Result<Option<AmazonEntity>, sqlx::Error> {
        let timer = QueryTimer::new("save_amazon");
        let mut tx = self.pool.begin().await?;

        let saved = match page.amazon_id {
            Some(id) => update_page(&mut tx, id, page).await?,
            None => Some(insert_page(&mut tx, page).await?),
        };

        let Some(entity) = saved else {
            tx.rollback().await?;
            timer.record();
            return Ok(None);
        };

        replace_points(&mut tx, entity.id, PointKind::Product, &page.product_points()).await?;
        replace_points(&mut tx, entity.id, PointKind::Company, &page.company_points()).await?;

        tx.commit().await?;
        timer.record();
        Ok(Some(entity))
    }
}

async fn insert_page(
    tx: &mut Transaction<'_, Postgres>,
    page: &SubmitPage,
) -> Result<AmazonEntity, sqlx::Error> {
    sqlx::query_as::<_, AmazonEntity>(&format!(
        r#"
        INSERT INTO amazon (
            design_id,
            product_image, product_image_caption, product_title, product_subtitle, product_content,
            company_image, company_image_caption, company_title, company_subtitle, company_content
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING {}
        "#,
        AMAZON_COLUMNS
    ))
    .bind(page.design.to_string())
    .bind(page.product_image.as_deref())
    .bind(&page.product_image_caption)
    .bind(&page.product_title)
    .bind(&page.product_subtitle)
    .bind(&page.product_content)
    .bind(page.company_image.as_deref())
    .bind(&page.company_image_caption)
    .bind(&page.company_title)
    .bind(&page.company_subtitle)
    .bind(&page.company_content)
    .fetch_one(&mut **tx)
    .await
}

async fn update_page(
    tx: &mut Transaction<'_, Postgres>,
    id: i64,
    page: &SubmitPage,
) -> Result<Option<AmazonEntity>, sqlx::Error> {
    // Image paths are only replaced when a new upload was accepted.
    sqlx::query_as::<_, AmazonEntity>(&format!(
        r#"
        UPDATE amazon
        SET
            design_id = $2,
            product_image = COALESCE($3, product_image),
            product_image_caption = $4,
            product_title = $5,
            product_subtitle = $6,
            product_content = $7,
            company_image = COALESCE($8, company_image),
            company_image_caption = $9,
            company_title = $10,
            company_subtitle = $11,
            company_content = $12,
            updated_at = NOW()
        WHERE id = $1
        RETURNING {}
        "#,
        AMAZON_COLUMNS
    ))
    .bind(id)
    .bind(page.design.to_string())
    .bind(page.product_image.as_deref())
    .bind(&page.product_image_caption)
    .bind(&page.product_title)
    .bind(&page.product_subtitle)
    .bind(&page.product_content)
    .bind(page.company_image.as_deref())
    .bind(&page.company_image_caption)
    .bind(&page.company_title)
    .bind(&page.company_subtitle)
    .bind(&page.company_content)
    .fetch_optional(&mut **tx)
    .await
}

async fn replace_points(
    tx: &mut Transaction<'_, Postgres>,
    amazon_id: i64,
    kind: PointKind,
    points: &[&str],
) -> Result<(), sqlx::Error> {
    let deleted = sqlx::query(&format!("DELETE FROM {} WHERE amazon_id = $1", kind.table()))
        .bind(amazon_id)
        .execute(&mut **tx)
        .await?
        .rows_affected();

    if !points.is_empty() {
        let texts: Vec<String> = points.iter().map(|p| p.to_string()).collect();
        sqlx::query(&format!(
            r#"
            INSERT INTO {} (amazon_id, position, text)
            SELECT $1, p.ord::INTEGER, p.text
            FROM UNNEST($2::TEXT[]) WITH ORDINALITY AS p(text, ord)
            "#,
            kind.table()
        ))
        .bind(amazon_id)
        .bind(texts)
        .execute(&mut **tx)
        .await?;
    }

    debug!(
        amazon_id = amazon_id,
        table = kind.table(),
        deleted = deleted,
        inserted = points.len(),
        "Replaced bulletpoints"
    );
    Ok(())
}
