use sqlx::{PgExecutor, PgPool, Postgres, QueryBuilder};

use crate::domain::RecordQuery;
use crate::model::{BrandHistory, Pagination, Record, RecordPage};

const RECORD_COLUMNS: &str = "id, announcement_date, company_name, brand, product_name, violation, \
     batch_number, district, city, product_group, category, is_active, created_at, removed_at";

/// Read-only repository over the disclosure records table
pub struct RecordRepo;

impl RecordRepo {
    /// Fetch one page of records matching the query, along with the total match count
    #[tracing::instrument(name = "List records", skip(pool))]
    pub async fn list(pool: &PgPool, query: &RecordQuery) -> sqlx::Result<RecordPage> {
        let total = Self::count_matching(pool, query).await?;
        let data = Self::fetch_page(pool, query).await?;

        Ok(RecordPage {
            data,
            pagination: Pagination::new(query.page, query.limit, total),
        })
    }

    #[tracing::instrument(name = "Count matching records", skip(executor))]
    pub async fn count_matching<'con>(
        executor: impl PgExecutor<'con>,
        query: &RecordQuery,
    ) -> sqlx::Result<i64> {
        let mut builder = QueryBuilder::new("select count(*) from foods");
        push_filters(&mut builder, query);

        let (count,) = builder
            .build_query_as::<(i64,)>()
            .fetch_one(executor)
            .await?;

        Ok(count)
    }

    #[tracing::instrument(name = "Fetch a page of records", skip(executor))]
    pub async fn fetch_page<'con>(
        executor: impl PgExecutor<'con>,
        query: &RecordQuery,
    ) -> sqlx::Result<Vec<Record>> {
        let mut builder = QueryBuilder::new(format!("select {} from foods", RECORD_COLUMNS));
        push_filters(&mut builder, query);
        // Ties on created_at fall back to insertion order
        builder
            .push(" order by created_at desc, seq asc limit ")
            .push_bind(i64::from(query.limit))
            .push(" offset ")
            .push_bind(query.offset());

        builder
            .build_query_as::<Record>()
            .fetch_all(executor)
            .await
    }

    /// Every record of a brand regardless of active state, newest announcement first
    #[tracing::instrument(name = "Fetch records by brand", skip(executor))]
    pub async fn fetch_by_brand<'con>(
        executor: impl PgExecutor<'con>,
        brand: &str,
    ) -> sqlx::Result<Vec<Record>> {
        let sql = format!(
            "select {} from foods where brand = $1 \
             order by announcement_date desc nulls last, seq asc",
            RECORD_COLUMNS
        );

        sqlx::query_as::<_, Record>(&sql)
            .bind(brand)
            .fetch_all(executor)
            .await
    }

    #[tracing::instrument(name = "Fetch brand history", skip(executor))]
    pub async fn brand_history<'con>(
        executor: impl PgExecutor<'con>,
        brand: String,
    ) -> sqlx::Result<BrandHistory> {
        let records = Self::fetch_by_brand(executor, &brand).await?;
        Ok(BrandHistory::new(brand, records))
    }
}

/// Append the `where` clause shared by the count and page queries
fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, query: &RecordQuery) {
    builder
        .push(" where is_active = ")
        .push_bind(!query.archived);

    if let Some(category) = query.category {
        builder
            .push(" and category = ")
            .push_bind(category.as_str());
    }

    if let Some(pattern) = query.search_pattern() {
        builder.push(" and (");
        let mut columns = builder.separated(" or ");
        for column in ["company_name", "brand", "city", "product_name"] {
            columns
                .push(format!("{} ilike ", column))
                .push_bind_unseparated(pattern.clone());
        }
        builder.push(")");
    }
}
