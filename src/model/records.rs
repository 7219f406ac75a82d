use chrono::{DateTime, NaiveDate, Utc};

use serde::{Deserialize, Serialize};

use uuid::Uuid;

/// Stored disclosure record.
/// NOTE: Written and archived by the ingestion job only, this service never mutates them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Record {
    pub id: Uuid,
    pub announcement_date: Option<NaiveDate>,
    pub company_name: String,
    pub brand: Option<String>,
    pub product_name: String,
    pub violation: Option<String>,
    pub batch_number: Option<String>,
    pub district: String,
    pub city: Option<String>,
    pub product_group: String,
    /// Category code, see [`crate::domain::Category`]
    pub category: String,
    /// `false` once the record is withdrawn from the published list
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    /// Set when the record was archived
    pub removed_at: Option<DateTime<Utc>>,
}

/// Paging metadata for a record listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    /// Matching records before paging
    pub total: i64,
    pub total_pages: i64,
}

impl Pagination {
    pub fn new(page: u32, limit: u32, total: i64) -> Self {
        let limit_wide = i64::from(limit.max(1));
        let total = total.max(0);
        let total_pages = (total + limit_wide - 1) / limit_wide;

        Self {
            page,
            limit,
            total,
            total_pages,
        }
    }
}

/// One page of disclosure records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordPage {
    pub data: Vec<Record>,
    pub pagination: Pagination,
}
