use serde::{Deserialize, Serialize};
use serde_aux::prelude::*;

use crate::domain::Category;

const DEFAULT_LIMIT: u32 = 50;
const MAX_LIMIT: u32 = 100;

/// Page size bounds applied to record listings
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageLimits {
    #[serde(
        default = "default_limit",
        deserialize_with = "deserialize_number_from_string"
    )]
    pub default_limit: u32,
    #[serde(
        default = "max_limit",
        deserialize_with = "deserialize_number_from_string"
    )]
    pub max_limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

fn max_limit() -> u32 {
    MAX_LIMIT
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            max_limit: MAX_LIMIT,
        }
    }
}

/// Raw listing parameters as they appear in the query string
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct RecordParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl RecordParams {
    /// Normalize the raw parameters into a listing query.
    ///
    /// Nothing here fails: unknown categories drop the category filter, any
    /// `archive` value other than `true` selects active records, and paging
    /// is clamped into range.
    pub fn normalize(self, limits: &PageLimits) -> RecordQuery {
        let search = self
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let archived = self.archive.as_deref() == Some("true");
        let category = self.category.and_then(|c| c.parse().ok());
        let page = self.page.unwrap_or(1).max(1);
        let max_limit = limits.max_limit.max(1);
        let limit = self
            .limit
            .unwrap_or(limits.default_limit)
            .clamp(1, max_limit);

        RecordQuery {
            search,
            archived,
            category,
            page,
            limit,
        }
    }
}

/// A normalized request for one page of disclosure records
#[derive(Debug, Clone, PartialEq)]
pub struct RecordQuery {
    /// Case-insensitive substring matched against company, brand, city and product
    pub search: Option<String>,
    /// `true` selects archived records, `false` active ones. Never both.
    pub archived: bool,
    pub category: Option<Category>,
    /// 1-indexed page number
    pub page: u32,
    pub limit: u32,
}

impl Default for RecordQuery {
    fn default() -> Self {
        RecordParams::default().normalize(&PageLimits::default())
    }
}

impl RecordQuery {
    /// Number of matching rows skipped before this page
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.limit)
    }

    /// `ILIKE` pattern for the search term, with wildcards in the term escaped
    pub fn search_pattern(&self) -> Option<String> {
        self.search.as_deref().map(|term| {
            let mut pattern = String::with_capacity(term.len() + 2);
            pattern.push('%');
            for c in term.chars() {
                if matches!(c, '%' | '_' | '\\') {
                    pattern.push('\\');
                }
                pattern.push(c);
            }
            pattern.push('%');
            pattern
        })
    }
}

impl From<&RecordQuery> for RecordParams {
    fn from(query: &RecordQuery) -> Self {
        Self {
            search: query.search.clone(),
            archive: Some(query.archived.to_string()),
            category: query.category.map(|c| c.as_str().to_string()),
            page: Some(query.page),
            limit: Some(query.limit),
        }
    }
}
