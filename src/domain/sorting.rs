use std::cmp::Ordering;

use chrono::NaiveDate;

use serde::{Deserialize, Serialize};

use crate::model::Record;

lazy_static::lazy_static! {
    /// Stand-in for a missing announcement date, sorts before any real one
    static ref MISSING_DATE: NaiveDate = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
}

/// Column a fetched page can be re-sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    AnnouncementDate,
    CompanyName,
    Brand,
    ProductName,
    City,
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Current sort of a record table, newest announcement first by default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub field: SortField,
    pub order: SortOrder,
}

impl Default for SortKey {
    fn default() -> Self {
        Self {
            field: SortField::AnnouncementDate,
            order: SortOrder::Desc,
        }
    }
}

impl SortKey {
    /// Sort key after the user picks `field`: the same field flips the order,
    /// a different field starts ascending.
    pub fn toggle(self, field: SortField) -> Self {
        if self.field == field {
            Self {
                field,
                order: self.order.reversed(),
            }
        } else {
            Self {
                field,
                order: SortOrder::Asc,
            }
        }
    }

    fn compare(&self, a: &Record, b: &Record) -> Ordering {
        let ordering = match self.field {
            SortField::AnnouncementDate => announcement_date(a).cmp(&announcement_date(b)),
            SortField::CompanyName => a.company_name.cmp(&b.company_name),
            SortField::Brand => text(&a.brand).cmp(text(&b.brand)),
            SortField::ProductName => a.product_name.cmp(&b.product_name),
            SortField::City => text(&a.city).cmp(text(&b.city)),
            SortField::Category => a.category.cmp(&b.category),
        };

        match self.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

fn announcement_date(record: &Record) -> NaiveDate {
    record.announcement_date.unwrap_or(*MISSING_DATE)
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

/// Sorted copy of a page of records. Equal keys keep their fetched order.
pub fn sorted(records: &[Record], key: SortKey) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| key.compare(a, b));
    sorted
}
