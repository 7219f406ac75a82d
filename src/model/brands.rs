use serde::{Deserialize, Serialize};

use crate::model::Record;

/// Counts derived from a brand's full record set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandStats {
    pub total: usize,
    pub active: usize,
    pub archived: usize,
}

impl BrandStats {
    pub fn from_records(records: &[Record]) -> Self {
        let active = records.iter().filter(|r| r.is_active).count();
        Self {
            total: records.len(),
            active,
            archived: records.len() - active,
        }
    }
}

/// Every record ever published for one brand, active and archived
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandHistory {
    pub brand: String,
    /// Newest announcement first, undated records last
    pub records: Vec<Record>,
    pub stats: BrandStats,
}

impl BrandHistory {
    pub fn new(brand: String, records: Vec<Record>) -> Self {
        let stats = BrandStats::from_records(&records);
        Self {
            brand,
            records,
            stats,
        }
    }
}
