use chrono::{DateTime, Utc};

use serde::{Deserialize, Serialize};

use uuid::Uuid;

use crate::domain::EmailAddress;

/// New subscriber request
#[derive(Debug)]
pub struct NewSubscriber {
    pub email: EmailAddress,
}

/// Stored subscriber record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Subscriber {
    pub id: Uuid,
    /// Normalized (trimmed, lower-cased) address, unique across subscribers
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Number of current subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriberCount {
    pub count: i64,
}
