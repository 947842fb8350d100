//! Admin analytics and audit log models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Click count for one offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferStats {
    pub title: String,
    pub clicks: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Aggregate numbers shown in the admin view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analytics {
    pub total_clicks: u64,
    pub total_calls: u64,
    pub offers_stats: Vec<OfferStats>,
}

/// One audit record of a submitted call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallLogEntry {
    pub id: String,
    pub timestamp: NaiveDateTime,
    pub ip: String,
    pub slot: String,
    pub username: String,
    pub action: String,
}
