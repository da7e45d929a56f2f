//! Flavor model and the request bodies that create and update it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single flavor in the inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flavor {
    /// Store-assigned primary key, never reused.
    #[serde(rename = "scoopID")]
    pub scoop_id: i64,
    pub flavor: String,
    pub churned_at: Option<DateTime<Utc>>,
    /// Refreshed to "now" on every create and update.
    pub best_before: DateTime<Utc>,
}

/// Request body for creating a new flavor.
///
/// There is deliberately no `scoopID` or `bestBefore` field here: the store
/// assigns the key and the server stamps the timestamp.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFlavorRequest {
    pub flavor: String,
    #[serde(default)]
    pub churned_at: Option<DateTime<Utc>>,
}

/// Request body for partially updating an existing flavor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFlavorRequest {
    #[serde(default)]
    pub flavor: Option<String>,
    #[serde(default)]
    pub churned_at: Option<DateTime<Utc>>,
}
