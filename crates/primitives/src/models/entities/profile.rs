use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-user bookkeeping row keyed by the auth user id. `balance` mirrors the
/// sum over the user's accounts and is maintained by the withdrawal flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub full_name: Option<String>,
    pub username: Option<String>,
    pub bio: Option<String>,
    pub contact_number: Option<String>,
    pub balance: i64,
    pub withdrawal_count: i32,
    pub fee_acknowledged: bool,
    pub version: i64,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct NewProfile {
    pub id: Uuid,
    pub balance: i64,
    pub withdrawal_count: i32,
    pub fee_acknowledged: bool,
    pub version: i64,
}
