use crate::models::entities::enum_types::AccountType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row per user per account type. `balance` is minor units; `version`
/// guards every balance write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub user_id: Uuid,
    pub account_type: AccountType,
    pub balance: i64,
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct NewAccount {
    pub user_id: Uuid,
    pub account_type: AccountType,
    pub balance: i64,
    pub version: i64,
}
