use crate::models::entities::enum_types::{AccountType, RecordState, TransactionKind, TransferMethod};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A row in the withdrawals log. Created `pending` before any money moves,
/// then marked `completed` or `failed`. Destination fields are copied off
/// the chosen recipient at creation time, so the row stays readable even
/// if the recipient is later deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawalRecord {
    pub id: Uuid,
    pub user_id: Uuid,

    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: i64,
    pub method: TransferMethod,
    pub account_type: AccountType,

    #[serde(rename = "status")]
    pub state: RecordState,

    pub bank_name: String,
    pub routing_number: String,
    pub account_number: String,
    pub swift_code: Option<String>,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct NewWithdrawal<'a> {
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: i64,
    pub method: TransferMethod,
    pub account_type: AccountType,
    #[serde(rename = "status")]
    pub state: RecordState,
    pub bank_name: &'a str,
    pub routing_number: &'a str,
    pub account_number: &'a str,
    pub swift_code: Option<&'a str>,
}
