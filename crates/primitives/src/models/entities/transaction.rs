use crate::models::entities::enum_types::{AccountType, RecordState, TransactionKind, TransferMethod};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A row in the transactions log. Append-only; only `status` ever changes,
/// and only pending rows change it. The destination columns are populated
/// on transfer rows and left null otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: Uuid,
    pub user_id: Uuid,

    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: i64,
    pub method: TransferMethod,
    pub account_type: AccountType,

    #[serde(rename = "status")]
    pub state: RecordState,
    pub description: Option<String>,

    pub bank_name: Option<String>,
    pub routing_number: Option<String>,
    pub account_number: Option<String>,
    pub swift_code: Option<String>,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct NewTransaction<'a> {
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: i64,
    pub method: TransferMethod,
    pub account_type: AccountType,
    #[serde(rename = "status")]
    pub state: RecordState,
    pub description: Option<&'a str>,
}
