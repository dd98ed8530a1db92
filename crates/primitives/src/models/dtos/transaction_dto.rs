use crate::models::entities::enum_types::{AccountType, RecordState, TransactionKind, TransferMethod};
use crate::models::entities::transaction::TransactionRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct TransactionSummaryDto {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub amount: i64,
    pub method: TransferMethod,
    pub account_type: AccountType,
    pub state: RecordState,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<TransactionRecord> for TransactionSummaryDto {
    fn from(record: TransactionRecord) -> Self {
        Self {
            id: record.id,
            kind: record.kind,
            amount: record.amount,
            method: record.method,
            account_type: record.account_type,
            state: record.state,
            description: record.description,
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<TransactionSummaryDto>,
}
