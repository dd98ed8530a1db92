use crate::models::entities::enum_types::{AccountType, RecordState, TransferMethod};
use crate::models::entities::withdrawal::WithdrawalRecord;
use crate::money::validate_positive_amount;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- Withdrawal DTOs ---

#[derive(Debug, Deserialize, Validate)]
pub struct WithdrawRequest {
    pub user_id: Uuid,

    pub account_type: AccountType,

    #[validate(custom(function = validate_positive_amount))]
    pub amount: String,

    pub method: TransferMethod,

    pub recipient_id: Uuid,

    #[validate(length(max = 200))]
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WithdrawResponse {
    pub withdrawal_id: Uuid,
    pub new_balance: i64,
}

// --- Withdrawal history DTOs ---

/// What the history view needs per row: where the money went and how the
/// attempt ended up.
#[derive(Debug, Serialize)]
pub struct WithdrawalSummaryDto {
    pub id: Uuid,
    pub amount: i64,
    pub method: TransferMethod,
    pub account_type: AccountType,
    pub bank_name: String,
    pub state: RecordState,
    pub created_at: DateTime<Utc>,
}

impl From<WithdrawalRecord> for WithdrawalSummaryDto {
    fn from(record: WithdrawalRecord) -> Self {
        Self {
            id: record.id,
            amount: record.amount,
            method: record.method,
            account_type: record.account_type,
            bank_name: record.bank_name,
            state: record.state,
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WithdrawalsResponse {
    pub withdrawals: Vec<WithdrawalSummaryDto>,
}
