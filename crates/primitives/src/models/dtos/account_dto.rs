use crate::models::entities::account::Account;
use crate::models::entities::enum_types::{AccountType, TransferMethod};
use crate::money::validate_positive_amount;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- Account & Balance DTOs ---

#[derive(Debug, Serialize)]
pub struct AccountDto {
    pub id: Uuid,
    pub account_type: AccountType,
    pub balance: i64, // minor units
}

impl From<Account> for AccountDto {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            account_type: account.account_type,
            balance: account.balance,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AccountsResponse {
    pub accounts: Vec<AccountDto>,
}

/// Per-type balances for display. Account rows that do not exist yet
/// read as zero.
#[derive(Debug, Serialize)]
pub struct BalancesResponse {
    pub checking: i64,
    pub savings: i64,
    pub total: i64,
}

// --- Deposit DTOs ---

#[derive(Debug, Deserialize, Validate)]
pub struct DepositRequest {
    pub user_id: Uuid,
    pub account_type: AccountType,
    #[validate(custom(function = validate_positive_amount))]
    pub amount: String,
    pub method: TransferMethod,
    #[validate(length(max = 200))]
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DepositResponse {
    pub transaction_id: Uuid,
    pub account_id: Uuid,
    pub new_balance: i64,
}
