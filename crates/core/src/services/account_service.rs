use uuid::Uuid;

use crate::app_state::AppState;
use crate::repositories::account_repository::AccountRepository;
use crate::session::Session;
pub use asabank_primitives::{
    error::ApiError,
    models::{
        account_dto::{AccountDto, AccountsResponse, BalancesResponse},
        enum_types::AccountType,
    },
};

pub struct AccountService;

impl AccountService {
    pub async fn list_accounts(
        state: &AppState,
        session: &Session,
        uid: Uuid,
    ) -> Result<AccountsResponse, ApiError> {
        let accounts = AccountRepository::find_all_by_user(&state.store, session, uid).await?;

        Ok(AccountsResponse {
            accounts: accounts.into_iter().map(AccountDto::from).collect(),
        })
    }

    /// Both sub-balances at once. An account row that does not exist yet
    /// reads as zero.
    pub async fn account_balances(
        state: &AppState,
        session: &Session,
        uid: Uuid,
    ) -> Result<BalancesResponse, ApiError> {
        let accounts = AccountRepository::find_all_by_user(&state.store, session, uid).await?;

        let mut checking = 0;
        let mut savings = 0;
        for account in &accounts {
            match account.account_type {
                AccountType::Checking => checking = account.balance,
                AccountType::Savings => savings = account.balance,
            }
        }

        Ok(BalancesResponse {
            checking,
            savings,
            total: checking + savings,
        })
    }
}
