use uuid::Uuid;

use crate::app_state::AppState;
use crate::repositories::transaction_repository::TransactionRepository;
use crate::repositories::withdrawal_repository::WithdrawalRepository;
use crate::session::Session;
pub use asabank_primitives::{
    error::ApiError,
    models::{
        transaction_dto::{TransactionSummaryDto, TransactionsResponse},
        withdrawal_dto::{WithdrawalSummaryDto, WithdrawalsResponse},
    },
};

const RECENT_TX_LIMIT: i64 = 5;

pub struct TransactionService;

impl TransactionService {
    /// Latest few entries for the dashboard strip.
    pub async fn recent_transactions(
        state: &AppState,
        session: &Session,
        uid: Uuid,
    ) -> Result<TransactionsResponse, ApiError> {
        let records =
            TransactionRepository::find_recent_by_user(&state.store, session, uid, RECENT_TX_LIMIT)
                .await?;

        Ok(TransactionsResponse {
            transactions: records
                .into_iter()
                .map(TransactionSummaryDto::from)
                .collect(),
        })
    }

    pub async fn list_transactions(
        state: &AppState,
        session: &Session,
        uid: Uuid,
    ) -> Result<TransactionsResponse, ApiError> {
        let records = TransactionRepository::find_all_by_user(&state.store, session, uid).await?;

        Ok(TransactionsResponse {
            transactions: records
                .into_iter()
                .map(TransactionSummaryDto::from)
                .collect(),
        })
    }

    /// The withdrawals log is kept separately from the transactions log;
    /// the history view reads it directly.
    pub async fn withdrawal_history(
        state: &AppState,
        session: &Session,
        uid: Uuid,
    ) -> Result<WithdrawalsResponse, ApiError> {
        let records = WithdrawalRepository::find_all_by_user(&state.store, session, uid).await?;

        Ok(WithdrawalsResponse {
            withdrawals: records
                .into_iter()
                .map(WithdrawalSummaryDto::from)
                .collect(),
        })
    }
}
