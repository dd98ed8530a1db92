use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::app_state::AppState;
use crate::clients::store::StoreClient;
use crate::repositories::account_repository::AccountRepository;
use crate::repositories::transaction_repository::TransactionRepository;
use crate::session::Session;
pub use asabank_primitives::{
    error::{ApiError, AuthError},
    models::{
        account::Account,
        account_dto::{DepositRequest, DepositResponse},
        enum_types::{AccountType, RecordState, TransactionKind},
        transaction::NewTransaction,
    },
};
use asabank_primitives::money;

const MIN_DEPOSIT_MINOR: i64 = 500;
const CAS_MAX_RETRIES: usize = 3;

pub struct DepositService;

impl DepositService {
    /// Credit an account, then append the matching transaction record.
    /// `initial_state` is what the record is written with: the instant
    /// credit flow writes `completed`, the review flow `pending`.
    ///
    /// The two writes are separate requests. When the record insert fails
    /// after the credit committed, the caller gets a partial failure, not
    /// a rollback.
    pub async fn deposit(
        state: &AppState,
        session: &Session,
        req: DepositRequest,
        initial_state: RecordState,
    ) -> Result<DepositResponse, ApiError> {
        req.validate()?;

        let amount_minor =
            money::parse_amount(&req.amount).map_err(|e| ApiError::validation("amount", e))?;
        if amount_minor < MIN_DEPOSIT_MINOR {
            warn!("deposit: amount below minimum");
            let mut err = validator::ValidationError::new("amount_below_minimum");
            err.add_param("min_minor".into(), &MIN_DEPOSIT_MINOR);
            return Err(ApiError::validation("amount", err));
        }

        if req.user_id != session.user_id() {
            warn!("deposit: request user does not match session user");
            return Err(ApiError::Auth(AuthError::UserMismatch));
        }

        let store = &state.store;

        let account =
            AccountRepository::create_if_missing(store, session, req.user_id, req.account_type)
                .await?;

        let account = Self::credit_with_retries(
            store,
            session,
            req.user_id,
            req.account_type,
            amount_minor,
            account,
        )
        .await?;

        let record = TransactionRepository::create(
            store,
            session,
            NewTransaction {
                user_id: req.user_id,
                kind: TransactionKind::Deposit,
                amount: amount_minor,
                method: req.method,
                account_type: req.account_type,
                state: initial_state,
                description: req.description.as_deref(),
            },
        )
        .await
        .map_err(|e| {
            e.into_partial(
                "deposit",
                vec!["account balance credited"],
                "transaction record insert",
            )
        })?;

        info!("deposit: account {} credited", account.id);

        Ok(DepositResponse {
            transaction_id: record.id,
            account_id: account.id,
            new_balance: account.balance,
        })
    }

    /// Guarded credit. Version races re-read the row and try again; a full
    /// set of losses surfaces as a conflict.
    async fn credit_with_retries(
        store: &StoreClient,
        session: &Session,
        user_id: Uuid,
        account_type: AccountType,
        amount_minor: i64,
        mut account: Account,
    ) -> Result<Account, ApiError> {
        for _ in 0..CAS_MAX_RETRIES {
            let new_balance = account.balance.checked_add(amount_minor).ok_or_else(|| {
                ApiError::validation(
                    "amount",
                    validator::ValidationError::new("amount_out_of_range"),
                )
            })?;

            let updated = AccountRepository::cas_balance(
                store,
                session,
                account.id,
                account.version,
                new_balance,
            )
            .await?;

            if let Some(updated) = updated {
                return Ok(updated);
            }

            account = AccountRepository::find_by_user_and_type(store, session, user_id, account_type)
                .await?
                .ok_or_else(|| ApiError::NotFound("account".into()))?;
        }

        warn!("deposit: balance write kept losing version races");
        Err(ApiError::Conflict(
            "Account was modified concurrently, retry the deposit".into(),
        ))
    }
}
