use tracing::{error, info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::app_state::AppState;
use crate::clients::store::StoreClient;
use crate::repositories::account_repository::AccountRepository;
use crate::repositories::profile_repository::ProfileRepository;
use crate::repositories::recipient_repository::RecipientRepository;
use crate::repositories::withdrawal_repository::WithdrawalRepository;
use crate::session::Session;
pub use asabank_primitives::{
    error::{ApiError, AuthError},
    models::{
        account::Account,
        enum_types::{AccountType, RecordState, TransactionKind},
        profile::Profile,
        withdrawal::NewWithdrawal,
        withdrawal_dto::{WithdrawRequest, WithdrawResponse},
    },
};
use asabank_primitives::money;

/// Withdrawals beyond this many are gated on a fee acknowledgment.
const FREE_WITHDRAWALS: i32 = 2;
const CAS_MAX_RETRIES: usize = 3;

pub struct WithdrawalService;

impl WithdrawalService {
    /// Move money out of an account: pending record first, then the
    /// guarded debit, then profile bookkeeping, then the completion mark.
    ///
    /// A failure before the debit closes the pending record out as failed
    /// and aborts cleanly. A failure after the debit is reported as a
    /// partial write; the money has moved and stays moved.
    pub async fn withdraw(
        state: &AppState,
        session: &Session,
        req: WithdrawRequest,
    ) -> Result<WithdrawResponse, ApiError> {
        req.validate()?;

        let amount_minor =
            money::parse_amount(&req.amount).map_err(|e| ApiError::validation("amount", e))?;

        if req.user_id != session.user_id() {
            warn!("withdraw: request user does not match session user");
            return Err(ApiError::Auth(AuthError::UserMismatch));
        }

        let store = &state.store;

        // Fee gate: the third and every later withdrawal needs the flat
        // fee acknowledged first
        let profile = ProfileRepository::create_if_missing(store, session, req.user_id).await?;
        if profile.withdrawal_count >= FREE_WITHDRAWALS && !profile.fee_acknowledged {
            info!(
                "withdraw: fee acknowledgment required, fee {}",
                money::format_amount(state.config.withdrawal_fee_minor)
            );
            return Err(ApiError::FeeRequired {
                withdrawal_count: profile.withdrawal_count,
                fee: state.config.withdrawal_fee_minor,
            });
        }

        let account =
            AccountRepository::find_by_user_and_type(store, session, req.user_id, req.account_type)
                .await?
                .ok_or_else(|| ApiError::NotFound("account".into()))?;

        if account.balance < amount_minor {
            return Err(ApiError::InsufficientFunds {
                requested: amount_minor,
                available: account.balance,
            });
        }

        let recipient =
            RecipientRepository::find_by_id_and_user(store, session, req.recipient_id, req.user_id)
                .await?
                .ok_or_else(|| ApiError::NotFound("recipient".into()))?;

        // The pending row exists before any money moves, carrying the
        // destination as it was at submission time
        let withdrawal = WithdrawalRepository::create(
            store,
            session,
            NewWithdrawal {
                user_id: req.user_id,
                kind: TransactionKind::Withdrawal,
                amount: amount_minor,
                method: req.method,
                account_type: req.account_type,
                state: RecordState::Pending,
                bank_name: &recipient.bank_name,
                routing_number: &recipient.routing_number,
                account_number: &recipient.account_number,
                swift_code: recipient.swift_code.as_deref(),
            },
        )
        .await?;

        let account = match Self::debit_with_retries(
            store,
            session,
            req.user_id,
            req.account_type,
            amount_minor,
            account,
        )
        .await
        {
            Ok(account) => account,
            Err(e) => {
                Self::mark_failed(store, session, withdrawal.id).await;
                return Err(e);
            }
        };

        // Money has moved; everything below reports as partial on failure
        if let Err(e) =
            Self::apply_profile_bookkeeping(store, session, req.user_id, amount_minor, profile)
                .await
        {
            error!("withdraw: profile bookkeeping failed after debit: {}", e);
            return Err(e.into_partial(
                "withdraw",
                vec!["withdrawal record created", "account balance debited"],
                "profile bookkeeping update",
            ));
        }

        if let Err(e) =
            WithdrawalRepository::mark_state(store, session, withdrawal.id, RecordState::Completed)
                .await
        {
            error!("withdraw: completion mark failed after debit: {}", e);
            return Err(e.into_partial(
                "withdraw",
                vec![
                    "withdrawal record created",
                    "account balance debited",
                    "profile bookkeeping updated",
                ],
                "withdrawal record completion",
            ));
        }

        info!("withdraw: withdrawal {} completed", withdrawal.id);

        Ok(WithdrawResponse {
            withdrawal_id: withdrawal.id,
            new_balance: account.balance,
        })
    }

    /// Guarded debit. Funds are re-checked against every fresh read, so a
    /// balance that shrank underneath us fails as insufficient rather than
    /// going negative.
    async fn debit_with_retries(
        store: &StoreClient,
        session: &Session,
        user_id: Uuid,
        account_type: AccountType,
        amount_minor: i64,
        mut account: Account,
    ) -> Result<Account, ApiError> {
        for _ in 0..CAS_MAX_RETRIES {
            if account.balance < amount_minor {
                return Err(ApiError::InsufficientFunds {
                    requested: amount_minor,
                    available: account.balance,
                });
            }

            let updated = AccountRepository::cas_balance(
                store,
                session,
                account.id,
                account.version,
                account.balance - amount_minor,
            )
            .await?;

            if let Some(updated) = updated {
                return Ok(updated);
            }

            account = AccountRepository::find_by_user_and_type(store, session, user_id, account_type)
                .await?
                .ok_or_else(|| ApiError::NotFound("account".into()))?;
        }

        warn!("withdraw: debit kept losing version races");
        Err(ApiError::Conflict(
            "Account was modified concurrently, retry the withdrawal".into(),
        ))
    }

    /// Mirror the debit into the profile row: balance down, count up, both
    /// under the same version guard.
    async fn apply_profile_bookkeeping(
        store: &StoreClient,
        session: &Session,
        user_id: Uuid,
        amount_minor: i64,
        mut profile: Profile,
    ) -> Result<(), ApiError> {
        for _ in 0..CAS_MAX_RETRIES {
            let updated = ProfileRepository::cas_apply_withdrawal(
                store,
                session,
                user_id,
                profile.version,
                profile.balance - amount_minor,
                profile.withdrawal_count + 1,
            )
            .await?;

            if updated.is_some() {
                return Ok(());
            }

            profile = ProfileRepository::find_by_user(store, session, user_id)
                .await?
                .ok_or_else(|| ApiError::NotFound("profile".into()))?;
        }

        Err(ApiError::Conflict(
            "Profile was modified concurrently".into(),
        ))
    }

    /// Best-effort close-out of the pending record when nothing was
    /// debited. The original abort error matters more than this one.
    async fn mark_failed(store: &StoreClient, session: &Session, withdrawal_id: Uuid) {
        if let Err(e) =
            WithdrawalRepository::mark_state(store, session, withdrawal_id, RecordState::Failed)
                .await
        {
            error!(
                "withdraw: could not mark withdrawal {} failed: {}",
                withdrawal_id, e
            );
        }
    }
}
