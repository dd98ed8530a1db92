use crate::clients::store::StoreClient;
use crate::session::Session;
use asabank_primitives::error::ApiError;
use asabank_primitives::models::account::{Account, NewAccount};
use asabank_primitives::models::enum_types::AccountType;
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

const TABLE: &str = "accounts";

pub struct AccountRepository;

impl AccountRepository {
    pub async fn find_all_by_user(
        store: &StoreClient,
        session: &Session,
        user_id: Uuid,
    ) -> Result<Vec<Account>, ApiError> {
        let accounts = store
            .from(TABLE)
            .select("*")
            .eq("user_id", user_id)
            .order("created_at.asc")
            .authorized(session.token())
            .fetch::<Account>()
            .await?;
        Ok(accounts)
    }

    pub async fn find_by_user_and_type(
        store: &StoreClient,
        session: &Session,
        user_id: Uuid,
        account_type: AccountType,
    ) -> Result<Option<Account>, ApiError> {
        let account = store
            .from(TABLE)
            .select("*")
            .eq("user_id", user_id)
            .eq("account_type", account_type)
            .authorized(session.token())
            .fetch_optional::<Account>()
            .await?;
        Ok(account)
    }

    /// Fetch the account row, creating it with a zero balance when the user
    /// has never used this account type before.
    pub async fn create_if_missing(
        store: &StoreClient,
        session: &Session,
        user_id: Uuid,
        account_type: AccountType,
    ) -> Result<Account, ApiError> {
        if let Some(account) =
            Self::find_by_user_and_type(store, session, user_id, account_type).await?
        {
            return Ok(account);
        }

        let new_account = NewAccount {
            user_id,
            account_type,
            balance: 0,
            version: 1,
        };

        store
            .from(TABLE)
            .on_conflict("user_id,account_type")
            .authorized(session.token())
            .insert_if_missing(&new_account)
            .await?;

        // Re-fetch; a concurrent creator may have won the insert
        Self::find_by_user_and_type(store, session, user_id, account_type)
            .await?
            .ok_or_else(|| ApiError::NotFound("account".into()))
    }

    /// One guarded balance write. `None` means the version filter matched
    /// nothing: another writer got there first.
    pub async fn cas_balance(
        store: &StoreClient,
        session: &Session,
        account_id: Uuid,
        expected_version: i64,
        new_balance: i64,
    ) -> Result<Option<Account>, ApiError> {
        let patch = json!({
            "balance": new_balance,
            "version": expected_version + 1,
            "updated_at": Utc::now(),
        });

        let rows = store
            .from(TABLE)
            .eq("id", account_id)
            .eq("version", expected_version)
            .authorized(session.token())
            .update::<_, Account>(&patch)
            .await?;

        Ok(rows.into_iter().next())
    }
}
