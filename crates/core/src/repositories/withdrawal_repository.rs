use crate::clients::store::StoreClient;
use crate::session::Session;
use asabank_primitives::error::ApiError;
use asabank_primitives::models::enum_types::RecordState;
use asabank_primitives::models::withdrawal::{NewWithdrawal, WithdrawalRecord};
use serde_json::json;
use uuid::Uuid;

const TABLE: &str = "withdrawals";

pub struct WithdrawalRepository;

impl WithdrawalRepository {
    pub async fn create(
        store: &StoreClient,
        session: &Session,
        new_withdrawal: NewWithdrawal<'_>,
    ) -> Result<WithdrawalRecord, ApiError> {
        let record = store
            .from(TABLE)
            .authorized(session.token())
            .insert::<_, WithdrawalRecord>(&new_withdrawal)
            .await?;
        Ok(record)
    }

    pub async fn mark_state(
        store: &StoreClient,
        session: &Session,
        withdrawal_id: Uuid,
        state: RecordState,
    ) -> Result<(), ApiError> {
        let rows = store
            .from(TABLE)
            .eq("id", withdrawal_id)
            .authorized(session.token())
            .update::<_, WithdrawalRecord>(&json!({ "status": state }))
            .await?;

        if rows.is_empty() {
            return Err(ApiError::NotFound("withdrawal".into()));
        }
        Ok(())
    }

    pub async fn find_all_by_user(
        store: &StoreClient,
        session: &Session,
        user_id: Uuid,
    ) -> Result<Vec<WithdrawalRecord>, ApiError> {
        let records = store
            .from(TABLE)
            .select("*")
            .eq("user_id", user_id)
            .order("created_at.desc")
            .authorized(session.token())
            .fetch::<WithdrawalRecord>()
            .await?;
        Ok(records)
    }
}
