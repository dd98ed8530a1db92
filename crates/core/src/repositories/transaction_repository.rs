use crate::clients::store::StoreClient;
use crate::session::Session;
use asabank_primitives::error::ApiError;
use asabank_primitives::models::transaction::{NewTransaction, TransactionRecord};
use uuid::Uuid;

const TABLE: &str = "transactions";

pub struct TransactionRepository;

impl TransactionRepository {
    pub async fn create(
        store: &StoreClient,
        session: &Session,
        new_transaction: NewTransaction<'_>,
    ) -> Result<TransactionRecord, ApiError> {
        let record = store
            .from(TABLE)
            .authorized(session.token())
            .insert::<_, TransactionRecord>(&new_transaction)
            .await?;
        Ok(record)
    }

    pub async fn find_recent_by_user(
        store: &StoreClient,
        session: &Session,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<TransactionRecord>, ApiError> {
        let records = store
            .from(TABLE)
            .select("*")
            .eq("user_id", user_id)
            .order("created_at.desc")
            .limit(limit)
            .authorized(session.token())
            .fetch::<TransactionRecord>()
            .await?;
        Ok(records)
    }

    pub async fn find_all_by_user(
        store: &StoreClient,
        session: &Session,
        user_id: Uuid,
    ) -> Result<Vec<TransactionRecord>, ApiError> {
        let records = store
            .from(TABLE)
            .select("*")
            .eq("user_id", user_id)
            .order("created_at.desc")
            .authorized(session.token())
            .fetch::<TransactionRecord>()
            .await?;
        Ok(records)
    }
}
