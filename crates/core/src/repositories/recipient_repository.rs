use crate::clients::store::StoreClient;
use crate::session::Session;
use asabank_primitives::error::ApiError;
use asabank_primitives::models::recipient::{NewRecipient, Recipient};
use uuid::Uuid;

const TABLE: &str = "recipients";

pub struct RecipientRepository;

impl RecipientRepository {
    pub async fn find_all_by_user(
        store: &StoreClient,
        session: &Session,
        user_id: Uuid,
    ) -> Result<Vec<Recipient>, ApiError> {
        let recipients = store
            .from(TABLE)
            .select("*")
            .eq("user_id", user_id)
            .order("created_at.desc")
            .authorized(session.token())
            .fetch::<Recipient>()
            .await?;
        Ok(recipients)
    }

    pub async fn find_by_id_and_user(
        store: &StoreClient,
        session: &Session,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Recipient>, ApiError> {
        let recipient = store
            .from(TABLE)
            .select("*")
            .eq("id", id)
            .eq("user_id", user_id)
            .authorized(session.token())
            .fetch_optional::<Recipient>()
            .await?;
        Ok(recipient)
    }

    pub async fn create(
        store: &StoreClient,
        session: &Session,
        new_recipient: NewRecipient<'_>,
    ) -> Result<Recipient, ApiError> {
        let recipient = store
            .from(TABLE)
            .authorized(session.token())
            .insert::<_, Recipient>(&new_recipient)
            .await?;
        Ok(recipient)
    }

    pub async fn delete_by_id_and_user(
        store: &StoreClient,
        session: &Session,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<(), ApiError> {
        let deleted = store
            .from(TABLE)
            .eq("id", id)
            .eq("user_id", user_id)
            .authorized(session.token())
            .delete::<Recipient>()
            .await?;

        if deleted.is_empty() {
            return Err(ApiError::NotFound("recipient".into()));
        }

        Ok(())
    }
}
