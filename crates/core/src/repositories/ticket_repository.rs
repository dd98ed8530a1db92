use crate::clients::store::StoreClient;
use crate::session::Session;
use asabank_primitives::error::ApiError;
use asabank_primitives::models::enum_types::TicketStatus;
use asabank_primitives::models::ticket::{NewTicket, SupportTicket};
use serde_json::json;
use uuid::Uuid;

const TABLE: &str = "tickets";

pub struct TicketRepository;

impl TicketRepository {
    pub async fn create(
        store: &StoreClient,
        session: &Session,
        new_ticket: NewTicket<'_>,
    ) -> Result<SupportTicket, ApiError> {
        let ticket = store
            .from(TABLE)
            .authorized(session.token())
            .insert::<_, SupportTicket>(&new_ticket)
            .await?;
        Ok(ticket)
    }

    pub async fn find_all_by_user(
        store: &StoreClient,
        session: &Session,
        user_id: Uuid,
    ) -> Result<Vec<SupportTicket>, ApiError> {
        let tickets = store
            .from(TABLE)
            .select("*")
            .eq("user_id", user_id)
            .order("created_at.desc")
            .authorized(session.token())
            .fetch::<SupportTicket>()
            .await?;
        Ok(tickets)
    }

    /// Persist an auto-close. Idempotent: a row someone else already
    /// closed or removed is not an error.
    pub async fn close(
        store: &StoreClient,
        session: &Session,
        ticket_id: Uuid,
    ) -> Result<(), ApiError> {
        store
            .from(TABLE)
            .eq("id", ticket_id)
            .authorized(session.token())
            .update::<_, SupportTicket>(&json!({ "status": TicketStatus::Closed }))
            .await?;
        Ok(())
    }
}
