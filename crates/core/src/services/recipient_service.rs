use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::app_state::AppState;
use crate::repositories::recipient_repository::RecipientRepository;
use crate::session::Session;
pub use asabank_primitives::{
    error::{ApiError, AuthError},
    models::{
        recipient::NewRecipient,
        recipient_dto::{CreateRecipientRequest, RecipientDto, RecipientsResponse},
    },
};

pub struct RecipientService;

impl RecipientService {
    pub async fn list_recipients(
        state: &AppState,
        session: &Session,
        uid: Uuid,
    ) -> Result<RecipientsResponse, ApiError> {
        let recipients =
            RecipientRepository::find_all_by_user(&state.store, session, uid).await?;

        Ok(RecipientsResponse {
            recipients: recipients.into_iter().map(RecipientDto::from).collect(),
        })
    }

    pub async fn create_recipient(
        state: &AppState,
        session: &Session,
        req: CreateRecipientRequest,
    ) -> Result<RecipientDto, ApiError> {
        req.validate()?;

        if req.user_id != session.user_id() {
            warn!("recipients.create: request user does not match session user");
            return Err(ApiError::Auth(AuthError::UserMismatch));
        }

        let recipient = RecipientRepository::create(
            &state.store,
            session,
            NewRecipient {
                user_id: req.user_id,
                name: &req.name,
                bank_name: &req.bank_name,
                routing_number: &req.routing_number,
                account_number: &req.account_number,
                swift_code: req.swift_code.as_deref(),
            },
        )
        .await?;

        info!("recipients.create: recipient {} saved", recipient.id);

        Ok(recipient.into())
    }

    /// Removing a recipient does not touch past withdrawal rows; they
    /// carry their own copy of the destination.
    pub async fn delete_recipient(
        state: &AppState,
        session: &Session,
        recipient_id: Uuid,
    ) -> Result<(), ApiError> {
        RecipientRepository::delete_by_id_and_user(
            &state.store,
            session,
            recipient_id,
            session.user_id(),
        )
        .await?;

        info!("recipients.delete: recipient {} removed", recipient_id);

        Ok(())
    }
}
