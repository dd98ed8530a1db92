use chrono::Utc;
use tracing::{error, info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::app_state::AppState;
use crate::clients::realtime::Subscription;
use crate::repositories::ticket_repository::TicketRepository;
use crate::session::Session;
pub use asabank_primitives::{
    error::{ApiError, AuthError},
    models::{
        enum_types::TicketStatus,
        ticket::{effective_status, NewTicket},
        ticket_dto::{
            CreateTicketRequest, TicketAttachment, TicketDto, TicketFilter, TicketsResponse,
        },
    },
};

pub struct TicketService;

impl TicketService {
    /// Create an open ticket, uploading the attachment first when one is
    /// given. A failed upload files the ticket without it.
    pub async fn create_ticket(
        state: &AppState,
        session: &Session,
        req: CreateTicketRequest,
        attachment: Option<TicketAttachment>,
    ) -> Result<TicketDto, ApiError> {
        req.validate()?;

        if req.user_id != session.user_id() {
            warn!("tickets.create: request user does not match session user");
            return Err(ApiError::Auth(AuthError::UserMismatch));
        }

        let attachment_url = match attachment {
            Some(attachment) => Self::upload_attachment(state, session, attachment).await,
            None => None,
        };

        let ticket = TicketRepository::create(
            &state.store,
            session,
            NewTicket {
                user_id: req.user_id,
                email: session.user().email.as_deref(),
                subject: &req.subject,
                message: &req.message,
                status: TicketStatus::Open,
                attachment_url,
            },
        )
        .await?;

        info!("tickets.create: ticket {} opened", ticket.id);

        Ok(ticket.into())
    }

    /// Tickets newest first, with the 48 hour auto-close applied. Rows
    /// that crossed the threshold since the last read are written back as
    /// closed; a write-back failure still returns the row closed.
    pub async fn list_tickets(
        state: &AppState,
        session: &Session,
        uid: Uuid,
        filter: TicketFilter,
    ) -> Result<TicketsResponse, ApiError> {
        let rows = TicketRepository::find_all_by_user(&state.store, session, uid).await?;
        let now = Utc::now();

        let mut tickets = Vec::with_capacity(rows.len());
        for mut ticket in rows {
            let status = effective_status(ticket.status, ticket.created_at, now);
            if status != ticket.status {
                if let Err(e) = TicketRepository::close(&state.store, session, ticket.id).await {
                    error!("tickets.list: auto-close of {} failed: {}", ticket.id, e);
                }
                ticket.status = status;
            }

            let keep = match filter {
                TicketFilter::All => true,
                TicketFilter::Open => ticket.status == TicketStatus::Open,
                TicketFilter::Closed => ticket.status == TicketStatus::Closed,
            };
            if keep {
                tickets.push(TicketDto::from(ticket));
            }
        }

        Ok(TicketsResponse { tickets })
    }

    /// Change watcher over the user's ticket rows. The returned guard
    /// stops the watcher when dropped.
    pub fn watch_tickets<F>(state: &AppState, session: &Session, on_change: F) -> Subscription
    where
        F: Fn() + Send + 'static,
    {
        state.realtime.subscribe(
            session.token(),
            "tickets",
            "user_id",
            session.user_id().to_string(),
            on_change,
        )
    }

    async fn upload_attachment(
        state: &AppState,
        session: &Session,
        attachment: TicketAttachment,
    ) -> Option<String> {
        let bucket = &state.config.attachment_bucket;
        let path = format!(
            "tickets/{}_{}",
            Utc::now().timestamp_millis(),
            attachment.file_name
        );

        if let Err(e) = state
            .storage
            .upload(
                session.token(),
                bucket,
                &path,
                &attachment.content_type,
                attachment.bytes,
            )
            .await
        {
            warn!("tickets.create: attachment upload failed: {}", e);
            return None;
        }

        match state.storage.public_url(bucket, &path) {
            Ok(url) => Some(url),
            Err(e) => {
                warn!("tickets.create: attachment URL could not be formed: {}", e);
                None
            }
        }
    }
}
