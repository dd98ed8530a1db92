use crate::models::entities::enum_types::TicketStatus;
use crate::models::entities::ticket::SupportTicket;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- Support ticket DTOs ---

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTicketRequest {
    pub user_id: Uuid,

    #[validate(length(min = 1, max = 200))]
    pub subject: String,

    #[validate(length(min = 1, max = 5000))]
    pub message: String,
}

/// An optional file attached at creation time. Uploaded to blob storage
/// before the ticket row is written.
#[derive(Debug)]
pub struct TicketAttachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketFilter {
    All,
    Open,
    Closed,
}

#[derive(Debug, Serialize)]
pub struct TicketDto {
    pub id: Uuid,
    pub subject: String,
    pub message: String,
    pub status: TicketStatus,
    pub attachment_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<SupportTicket> for TicketDto {
    fn from(ticket: SupportTicket) -> Self {
        Self {
            id: ticket.id,
            subject: ticket.subject,
            message: ticket.message,
            status: ticket.status,
            attachment_url: ticket.attachment_url,
            created_at: ticket.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TicketsResponse {
    pub tickets: Vec<TicketDto>,
}
