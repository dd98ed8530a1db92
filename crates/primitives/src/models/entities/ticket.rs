use crate::models::entities::enum_types::TicketStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const TICKET_AUTO_CLOSE_HOURS: i64 = 48;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportTicket {
    pub id: Uuid,
    pub user_id: Uuid,
    pub email: Option<String>,
    pub subject: String,
    pub message: String,
    pub status: TicketStatus,
    pub attachment_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct NewTicket<'a> {
    pub user_id: Uuid,
    pub email: Option<&'a str>,
    pub subject: &'a str,
    pub message: &'a str,
    pub status: TicketStatus,
    pub attachment_url: Option<String>,
}

/// Open tickets past the auto-close window read as closed regardless of
/// what the stored row still says.
pub fn effective_status(
    stored: TicketStatus,
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> TicketStatus {
    if stored == TicketStatus::Open && (now - created_at).num_hours() > TICKET_AUTO_CLOSE_HOURS {
        TicketStatus::Closed
    } else {
        stored
    }
}
