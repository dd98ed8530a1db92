use crate::models::entities::recipient::Recipient;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- Recipient DTOs ---

// Destination fields are passed through to the store as entered; only
// presence is checked, not routing or account number format.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRecipientRequest {
    pub user_id: Uuid,

    #[validate(length(min = 1, max = 120))]
    pub name: String,

    #[validate(length(min = 1, max = 120))]
    pub bank_name: String,

    #[validate(length(min = 1))]
    pub routing_number: String,

    #[validate(length(min = 1))]
    pub account_number: String,

    pub swift_code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecipientDto {
    pub id: Uuid,
    pub name: String,
    pub bank_name: String,
    pub routing_number: String,
    pub account_number: String,
    pub swift_code: Option<String>,
}

impl From<Recipient> for RecipientDto {
    fn from(recipient: Recipient) -> Self {
        Self {
            id: recipient.id,
            name: recipient.name,
            bank_name: recipient.bank_name,
            routing_number: recipient.routing_number,
            account_number: recipient.account_number,
            swift_code: recipient.swift_code,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecipientsResponse {
    pub recipients: Vec<RecipientDto>,
}
