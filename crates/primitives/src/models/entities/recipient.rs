use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipient {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub bank_name: String,
    pub routing_number: String,
    pub account_number: String,
    pub swift_code: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct NewRecipient<'a> {
    pub user_id: Uuid,
    pub name: &'a str,
    pub bank_name: &'a str,
    pub routing_number: &'a str,
    pub account_number: &'a str,
    pub swift_code: Option<&'a str>,
}
