use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

// Rows as the record store would return them.

pub fn account_row(
    account_id: Uuid,
    user_id: Uuid,
    account_type: &str,
    balance: i64,
    version: i64,
) -> Value {
    json!({
        "id": account_id,
        "user_id": user_id,
        "account_type": account_type,
        "balance": balance,
        "version": version,
        "created_at": Utc::now(),
        "updated_at": Utc::now(),
    })
}

pub fn profile_row(
    user_id: Uuid,
    balance: i64,
    withdrawal_count: i32,
    fee_acknowledged: bool,
    version: i64,
) -> Value {
    json!({
        "id": user_id,
        "full_name": null,
        "username": null,
        "bio": null,
        "contact_number": null,
        "balance": balance,
        "withdrawal_count": withdrawal_count,
        "fee_acknowledged": fee_acknowledged,
        "version": version,
        "updated_at": Utc::now(),
    })
}

pub fn transaction_row(user_id: Uuid, kind: &str, amount: i64, state: &str) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "user_id": user_id,
        "type": kind,
        "amount": amount,
        "method": "ach",
        "account_type": "checking",
        "status": state,
        "description": null,
        "bank_name": null,
        "routing_number": null,
        "account_number": null,
        "swift_code": null,
        "created_at": Utc::now(),
    })
}

pub fn withdrawal_row(withdrawal_id: Uuid, user_id: Uuid, amount: i64, state: &str) -> Value {
    json!({
        "id": withdrawal_id,
        "user_id": user_id,
        "type": "withdrawal",
        "amount": amount,
        "method": "wire",
        "account_type": "checking",
        "status": state,
        "bank_name": "First National",
        "routing_number": "021000021",
        "account_number": "123456789",
        "swift_code": null,
        "created_at": Utc::now(),
    })
}

pub fn recipient_row(recipient_id: Uuid, user_id: Uuid) -> Value {
    json!({
        "id": recipient_id,
        "user_id": user_id,
        "name": "Ada Obi",
        "bank_name": "First National",
        "routing_number": "021000021",
        "account_number": "123456789",
        "swift_code": null,
        "created_at": Utc::now(),
    })
}

pub fn ticket_row(
    ticket_id: Uuid,
    user_id: Uuid,
    status: &str,
    created_at: DateTime<Utc>,
) -> Value {
    json!({
        "id": ticket_id,
        "user_id": user_id,
        "email": "ada@example.com",
        "subject": "Card declined",
        "message": "My card was declined at checkout this morning.",
        "status": status,
        "attachment_url": null,
        "created_at": created_at,
    })
}

pub fn auth_user_json(user_id: Uuid, email: &str) -> Value {
    json!({
        "id": user_id,
        "email": email,
        "aud": "authenticated",
        "role": "authenticated",
    })
}
