pub mod account_service;
pub mod deposit_service;
pub mod profile_service;
pub mod recipient_service;
pub mod ticket_service;
pub mod transaction_service;
pub mod withdrawal_service;
