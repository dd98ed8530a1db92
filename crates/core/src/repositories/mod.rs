pub mod account_repository;
pub mod profile_repository;
pub mod recipient_repository;
pub mod ticket_repository;
pub mod transaction_repository;
pub mod withdrawal_repository;
