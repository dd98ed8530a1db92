pub mod account_dto;
pub mod profile_dto;
pub mod recipient_dto;
pub mod ticket_dto;
pub mod transaction_dto;
pub mod withdrawal_dto;

pub use account_dto::*;
pub use profile_dto::*;
pub use recipient_dto::*;
pub use ticket_dto::*;
pub use transaction_dto::*;
pub use withdrawal_dto::*;
