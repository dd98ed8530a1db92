pub mod account;
pub mod enum_types;
pub mod identity;
pub mod profile;
pub mod recipient;
pub mod ticket;
pub mod transaction;
pub mod withdrawal;

pub use account::*;
pub use identity::*;
pub use profile::*;
pub use recipient::*;
pub use ticket::*;
pub use transaction::*;
pub use withdrawal::*;
