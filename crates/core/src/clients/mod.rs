pub mod auth;
pub mod realtime;
pub mod storage;
pub mod store;

pub use auth::AuthClient;
pub use realtime::{RealtimeClient, Subscription};
pub use storage::StorageClient;
pub use store::StoreClient;
