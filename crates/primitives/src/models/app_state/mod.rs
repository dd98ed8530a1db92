pub mod app_config;
pub mod store_details;

pub use app_config::*;
pub use store_details::*;
