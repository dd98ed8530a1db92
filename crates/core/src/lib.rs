pub mod app_state;
pub mod clients;
pub mod logging;
pub mod repositories;
pub mod services;
pub mod session;

pub use app_state::AppState;
pub use session::{Session, SessionProvider};
