#![allow(dead_code)]

use asabank_core::{AppState, Session};
use asabank_primitives::models::app_config::AppConfig;
use asabank_primitives::models::identity::AuthenticatedUser;
use asabank_primitives::models::store_details::StoreInfo;
use secrecy::SecretString;
use std::sync::Arc;
use uuid::Uuid;

pub mod fixtures;

/// Create a test AppState pointed at a mock record store.
pub fn create_test_app_state(base_url: &str) -> Arc<AppState> {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        asabank_core::logging::setup_logging();
    });

    let config = AppConfig {
        store_details: StoreInfo {
            service_url: base_url.to_string(),
            api_key: SecretString::from("test_api_key"),
        },
        withdrawal_fee_minor: 2500,
        realtime_poll_secs: 1,
        http_timeout_secs: 5,
        attachment_bucket: "attachments".to_string(),
    };

    AppState::new(config).expect("test app state should build")
}

/// A ready-made session for `user_id`; no network involved.
pub fn test_session(user_id: Uuid) -> Session {
    Session::new(
        AuthenticatedUser {
            id: user_id,
            email: Some(format!("test_{}@example.com", user_id)),
        },
        SecretString::from("test_access_token"),
    )
}
