use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

use crate::clients::{AuthClient, RealtimeClient, StorageClient, StoreClient};
use crate::session::SessionProvider;
use eyre::Result;
pub use asabank_primitives::models::app_config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub http_client: Client,
    pub config: AppConfig,
    pub store: StoreClient,
    pub auth: AuthClient,
    pub storage: StorageClient,
    pub realtime: RealtimeClient,
    pub sessions: SessionProvider,
}

impl AppState {
    /// Build the state from the process environment, reading a `.env`
    /// file first when one is present.
    pub fn from_env() -> Result<Arc<Self>> {
        dotenvy::dotenv().ok();
        let config = AppConfig::from_env()?;
        Self::new(config)
    }

    pub fn new(config: AppConfig) -> Result<Arc<Self>> {
        let timeout = Duration::from_secs(config.http_timeout_secs);
        let http = Client::builder().timeout(timeout).build()?;

        let store = StoreClient::new(
            http.clone(),
            &config.store_details.service_url,
            config.store_details.api_key.clone(),
            timeout,
        )?;

        let auth = AuthClient::new(
            http.clone(),
            &config.store_details.service_url,
            config.store_details.api_key.clone(),
            timeout,
        )?;

        let storage = StorageClient::new(
            http.clone(),
            &config.store_details.service_url,
            config.store_details.api_key.clone(),
            timeout,
        )?;

        let realtime = RealtimeClient::new(
            store.clone(),
            Duration::from_secs(config.realtime_poll_secs),
        );

        let sessions = SessionProvider::new(auth.clone());

        Ok(Arc::new(Self {
            http_client: http,
            config,
            store,
            auth,
            storage,
            realtime,
            sessions,
        }))
    }
}
