use crate::models::app_state::store_details::StoreInfo;
use eyre::Report;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store_details: StoreInfo,

    pub withdrawal_fee_minor: i64,

    pub realtime_poll_secs: u64,

    pub http_timeout_secs: u64,

    pub attachment_bucket: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Report> {
        Ok(Self {
            store_details: StoreInfo::new()?,

            withdrawal_fee_minor: env::var("ASABANK_WITHDRAWAL_FEE_MINOR")
                .unwrap_or_else(|_| "2500".into())
                .parse()?,

            realtime_poll_secs: env::var("ASABANK_REALTIME_POLL_SECS")
                .unwrap_or_else(|_| "5".into())
                .parse()?,

            http_timeout_secs: env::var("ASABANK_HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".into())
                .parse()?,

            attachment_bucket: env::var("ASABANK_ATTACHMENT_BUCKET")
                .unwrap_or_else(|_| "attachments".into()),
        })
    }
}
