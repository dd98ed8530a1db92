use eyre::{eyre, Report};
use secrecy::SecretString;
use std::env;

/// Where the hosted backend lives and the public key that identifies this
/// app to it. Both are required; there is no usable fallback.
#[derive(Clone, Debug)]
pub struct StoreInfo {
    pub service_url: String,
    pub api_key: SecretString,
}

impl StoreInfo {
    pub fn new() -> Result<StoreInfo, Report> {
        let service_url = env::var("ASABANK_SERVICE_URL")
            .map_err(|_| eyre!("ASABANK_SERVICE_URL must be set in environment variables"))?;

        let api_key = env::var("ASABANK_API_KEY")
            .map_err(|_| eyre!("ASABANK_API_KEY must be set in environment variables"))?;

        Ok(Self {
            service_url,
            api_key: SecretString::new(api_key.into()),
        })
    }
}
