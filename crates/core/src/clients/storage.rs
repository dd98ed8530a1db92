use asabank_primitives::error::{ApiError, StoreError};
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

/// Client for the blob storage surface. Objects land in a bucket under a
/// caller-chosen path and are reachable afterwards through a public URL.
#[derive(Clone)]
pub struct StorageClient {
    http: Client,
    base_url: Url,
    api_key: SecretString,
    timeout: Duration,
}

impl StorageClient {
    pub fn new(
        http: Client,
        base_url: &str,
        api_key: SecretString,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|_| ApiError::Config("Invalid storage base URL".into()))?;
        Ok(Self {
            http,
            base_url,
            api_key,
            timeout,
        })
    }

    pub async fn upload(
        &self,
        access_token: &SecretString,
        bucket: &str,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), ApiError> {
        let url = self.object_url(&["storage", "v1", "object", bucket], path)?;

        let response = self
            .http
            .post(url)
            .header("apikey", self.api_key.expose_secret())
            .bearer_auth(access_token.expose_secret())
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .timeout(self.timeout)
            .body(bytes)
            .send()
            .await
            .map_err(|e| ApiError::Store(StoreError::Unreachable(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "no response body".into());
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        Ok(())
    }

    /// Public URL of an uploaded object. No request is made; the store
    /// serves these paths without auth.
    pub fn public_url(&self, bucket: &str, path: &str) -> Result<String, ApiError> {
        let url = self.object_url(&["storage", "v1", "object", "public", bucket], path)?;
        Ok(url.to_string())
    }

    fn object_url(&self, prefix: &[&str], path: &str) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ApiError::Config("Invalid storage URL path".into()))?;
            segments.extend(prefix.iter().copied());
            segments.extend(path.split('/'));
        }
        Ok(url)
    }
}
