use asabank_primitives::error::{ApiError, AuthError};
use asabank_primitives::models::identity::AuthenticatedUser;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

/// Client for the auth provider. Tokens are opaque strings minted by the
/// provider; this client only presents them and reads back the identity.
#[derive(Clone)]
pub struct AuthClient {
    http: Client,
    base_url: Url,
    api_key: SecretString,
    timeout: Duration,
}

impl AuthClient {
    pub fn new(
        http: Client,
        base_url: &str,
        api_key: SecretString,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|_| ApiError::Config("Invalid auth base URL".into()))?;
        Ok(Self {
            http,
            base_url,
            api_key,
            timeout,
        })
    }

    /// Ask the provider who the bearer of this token is.
    pub async fn get_user(&self, access_token: &SecretString) -> Result<AuthenticatedUser, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Config("Invalid auth URL path".into()))?
            .extend(["auth", "v1", "user"]);

        let response = self
            .http
            .get(url)
            .header("apikey", self.api_key.expose_secret())
            .bearer_auth(access_token.expose_secret())
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ApiError::Auth(AuthError::Rejected(
                "Token not accepted by auth provider".into(),
            )));
        }
        if !status.is_success() {
            return Err(ApiError::Auth(AuthError::Rejected(format!(
                "Auth provider returned {}",
                status
            ))));
        }

        response
            .json::<AuthenticatedUser>()
            .await
            .map_err(|_| ApiError::Auth(AuthError::Rejected("Invalid identity payload".into())))
    }

    /// Revoke the token server side. A token the provider no longer
    /// recognizes counts as already signed out.
    pub async fn sign_out(&self, access_token: &SecretString) -> Result<(), ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Config("Invalid auth URL path".into()))?
            .extend(["auth", "v1", "logout"]);

        let response = self
            .http
            .post(url)
            .header("apikey", self.api_key.expose_secret())
            .bearer_auth(access_token.expose_secret())
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() || status == reqwest::StatusCode::UNAUTHORIZED {
            return Ok(());
        }

        Err(ApiError::Auth(AuthError::Rejected(format!(
            "Sign out failed with {}",
            status
        ))))
    }
}
