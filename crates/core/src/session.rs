use crate::clients::auth::AuthClient;
use asabank_primitives::error::{ApiError, AuthError};
use asabank_primitives::models::identity::AuthenticatedUser;
use secrecy::SecretString;
use tokio::sync::watch;
use uuid::Uuid;

/// An authenticated session: the provider-vouched identity plus the opaque
/// access token presented on every store request.
#[derive(Clone, Debug)]
pub struct Session {
    user: AuthenticatedUser,
    access_token: SecretString,
}

impl Session {
    pub fn new(user: AuthenticatedUser, access_token: SecretString) -> Self {
        Self { user, access_token }
    }

    pub fn user(&self) -> &AuthenticatedUser {
        &self.user
    }

    pub fn user_id(&self) -> Uuid {
        self.user.id
    }

    pub fn token(&self) -> &SecretString {
        &self.access_token
    }
}

/// Owns the current session and broadcasts replacements to observers.
#[derive(Clone)]
pub struct SessionProvider {
    auth: AuthClient,
    current: watch::Sender<Option<Session>>,
}

impl SessionProvider {
    pub fn new(auth: AuthClient) -> Self {
        let (current, _) = watch::channel(None);
        Self { auth, current }
    }

    /// Validate an access token with the provider and make the resulting
    /// session current.
    pub async fn sign_in_with_token(
        &self,
        access_token: SecretString,
    ) -> Result<Session, ApiError> {
        let user = self.auth.get_user(&access_token).await?;
        let session = Session::new(user, access_token);
        self.current.send_replace(Some(session.clone()));
        Ok(session)
    }

    pub fn current(&self) -> Option<Session> {
        self.current.borrow().clone()
    }

    /// The current session, or the error every gated operation returns
    /// when nobody is signed in.
    pub fn require(&self) -> Result<Session, ApiError> {
        self.current().ok_or(ApiError::Auth(AuthError::NoSession))
    }

    /// Observe session changes. The receiver sees the current value right
    /// away and every replacement afterwards; dropping it unsubscribes.
    pub fn on_auth_state_change(&self) -> watch::Receiver<Option<Session>> {
        self.current.subscribe()
    }

    /// Clear the session and revoke the token with the provider. The local
    /// session is gone even when revocation fails.
    pub async fn sign_out(&self) -> Result<(), ApiError> {
        match self.current.send_replace(None) {
            Some(session) => self.auth.sign_out(session.token()).await,
            None => Ok(()),
        }
    }
}
