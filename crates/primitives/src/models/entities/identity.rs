use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The identity the auth provider vouches for, as returned by its user
/// endpoint. Unknown payload fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub email: Option<String>,
}
