use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::app_state::AppState;
use crate::repositories::profile_repository::ProfileRepository;
use crate::session::Session;
pub use asabank_primitives::{
    error::{ApiError, AuthError},
    models::profile_dto::{ProfileDto, UpdateProfileRequest},
};

pub struct ProfileService;

impl ProfileService {
    /// A user with no profile row yet reads as empty defaults; nothing is
    /// written on the read path.
    pub async fn get_profile(
        state: &AppState,
        session: &Session,
        uid: Uuid,
    ) -> Result<ProfileDto, ApiError> {
        let profile = ProfileRepository::find_by_user(&state.store, session, uid).await?;

        Ok(match profile {
            Some(profile) => profile.into(),
            None => ProfileDto {
                id: uid,
                full_name: None,
                username: None,
                bio: None,
                contact_number: None,
                balance: 0,
                withdrawal_count: 0,
                fee_acknowledged: false,
            },
        })
    }

    /// Upsert of the user-editable fields only. Bookkeeping columns are
    /// not reachable through this path.
    pub async fn update_profile(
        state: &AppState,
        session: &Session,
        req: UpdateProfileRequest,
    ) -> Result<ProfileDto, ApiError> {
        req.validate()?;

        if req.user_id != session.user_id() {
            warn!("profile.update: request user does not match session user");
            return Err(ApiError::Auth(AuthError::UserMismatch));
        }

        let profile = ProfileRepository::upsert_details(&state.store, session, &req).await?;

        info!("profile.update: profile {} saved", profile.id);

        Ok(profile.into())
    }

    /// Record that the user has acknowledged the flat withdrawal fee.
    /// Nothing verifies the fee was actually paid.
    pub async fn acknowledge_fee(
        state: &AppState,
        session: &Session,
    ) -> Result<ProfileDto, ApiError> {
        let uid = session.user_id();
        ProfileRepository::create_if_missing(&state.store, session, uid).await?;
        let profile = ProfileRepository::set_fee_acknowledged(&state.store, session, uid).await?;

        info!("profile.fee: acknowledgment recorded for {}", uid);

        Ok(profile.into())
    }
}
