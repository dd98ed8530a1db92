use crate::models::entities::profile::Profile;
use crate::utility::validate_contact_number;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- Profile DTOs ---

/// Editable profile fields. Balance and withdrawal bookkeeping are not
/// writable through this path.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    pub user_id: Uuid,

    #[validate(length(min = 1, max = 120))]
    pub full_name: Option<String>,

    #[validate(length(min = 3, max = 40))]
    pub username: Option<String>,

    #[validate(length(max = 500))]
    pub bio: Option<String>,

    #[validate(custom(function = validate_contact_number))]
    pub contact_number: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProfileDto {
    pub id: Uuid,
    pub full_name: Option<String>,
    pub username: Option<String>,
    pub bio: Option<String>,
    pub contact_number: Option<String>,
    pub balance: i64,
    pub withdrawal_count: i32,
    pub fee_acknowledged: bool,
}

impl From<Profile> for ProfileDto {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id,
            full_name: profile.full_name,
            username: profile.username,
            bio: profile.bio,
            contact_number: profile.contact_number,
            balance: profile.balance,
            withdrawal_count: profile.withdrawal_count,
            fee_acknowledged: profile.fee_acknowledged,
        }
    }
}
