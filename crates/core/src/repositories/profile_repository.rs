use crate::clients::store::StoreClient;
use crate::session::Session;
use asabank_primitives::error::ApiError;
use asabank_primitives::models::dtos::profile_dto::UpdateProfileRequest;
use asabank_primitives::models::profile::{NewProfile, Profile};
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

const TABLE: &str = "profiles";

pub struct ProfileRepository;

impl ProfileRepository {
    pub async fn find_by_user(
        store: &StoreClient,
        session: &Session,
        user_id: Uuid,
    ) -> Result<Option<Profile>, ApiError> {
        let profile = store
            .from(TABLE)
            .select("*")
            .eq("id", user_id)
            .authorized(session.token())
            .fetch_optional::<Profile>()
            .await?;
        Ok(profile)
    }

    pub async fn create_if_missing(
        store: &StoreClient,
        session: &Session,
        user_id: Uuid,
    ) -> Result<Profile, ApiError> {
        if let Some(profile) = Self::find_by_user(store, session, user_id).await? {
            return Ok(profile);
        }

        let new_profile = NewProfile {
            id: user_id,
            balance: 0,
            withdrawal_count: 0,
            fee_acknowledged: false,
            version: 1,
        };

        store
            .from(TABLE)
            .on_conflict("id")
            .authorized(session.token())
            .insert_if_missing(&new_profile)
            .await?;

        Self::find_by_user(store, session, user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("profile".into()))
    }

    /// Guarded bookkeeping write after a debit: mirrored balance and
    /// withdrawal count move together. `None` means the version was stale.
    pub async fn cas_apply_withdrawal(
        store: &StoreClient,
        session: &Session,
        user_id: Uuid,
        expected_version: i64,
        new_balance: i64,
        new_withdrawal_count: i32,
    ) -> Result<Option<Profile>, ApiError> {
        let patch = json!({
            "balance": new_balance,
            "withdrawal_count": new_withdrawal_count,
            "version": expected_version + 1,
            "updated_at": Utc::now(),
        });

        let rows = store
            .from(TABLE)
            .eq("id", user_id)
            .eq("version", expected_version)
            .authorized(session.token())
            .update::<_, Profile>(&patch)
            .await?;

        Ok(rows.into_iter().next())
    }

    /// Insert-or-merge the editable fields. Only fields the caller actually
    /// provided are written, so an omitted field never nulls a stored one.
    pub async fn upsert_details(
        store: &StoreClient,
        session: &Session,
        req: &UpdateProfileRequest,
    ) -> Result<Profile, ApiError> {
        let mut row = serde_json::Map::new();
        row.insert("id".into(), json!(req.user_id));
        if let Some(full_name) = &req.full_name {
            row.insert("full_name".into(), json!(full_name));
        }
        if let Some(username) = &req.username {
            row.insert("username".into(), json!(username));
        }
        if let Some(bio) = &req.bio {
            row.insert("bio".into(), json!(bio));
        }
        if let Some(contact_number) = &req.contact_number {
            row.insert("contact_number".into(), json!(contact_number));
        }
        row.insert("updated_at".into(), json!(Utc::now()));

        let profile = store
            .from(TABLE)
            .on_conflict("id")
            .authorized(session.token())
            .upsert::<_, Profile>(&row)
            .await?;
        Ok(profile)
    }

    pub async fn set_fee_acknowledged(
        store: &StoreClient,
        session: &Session,
        user_id: Uuid,
    ) -> Result<Profile, ApiError> {
        let patch = json!({
            "fee_acknowledged": true,
            "updated_at": Utc::now(),
        });

        let rows = store
            .from(TABLE)
            .eq("id", user_id)
            .authorized(session.token())
            .update::<_, Profile>(&patch)
            .await?;

        rows.into_iter()
            .next()
            .ok_or_else(|| ApiError::NotFound("profile".into()))
    }
}
