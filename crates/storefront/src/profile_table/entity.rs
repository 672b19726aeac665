//! [`TableRow`] implementation for [`ProfileRow`].

use super::row::{ProfileFilter, ProfileInsert, ProfilePatch, ProfileRow};
use super::ProfileError;
use crate::model::UserId;
use async_trait::async_trait;
use chrono::Utc;
use table_actor::TableRow;

#[async_trait]
impl TableRow for ProfileRow {
    const TABLE: &'static str = "profiles";
    type Id = UserId;
    type Insert = ProfileInsert;
    type Patch = ProfilePatch;
    type Filter = ProfileFilter;
    type Context = ();
    type Error = ProfileError;

    fn id(&self) -> &UserId {
        &self.id
    }

    fn from_insert(_generated: UserId, params: ProfileInsert) -> Result<Self, ProfileError> {
        if params.first_name.is_empty() {
            return Err(ProfileError::Invalid("first name is required".into()));
        }
        if !params.email.contains('@') {
            return Err(ProfileError::Invalid(format!("invalid email: {}", params.email)));
        }
        Ok(Self {
            id: params.id,
            first_name: params.first_name,
            last_name: params.last_name,
            email: params.email,
            phone: params.phone,
            representative_id: params.representative_id,
            created_at: Utc::now(),
        })
    }

    fn matches(&self, filter: &ProfileFilter) -> bool {
        match filter {
            ProfileFilter::All => true,
            ProfileFilter::Email(email) => self.email.eq_ignore_ascii_case(email),
            ProfileFilter::ReferredBy(rep) => self.representative_id.as_ref() == Some(rep),
        }
    }

    fn conflicts_with(&self, other: &Self) -> bool {
        self.email.eq_ignore_ascii_case(&other.email)
    }

    async fn on_update(&mut self, patch: ProfilePatch, _ctx: &()) -> Result<(), ProfileError> {
        if let Some(first_name) = patch.first_name {
            if first_name.is_empty() {
                return Err(ProfileError::Invalid("first name is required".into()));
            }
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(representative_id) = patch.representative_id {
            self.representative_id = representative_id;
        }
        Ok(())
    }
}
