//! Backend row shape for `profiles` and its adapter to [`Profile`].

use crate::format::normalize_phone;
use crate::model::{NewProfile, Profile, ProfileChanges, RepresentativeId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRow {
    /// Same value as the auth user id.
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub representative_id: Option<RepresentativeId>,
    pub created_at: DateTime<Utc>,
}

/// Profiles are keyed by the caller-supplied user id, not a generated one.
#[derive(Debug, Clone)]
pub struct ProfileInsert {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub representative_id: Option<RepresentativeId>,
}

#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub representative_id: Option<Option<RepresentativeId>>,
}

#[derive(Debug, Clone)]
pub enum ProfileFilter {
    All,
    Email(String),
    ReferredBy(RepresentativeId),
}

impl From<NewProfile> for ProfileInsert {
    fn from(profile: NewProfile) -> Self {
        Self {
            id: profile.id,
            first_name: profile.first_name.trim().to_string(),
            last_name: profile.last_name.trim().to_string(),
            email: profile.email.trim().to_lowercase(),
            phone: normalize_phone(&profile.phone),
            representative_id: profile.representative_id,
        }
    }
}

impl From<ProfileChanges> for ProfilePatch {
    fn from(changes: ProfileChanges) -> Self {
        Self {
            first_name: changes.first_name.map(|s| s.trim().to_string()),
            last_name: changes.last_name.map(|s| s.trim().to_string()),
            phone: changes.phone.as_deref().map(normalize_phone),
            representative_id: changes.representative_id,
        }
    }
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone: row.phone,
            representative_id: row.representative_id,
            created_at: row.created_at,
        }
    }
}
