use super::{RepresentativeId, UserId, UserRoleId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Role claims attached to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Superuser,
    Owner,
    Representative,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Superuser => "superuser",
            Role::Owner => "owner",
            Role::Representative => "representative",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "superuser" => Ok(Role::Superuser),
            "owner" => Ok(Role::Owner),
            "representative" => Ok(Role::Representative),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Public profile of an authenticated user. Keyed by the auth user id.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Digits only.
    pub phone: String,
    /// The representative who referred this user, if any.
    pub representative_id: Option<RepresentativeId>,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone)]
pub struct NewProfile {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub representative_id: Option<RepresentativeId>,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub representative_id: Option<Option<RepresentativeId>>,
}

/// A referral partner with a public identifier and a payout key.
#[derive(Debug, Clone, PartialEq)]
pub struct Representative {
    pub id: RepresentativeId,
    pub profile_id: UserId,
    pub identifier: String,
    pub pix_key: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserRole {
    pub id: UserRoleId,
    pub user_id: UserId,
    pub role: Role,
}
