//! Backend row shape for `representatives` and its adapter to [`Representative`].

use crate::model::{Representative, RepresentativeId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepresentativeRow {
    pub id: RepresentativeId,
    pub profile_id: UserId,
    pub identifier: String,
    pub pix_key: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct RepresentativeInsert {
    pub profile_id: UserId,
    pub identifier: String,
}

#[derive(Debug, Clone, Default)]
pub struct RepresentativePatch {
    pub identifier: Option<String>,
    pub pix_key: Option<Option<String>>,
}

#[derive(Debug, Clone)]
pub enum RepresentativeFilter {
    All,
    Identifier(String),
    Profile(UserId),
}

impl From<RepresentativeRow> for Representative {
    fn from(row: RepresentativeRow) -> Self {
        Self {
            id: row.id,
            profile_id: row.profile_id,
            identifier: row.identifier,
            pix_key: row.pix_key,
            created_at: row.created_at,
        }
    }
}
