//! [`TableRow`] implementation for [`RepresentativeRow`].
//!
//! Identifiers are unique slugs and a user can hold at most one representative row. The
//! profile must exist, checked through the injected [`ProfileClient`].

use super::row::{RepresentativeFilter, RepresentativeInsert, RepresentativePatch, RepresentativeRow};
use super::RepresentativeError;
use crate::clients::ProfileClient;
use crate::model::RepresentativeId;
use crate::slug::is_valid_slug;
use async_trait::async_trait;
use chrono::Utc;
use table_actor::{TableAccess, TableRow};

#[async_trait]
impl TableRow for RepresentativeRow {
    const TABLE: &'static str = "representatives";
    type Id = RepresentativeId;
    type Insert = RepresentativeInsert;
    type Patch = RepresentativePatch;
    type Filter = RepresentativeFilter;
    type Context = ProfileClient;
    type Error = RepresentativeError;

    fn id(&self) -> &RepresentativeId {
        &self.id
    }

    fn from_insert(
        id: RepresentativeId,
        params: RepresentativeInsert,
    ) -> Result<Self, RepresentativeError> {
        if !is_valid_slug(&params.identifier) {
            return Err(RepresentativeError::InvalidIdentifier(params.identifier));
        }
        Ok(Self {
            id,
            profile_id: params.profile_id,
            identifier: params.identifier,
            pix_key: None,
            created_at: Utc::now(),
        })
    }

    fn matches(&self, filter: &RepresentativeFilter) -> bool {
        match filter {
            RepresentativeFilter::All => true,
            RepresentativeFilter::Identifier(identifier) => &self.identifier == identifier,
            RepresentativeFilter::Profile(profile) => &self.profile_id == profile,
        }
    }

    fn conflicts_with(&self, other: &Self) -> bool {
        self.identifier == other.identifier || self.profile_id == other.profile_id
    }

    async fn on_insert(&mut self, profiles: &ProfileClient) -> Result<(), RepresentativeError> {
        match profiles.get(self.profile_id).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(RepresentativeError::UnknownProfile(self.profile_id)),
            Err(e) => Err(RepresentativeError::Store(e.to_string())),
        }
    }

    async fn on_update(
        &mut self,
        patch: RepresentativePatch,
        _profiles: &ProfileClient,
    ) -> Result<(), RepresentativeError> {
        if let Some(identifier) = patch.identifier {
            if !is_valid_slug(&identifier) {
                return Err(RepresentativeError::InvalidIdentifier(identifier));
            }
            self.identifier = identifier;
        }
        if let Some(pix_key) = patch.pix_key {
            self.pix_key = pix_key
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty());
        }
        Ok(())
    }
}
