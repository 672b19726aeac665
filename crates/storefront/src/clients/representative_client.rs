//! # Representative Client
//!
//! Enrollment of referral partners and the views a representative sees: their referred
//! companies, each with the owner's profile.
use super::{CompanyClient, ProfileClient, RoleClient};
use crate::model::{Company, Profile, Representative, RepresentativeId, Role, UserId};
use crate::representative_table::{
    RepresentativeError, RepresentativeFilter, RepresentativeInsert, RepresentativePatch,
    RepresentativeRow,
};
use crate::slug::{is_valid_slug, slugify, unique_slug};
use async_trait::async_trait;
use std::collections::HashSet;
use table_actor::{StoreError, TableAccess, TableClient};
use tracing::{debug, info, instrument, warn};

/// A company referred by a representative, with its owner's profile when one exists.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferredCompany {
    pub company: Company,
    pub owner: Option<Profile>,
}

#[derive(Clone)]
pub struct RepresentativeClient {
    inner: TableClient<RepresentativeRow>,
}

#[async_trait]
impl TableAccess<RepresentativeRow> for RepresentativeClient {
    type Error = RepresentativeError;

    fn inner(&self) -> &TableClient<RepresentativeRow> {
        &self.inner
    }

    fn map_error(e: StoreError) -> RepresentativeError {
        match e {
            StoreError::NotFound { id, .. } => RepresentativeError::NotFound(id),
            other => other
                .into_row_error()
                .unwrap_or_else(|e| RepresentativeError::Store(e.to_string())),
        }
    }
}

impl RepresentativeClient {
    pub fn new(inner: TableClient<RepresentativeRow>) -> Self {
        Self { inner }
    }

    /// Makes `profile` a representative. The identifier is derived from the full name and
    /// suffixed until unique; the `representative` role is granted afterwards.
    #[instrument(skip(self, profile, roles), fields(user_id = %profile.id))]
    pub async fn enroll(
        &self,
        profile: &Profile,
        roles: &RoleClient,
    ) -> Result<Representative, RepresentativeError> {
        let existing = self.select(RepresentativeFilter::All).await?;
        if existing.iter().any(|row| row.profile_id == profile.id) {
            return Err(RepresentativeError::AlreadyRepresentative(profile.id));
        }
        let taken: HashSet<String> = existing.into_iter().map(|row| row.identifier).collect();
        let identifier = unique_slug(&slugify(&profile.full_name()), |s| taken.contains(s));
        debug!(%identifier, "Generated identifier");

        let row = self
            .inner
            .insert(RepresentativeInsert {
                profile_id: profile.id,
                identifier: identifier.clone(),
            })
            .await
            .map_err(|e| Self::conflict_or(e, &identifier))?;

        roles.grant(profile.id, Role::Representative).await?;
        info!(representative_id = %row.id, %identifier, "Representative enrolled");
        Ok(row.into())
    }

    pub async fn find(
        &self,
        id: RepresentativeId,
    ) -> Result<Option<Representative>, RepresentativeError> {
        Ok(self.get(id).await?.map(Representative::from))
    }

    pub async fn by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<Representative>, RepresentativeError> {
        let rows = self
            .select(RepresentativeFilter::Identifier(identifier.to_string()))
            .await?;
        Ok(rows.into_iter().next().map(Representative::from))
    }

    pub async fn for_profile(
        &self,
        user: UserId,
    ) -> Result<Option<Representative>, RepresentativeError> {
        let rows = self.select(RepresentativeFilter::Profile(user)).await?;
        Ok(rows.into_iter().next().map(Representative::from))
    }

    pub async fn list(&self) -> Result<Vec<Representative>, RepresentativeError> {
        Ok(self
            .select(RepresentativeFilter::All)
            .await?
            .into_iter()
            .map(Representative::from)
            .collect())
    }

    #[instrument(skip(self))]
    pub async fn update_identifier(
        &self,
        id: RepresentativeId,
        identifier: &str,
    ) -> Result<Representative, RepresentativeError> {
        if !is_valid_slug(identifier) {
            return Err(RepresentativeError::InvalidIdentifier(identifier.to_string()));
        }
        let patch = RepresentativePatch {
            identifier: Some(identifier.to_string()),
            ..RepresentativePatch::default()
        };
        let row = self
            .inner
            .update(id, patch)
            .await
            .map_err(|e| Self::conflict_or(e, identifier))?;
        Ok(row.into())
    }

    /// Sets or clears (`None` or blank) the payout key.
    #[instrument(skip(self, pix_key))]
    pub async fn update_pix_key(
        &self,
        id: RepresentativeId,
        pix_key: Option<String>,
    ) -> Result<Representative, RepresentativeError> {
        let patch = RepresentativePatch {
            pix_key: Some(pix_key),
            ..RepresentativePatch::default()
        };
        let row = self.inner.update(id, patch).await.map_err(Self::map_error)?;
        Ok(row.into())
    }

    /// Companies referred by `id`, each paired with its owner's profile.
    #[instrument(skip(self, companies, profiles))]
    pub async fn referred_companies(
        &self,
        id: RepresentativeId,
        companies: &CompanyClient,
        profiles: &ProfileClient,
    ) -> Result<Vec<ReferredCompany>, RepresentativeError> {
        let mut referred = Vec::new();
        for company in companies.referred_by(id).await? {
            let owner = profiles.find(company.owner_id).await?;
            if owner.is_none() {
                warn!(company_id = %company.id, owner_id = %company.owner_id, "Owner has no profile");
            }
            referred.push(ReferredCompany { company, owner });
        }
        Ok(referred)
    }

    fn conflict_or(e: StoreError, identifier: &str) -> RepresentativeError {
        match e {
            StoreError::Conflict { .. } => {
                RepresentativeError::IdentifierTaken(identifier.to_string())
            }
            other => Self::map_error(other),
        }
    }
}
