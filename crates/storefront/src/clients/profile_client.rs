//! # Profile Client
use crate::model::{NewProfile, Profile, ProfileChanges, RepresentativeId, UserId};
use crate::profile_table::{ProfileError, ProfileFilter, ProfileInsert, ProfilePatch, ProfileRow};
use async_trait::async_trait;
use table_actor::{StoreError, TableAccess, TableClient};
use tracing::{info, instrument};

#[derive(Clone)]
pub struct ProfileClient {
    inner: TableClient<ProfileRow>,
}

#[async_trait]
impl TableAccess<ProfileRow> for ProfileClient {
    type Error = ProfileError;

    fn inner(&self) -> &TableClient<ProfileRow> {
        &self.inner
    }

    fn map_error(e: StoreError) -> ProfileError {
        match e {
            StoreError::NotFound { id, .. } => ProfileError::NotFound(id),
            other => other
                .into_row_error()
                .unwrap_or_else(|e| ProfileError::Store(e.to_string())),
        }
    }
}

fn newest_first(rows: Vec<ProfileRow>) -> Vec<Profile> {
    let mut profiles: Vec<Profile> = rows.into_iter().map(Profile::from).collect();
    profiles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    profiles
}

impl ProfileClient {
    pub fn new(inner: TableClient<ProfileRow>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create(&self, profile: NewProfile) -> Result<Profile, ProfileError> {
        let insert = ProfileInsert::from(profile);
        let email = insert.email.clone();
        let row = self.inner.insert(insert).await.map_err(|e| match e {
            StoreError::Conflict { .. } => ProfileError::EmailTaken(email),
            other => Self::map_error(other),
        })?;
        info!(user_id = %row.id, "Profile created");
        Ok(row.into())
    }

    pub async fn find(&self, id: UserId) -> Result<Option<Profile>, ProfileError> {
        Ok(self.get(id).await?.map(Profile::from))
    }

    pub async fn by_email(&self, email: &str) -> Result<Option<Profile>, ProfileError> {
        let rows = self
            .select(ProfileFilter::Email(email.trim().to_string()))
            .await?;
        Ok(rows.into_iter().next().map(Profile::from))
    }

    #[instrument(skip(self))]
    pub async fn update(
        &self,
        id: UserId,
        changes: ProfileChanges,
    ) -> Result<Profile, ProfileError> {
        let row = self
            .inner
            .update(id, ProfilePatch::from(changes))
            .await
            .map_err(Self::map_error)?;
        Ok(row.into())
    }

    /// Every profile, newest first.
    pub async fn list(&self) -> Result<Vec<Profile>, ProfileError> {
        Ok(newest_first(self.select(ProfileFilter::All).await?))
    }

    /// Users referred by a representative, newest first.
    pub async fn referred_by(
        &self,
        representative: RepresentativeId,
    ) -> Result<Vec<Profile>, ProfileError> {
        Ok(newest_first(
            self.select(ProfileFilter::ReferredBy(representative))
                .await?,
        ))
    }
}
