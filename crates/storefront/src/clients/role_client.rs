//! # Role Client
use crate::model::{Role, UserId, UserRole};
use crate::role_table::{RoleError, UserRoleFilter, UserRoleInsert, UserRoleRow};
use async_trait::async_trait;
use table_actor::{StoreError, TableAccess, TableClient};
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct RoleClient {
    inner: TableClient<UserRoleRow>,
}

#[async_trait]
impl TableAccess<UserRoleRow> for RoleClient {
    type Error = RoleError;

    fn inner(&self) -> &TableClient<UserRoleRow> {
        &self.inner
    }

    fn map_error(e: StoreError) -> RoleError {
        e.into_row_error()
            .unwrap_or_else(|e| RoleError::Store(e.to_string()))
    }
}

impl RoleClient {
    pub fn new(inner: TableClient<UserRoleRow>) -> Self {
        Self { inner }
    }

    /// Grants `role` to `user`. Granting a role the user already holds returns the existing
    /// grant.
    #[instrument(skip(self))]
    pub async fn grant(&self, user: UserId, role: Role) -> Result<UserRole, RoleError> {
        match self
            .inner
            .insert(UserRoleInsert {
                user_id: user,
                role,
            })
            .await
        {
            Ok(row) => {
                info!(user_id = %user, %role, "Role granted");
                UserRole::try_from(row)
            }
            Err(StoreError::Conflict { .. }) => {
                debug!(user_id = %user, %role, "Role already granted");
                let existing = self.select(UserRoleFilter::Grant(user, role)).await?;
                existing
                    .into_iter()
                    .next()
                    .map(UserRole::try_from)
                    .transpose()?
                    .ok_or_else(|| RoleError::Store(format!("grant for {user} vanished")))
            }
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Removes `role` from `user`. Revoking a role the user does not hold is a no-op.
    #[instrument(skip(self))]
    pub async fn revoke(&self, user: UserId, role: Role) -> Result<(), RoleError> {
        for row in self.select(UserRoleFilter::Grant(user, role)).await? {
            self.delete(row.id).await?;
            info!(user_id = %user, %role, "Role revoked");
        }
        Ok(())
    }

    pub async fn roles_for(&self, user: UserId) -> Result<Vec<Role>, RoleError> {
        self.select(UserRoleFilter::User(user))
            .await?
            .into_iter()
            .map(|row| UserRole::try_from(row).map(|grant| grant.role))
            .collect()
    }

    pub async fn holders_of(&self, role: Role) -> Result<Vec<UserId>, RoleError> {
        Ok(self
            .select(UserRoleFilter::Role(role))
            .await?
            .into_iter()
            .map(|row| row.user_id)
            .collect())
    }
}
