//! Backend row shape for `user_roles` and its adapter to [`UserRole`].

use super::RoleError;
use crate::model::{Role, UserId, UserRole, UserRoleId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRoleRow {
    pub id: UserRoleId,
    pub user_id: UserId,
    pub role: String,
}

#[derive(Debug, Clone)]
pub struct UserRoleInsert {
    pub user_id: UserId,
    pub role: Role,
}

/// Role grants are replaced by revoke + grant, never edited.
#[derive(Debug, Clone)]
pub enum UserRolePatch {}

#[derive(Debug, Clone)]
pub enum UserRoleFilter {
    User(UserId),
    Grant(UserId, Role),
    Role(Role),
}

impl TryFrom<UserRoleRow> for UserRole {
    type Error = RoleError;

    fn try_from(row: UserRoleRow) -> Result<Self, Self::Error> {
        let role = row.role.parse().map_err(|_| RoleError::UnknownRole(row.role))?;
        Ok(Self {
            id: row.id,
            user_id: row.user_id,
            role,
        })
    }
}
