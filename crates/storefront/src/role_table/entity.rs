//! [`TableRow`] implementation for [`UserRoleRow`]. A user holds each role at most once.

use super::row::{UserRoleFilter, UserRoleInsert, UserRolePatch, UserRoleRow};
use super::RoleError;
use crate::model::UserRoleId;
use async_trait::async_trait;
use table_actor::TableRow;

#[async_trait]
impl TableRow for UserRoleRow {
    const TABLE: &'static str = "user_roles";
    type Id = UserRoleId;
    type Insert = UserRoleInsert;
    type Patch = UserRolePatch;
    type Filter = UserRoleFilter;
    type Context = ();
    type Error = RoleError;

    fn id(&self) -> &UserRoleId {
        &self.id
    }

    fn from_insert(id: UserRoleId, params: UserRoleInsert) -> Result<Self, RoleError> {
        Ok(Self {
            id,
            user_id: params.user_id,
            role: params.role.as_str().to_string(),
        })
    }

    fn matches(&self, filter: &UserRoleFilter) -> bool {
        match filter {
            UserRoleFilter::User(user) => &self.user_id == user,
            UserRoleFilter::Grant(user, role) => &self.user_id == user && self.role == role.as_str(),
            UserRoleFilter::Role(role) => self.role == role.as_str(),
        }
    }

    fn conflicts_with(&self, other: &Self) -> bool {
        self.user_id == other.user_id && self.role == other.role
    }

    async fn on_update(&mut self, patch: UserRolePatch, _ctx: &()) -> Result<(), RoleError> {
        match patch {}
    }
}
