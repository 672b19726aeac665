use super::AuthError;
use crate::model::{Role, UserId};
use std::fmt::Display;

/// Opaque bearer token for a live session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(pub String);

impl Display for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An authenticated user and the roles they held at login.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user_id: UserId,
    pub email: String,
    pub roles: Vec<Role>,
    pub token: SessionToken,
}

impl Session {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Owners and superusers reach the admin area.
    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Owner) || self.has_role(Role::Superuser)
    }

    pub fn require_admin(&self) -> Result<(), AuthError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AuthError::Forbidden)
        }
    }

    /// The users list is open to superusers and representatives.
    pub fn can_manage_users(&self) -> bool {
        self.has_role(Role::Superuser) || self.has_role(Role::Representative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(roles: Vec<Role>) -> Session {
        Session {
            user_id: UserId::new(),
            email: "ana@example.com".into(),
            roles,
            token: SessionToken("t".into()),
        }
    }

    #[test]
    fn admin_area_needs_owner_or_superuser() {
        assert!(session(vec![Role::Owner]).require_admin().is_ok());
        assert!(session(vec![Role::Superuser]).is_admin());
        assert_eq!(
            session(vec![Role::Representative]).require_admin(),
            Err(AuthError::Forbidden)
        );
        assert!(!session(vec![]).is_admin());
    }

    #[test]
    fn representatives_may_manage_users() {
        assert!(session(vec![Role::Representative]).can_manage_users());
        assert!(session(vec![Role::Superuser]).can_manage_users());
        assert!(!session(vec![Role::Owner]).can_manage_users());
    }
}
