//! Credential checks and session bookkeeping.

use super::{AuthError, Session, SessionToken};
use crate::clients::RoleClient;
use crate::model::UserId;
use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

pub const MIN_PASSWORD_LEN: usize = 6;

#[async_trait]
pub trait AuthService: Send + Sync {
    async fn sign_up(&self, email: &str, password: &str) -> Result<UserId, AuthError>;

    /// Starts a session with the user's current role claims.
    async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// Ends the session. The value is consumed; its token stops resolving.
    async fn logout(&self, session: Session) -> Result<(), AuthError>;

    async fn current_user(&self, token: &SessionToken) -> Result<Session, AuthError>;
}

struct Account {
    user_id: UserId,
    salt: String,
    digest: String,
}

/// Accounts and sessions held in memory. Roles come from the `user_roles` table.
pub struct InMemoryAuth {
    accounts: RwLock<HashMap<String, Account>>,
    /// Keyed by the hashed token.
    sessions: RwLock<HashMap<String, Session>>,
    roles: RoleClient,
}

fn digest(salt: &str, secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(b":");
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}

fn hash_token(token: &SessionToken) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.0.as_bytes());
    hex::encode(hasher.finalize())
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl InMemoryAuth {
    pub fn new(roles: RoleClient) -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            sessions: RwLock::new(HashMap::new()),
            roles,
        }
    }

    pub async fn active_sessions(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl AuthService for InMemoryAuth {
    #[instrument(skip(self, password))]
    async fn sign_up(&self, email: &str, password: &str) -> Result<UserId, AuthError> {
        let email = normalize_email(email);
        if !email.contains('@') {
            return Err(AuthError::InvalidEmail(email));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword(MIN_PASSWORD_LEN));
        }

        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&email) {
            return Err(AuthError::EmailTaken(email));
        }
        let salt = Uuid::new_v4().simple().to_string();
        let account = Account {
            user_id: UserId::new(),
            digest: digest(&salt, password),
            salt,
        };
        let user_id = account.user_id;
        accounts.insert(email, account);
        info!(%user_id, "Account created");
        Ok(user_id)
    }

    #[instrument(skip(self, password))]
    async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let email = normalize_email(email);
        let user_id = {
            let accounts = self.accounts.read().await;
            match accounts.get(&email) {
                Some(account) if account.digest == digest(&account.salt, password) => {
                    account.user_id
                }
                _ => {
                    warn!("Login rejected");
                    return Err(AuthError::InvalidCredentials);
                }
            }
        };

        let roles = self.roles.roles_for(user_id).await?;
        let session = Session {
            user_id,
            email,
            roles,
            token: SessionToken(Uuid::new_v4().simple().to_string()),
        };
        self.sessions
            .write()
            .await
            .insert(hash_token(&session.token), session.clone());
        info!(%user_id, roles = ?session.roles, "Session started");
        Ok(session)
    }

    #[instrument(skip_all, fields(user_id = %session.user_id))]
    async fn logout(&self, session: Session) -> Result<(), AuthError> {
        match self.sessions.write().await.remove(&hash_token(&session.token)) {
            Some(_) => {
                info!("Session ended");
                Ok(())
            }
            None => Err(AuthError::UnknownSession),
        }
    }

    async fn current_user(&self, token: &SessionToken) -> Result<Session, AuthError> {
        let session = self
            .sessions
            .read()
            .await
            .get(&hash_token(token))
            .cloned()
            .ok_or(AuthError::UnknownSession)?;
        debug!(user_id = %session.user_id, "Session resolved");
        Ok(session)
    }
}
