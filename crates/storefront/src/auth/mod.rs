//! # Authentication
//!
//! Sign-up, login and logout against an [`AuthService`]. A successful login yields a
//! [`Session`]: an explicit value carrying the user id and role claims, handed to whatever
//! needs to know who is acting. Logging out consumes it.
//!
//! ## Structure
//!
//! - [`service`] - [`AuthService`] trait and the [`InMemoryAuth`] implementation
//! - [`session`] - [`Session`], [`SessionToken`] and the admin checks
//! - [`error`] - [`AuthError`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! let auth = InMemoryAuth::new(backend.roles.clone());
//! let user_id = auth.sign_up("ana@example.com", "secret123").await?;
//! let session = auth.login("ana@example.com", "secret123").await?;
//! session.require_admin()?;
//! auth.logout(session).await?;
//! ```

pub mod error;
pub mod service;
pub mod session;

pub use error::AuthError;
pub use service::{AuthService, InMemoryAuth};
pub use session::{Session, SessionToken};
