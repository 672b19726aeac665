//! Type-safe identifiers. Every key is a UUID on the wire; the newtypes keep a `ProductId`
//! from being passed where a `CompanyId` is expected.

use paste::paste;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

macro_rules! uuid_ids {
    ($($name:ident),* $(,)?) => {
        paste! {
            $(
                #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
                #[serde(transparent)]
                pub struct [<$name Id>](pub Uuid);

                impl [<$name Id>] {
                    pub fn new() -> Self {
                        Self(Uuid::new_v4())
                    }
                }

                impl Default for [<$name Id>] {
                    fn default() -> Self {
                        Self::new()
                    }
                }

                impl From<Uuid> for [<$name Id>] {
                    fn from(id: Uuid) -> Self {
                        Self(id)
                    }
                }

                impl Display for [<$name Id>] {
                    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(f, "{}", self.0)
                    }
                }
            )*
        }
    };
}

uuid_ids!(Company, Product, Order, User, Representative, UserRole);
