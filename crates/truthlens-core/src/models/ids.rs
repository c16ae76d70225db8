//! Identifier newtypes for users and rated items.
//!
//! # Examples
//!
//! ```
//! use truthlens_core::models::{ItemId, UserId};
//!
//! let user = UserId::new();
//! assert!(!user.0.is_empty());
//!
//! let item = ItemId::from("post-1");
//! assert_eq!(item.to_string(), "post-1");
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
        #[ts(export)]
        pub struct $name(pub String);

        impl $name {
            /// Create a new identifier with a random UUID v4.
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id!(
    /// UUID-based identifier of a signed-in user (the auth provider's user id).
    UserId
);

string_id!(
    /// UUID-based identifier of a rated item (a video post).
    ItemId
);
