//! Newtype identifiers.
//!
//! Newtypes prevent mixing up identifier spaces — a catalog product id is
//! not a user-authored product id, and the two differ in representation:
//! the remote catalog uses numeric ids, locally authored listings use
//! generated strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate numeric newtype IDs.
macro_rules! define_numeric_id {
    ($name:ident) => {
        /// A unique numeric identifier.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        pub struct $name(u64);

        impl $name {
            /// Create an ID from its numeric value.
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Get the numeric value.
            pub const fn value(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }
    };
}

define_numeric_id!(ProductId);
define_numeric_id!(UserId);

/// Identifier for a locally authored product listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserProductId(String);

impl UserProductId {
    /// Create an ID from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new unique ID: `user_<millis>_<random suffix>`.
    pub fn generate() -> Self {
        use rand::distributions::Alphanumeric;
        use rand::Rng;

        let millis = chrono::Utc::now().timestamp_millis();
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(9)
            .map(|b| (b as char).to_ascii_lowercase())
            .collect();
        Self(format!("user_{millis}_{suffix}"))
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for UserProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_id_value() {
        let id = ProductId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(format!("{}", id), "42");
    }

    #[test]
    fn test_numeric_id_equality() {
        assert_eq!(ProductId::new(1), ProductId::from(1));
        assert_ne!(ProductId::new(1), ProductId::new(2));
    }

    #[test]
    fn test_numeric_id_serializes_as_number() {
        let json = serde_json::to_string(&ProductId::new(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn test_user_product_id_format() {
        let id = UserProductId::generate();
        let s = id.as_str();

        assert!(s.starts_with("user_"));
        let parts: Vec<&str> = s.splitn(3, '_').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(parts[2].len(), 9);
    }

    #[test]
    fn test_user_product_id_uniqueness() {
        let id1 = UserProductId::generate();
        let id2 = UserProductId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_user_product_id_from_str() {
        let id: UserProductId = "user_1_abc".into();
        assert_eq!(id.as_str(), "user_1_abc");
    }
}
