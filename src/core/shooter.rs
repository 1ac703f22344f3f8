//! Shooter identification.
//!
//! The engine never interprets identities; it only compares them to stop
//! the same participant from pulling the trigger twice in a row. Hosts
//! typically use the chat nickname or a stable account key.

use serde::{Deserialize, Serialize};

/// Equality-comparable identity of one participant.
///
/// Two pulls within the same round carrying equal `ShooterId`s are treated
/// as the same shooter.
///
/// ```
/// use revolver::core::ShooterId;
///
/// let a = ShooterId::new("alice");
/// assert_eq!(a, ShooterId::new("alice"));
/// assert_ne!(a, ShooterId::new("bob"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShooterId(String);

impl ShooterId {
    /// Create a new shooter ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw identity string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShooterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShooterId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ShooterId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
