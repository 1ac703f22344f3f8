//! Trigger-pull outcomes.

use serde::{Deserialize, Serialize};

/// What happened when the trigger was pulled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The chamber was empty; the round continues.
    Click,
    /// The chamber was empty and it was the last possible empty chamber.
    /// The cylinder has been respun; a fresh round starts.
    Reload,
    /// The chamber held the live round. The gun has been reloaded and a
    /// fresh round starts.
    Bang,
}

impl Outcome {
    /// True if the fired chamber was empty.
    ///
    /// [`Click`] and [`Reload`] both render as a "+click+" to the shooter;
    /// `Reload` additionally carries a mandatory respin announcement.
    ///
    /// [`Click`]: Outcome::Click
    /// [`Reload`]: Outcome::Reload
    #[must_use]
    pub fn is_empty(self) -> bool {
        matches!(self, Outcome::Click | Outcome::Reload)
    }

    /// True if this outcome ended the round and reset the gun.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Outcome::Reload | Outcome::Bang)
    }

    /// The secondary emote-style announcement for this outcome, if any.
    #[must_use]
    pub fn emote(self) -> Option<&'static str> {
        match self {
            Outcome::Click => None,
            Outcome::Reload => Some("spins the cylinder"),
            Outcome::Bang => Some("reloads"),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Click | Outcome::Reload => f.write_str("+click+"),
            Outcome::Bang => f.write_str("*BANG*"),
        }
    }
}
