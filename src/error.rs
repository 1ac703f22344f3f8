//! Error types for the roulette engine.

use crate::core::ShooterId;

/// Alias for `Result<T, Error>`.
pub type GameResult<T> = Result<T, Error>;

/// Errors that can occur while configuring or playing a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested cylinder size cannot hold a round and still leave an
    /// empty chamber. Raised by construction and reconfiguration; the
    /// previous configuration (if any) is left untouched.
    #[error("a gun needs at least 2 chambers, got {requested}")]
    NotEnoughChambers {
        /// The rejected chamber count.
        requested: u32,
    },

    /// The same participant tried to pull the trigger twice in a row.
    /// The pull does not count and the cylinder does not advance.
    #[error("{0} cannot go twice in a row")]
    RepeatedShooter(ShooterId),
}
