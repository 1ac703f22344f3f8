//! The Russian Roulette gun.
//!
//! One [`Game`] is one loaded gun in play. The cylinder has `chambers`
//! chambers, exactly one of which holds the live round; its position is
//! drawn uniformly on every reset and never exposed to callers. Pulls
//! advance through the chambers in order; hitting the live round, or firing
//! the last possible empty chamber, ends the round and respins the cylinder.
//!
//! The engine is not internally synchronized. It performs no I/O, every
//! call completes immediately, and a host serving several rooms keeps one
//! instance per room behind its own dispatcher.

use crate::core::{GameConfig, GameRng, ShooterId, Spin};
use crate::error::{Error, GameResult};
use crate::game::Outcome;

/// Smallest legal cylinder: one live round plus one empty chamber.
pub const MIN_CHAMBERS: u32 = 2;

/// Chamber count used when the host does not configure one.
pub const DEFAULT_CHAMBERS: u32 = 6;

/// One game of Russian Roulette.
///
/// Generic over the spin source so tests can pin the loaded chamber;
/// production code uses the [`GameRng`] default.
///
/// ```
/// use revolver::{FixedSpin, Game, Outcome, ShooterId};
///
/// // Live round fixed in chamber 3.
/// let mut game = Game::with_rng(6, FixedSpin(3)).unwrap();
///
/// assert_eq!(game.pull(ShooterId::new("alice")).unwrap(), Outcome::Click);
/// assert_eq!(game.pull(ShooterId::new("bob")).unwrap(), Outcome::Click);
/// assert_eq!(game.pull(ShooterId::new("carol")).unwrap(), Outcome::Bang);
/// ```
#[derive(Clone, Debug)]
pub struct Game<R: Spin = GameRng> {
    chambers: u32,
    loaded_chamber: u32,
    shots_fired: u32,
    last_shooter: Option<ShooterId>,
    rng: R,
}

impl Game<GameRng> {
    /// Create a new game with an OS-seeded RNG.
    ///
    /// Fails with [`Error::NotEnoughChambers`] if `chambers < 2`.
    pub fn new(chambers: u32) -> GameResult<Self> {
        Self::with_rng(chambers, GameRng::from_entropy())
    }

    /// Create a new game from a host configuration.
    pub fn from_config(config: &GameConfig) -> GameResult<Self> {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_rng(config.chambers, rng)
    }
}

impl<R: Spin> Game<R> {
    /// Create a new game with an injected spin source.
    ///
    /// Fails with [`Error::NotEnoughChambers`] if `chambers < 2`.
    pub fn with_rng(chambers: u32, rng: R) -> GameResult<Self> {
        if chambers < MIN_CHAMBERS {
            return Err(Error::NotEnoughChambers {
                requested: chambers,
            });
        }

        let mut game = Self {
            chambers,
            loaded_chamber: 0,
            shots_fired: 0,
            last_shooter: None,
            rng,
        };
        game.reset();
        Ok(game)
    }

    /// Spin the cylinder.
    ///
    /// Draws a fresh position for the live round, zeroes the shot count and
    /// clears the last shooter. Called on construction, after any terminal
    /// outcome, and when the chamber count changes.
    pub fn reset(&mut self) {
        self.loaded_chamber = self.rng.spin(self.chambers);
        self.shots_fired = 0;
        self.last_shooter = None;
    }

    /// Pull the trigger.
    ///
    /// The same shooter may not pull twice in a row: that fails with
    /// [`Error::RepeatedShooter`] and nothing changes — the pull does not
    /// count and the cylinder does not advance.
    ///
    /// Otherwise the pull counts, and exactly one of three things happens:
    ///
    /// - [`Outcome::Reload`] — the chamber was empty and it was the last
    ///   chamber the round could reach without wrapping. The cylinder is
    ///   respun.
    /// - [`Outcome::Bang`] — the chamber held the live round. The gun is
    ///   reloaded.
    /// - [`Outcome::Click`] — the chamber was empty; the round continues.
    ///
    /// Both terminal outcomes leave the gun ready for a fresh round, so
    /// read [`shots_fired`] and [`chambers`] *before* pulling when
    /// reporting "chamber N of M".
    ///
    /// [`shots_fired`]: Game::shots_fired
    /// [`chambers`]: Game::chambers
    pub fn pull(&mut self, shooter: impl Into<ShooterId>) -> GameResult<Outcome> {
        let shooter = shooter.into();
        if self.last_shooter.as_ref() == Some(&shooter) {
            return Err(Error::RepeatedShooter(shooter));
        }

        self.last_shooter = Some(shooter);
        self.shots_fired += 1;

        // The reload check must run before the bang check; the invariant
        // makes them mutually exclusive, but the historical order is part
        // of the contract.
        if self.shots_fired == self.chambers - 1 && self.loaded_chamber == self.chambers {
            self.reset();
            return Ok(Outcome::Reload);
        }

        if self.shots_fired == self.loaded_chamber {
            self.reset();
            return Ok(Outcome::Bang);
        }

        Ok(Outcome::Click)
    }

    /// Change the number of chambers in the gun.
    ///
    /// On success the in-progress round is discarded and the cylinder is
    /// respun. On failure the game is left exactly as it was.
    pub fn set_chambers(&mut self, chambers: u32) -> GameResult<()> {
        if chambers < MIN_CHAMBERS {
            return Err(Error::NotEnoughChambers {
                requested: chambers,
            });
        }

        self.chambers = chambers;
        self.reset();
        Ok(())
    }

    /// Number of shots fired since the last reset.
    #[must_use]
    pub fn shots_fired(&self) -> u32 {
        self.shots_fired
    }

    /// Number of chambers in the gun.
    #[must_use]
    pub fn chambers(&self) -> u32 {
        self.chambers
    }

    /// The 1-based chamber the next pull will fire.
    #[must_use]
    pub fn next_chamber(&self) -> u32 {
        self.shots_fired + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedSpin;

    #[test]
    fn test_new_game_starts_fresh() {
        let game = Game::new(6).unwrap();
        assert_eq!(game.chambers(), 6);
        assert_eq!(game.shots_fired(), 0);
        assert_eq!(game.next_chamber(), 1);
    }

    #[test]
    fn test_rejects_tiny_cylinders() {
        for chambers in [0, 1] {
            assert_eq!(
                Game::new(chambers).unwrap_err(),
                Error::NotEnoughChambers {
                    requested: chambers
                }
            );
        }
        assert!(Game::new(2).is_ok());
    }

    #[test]
    fn test_set_chambers_failure_leaves_state() {
        let mut game = Game::with_rng(6, FixedSpin(6)).unwrap();
        game.pull(ShooterId::new("a")).unwrap();

        assert!(game.set_chambers(1).is_err());
        assert_eq!(game.chambers(), 6);
        assert_eq!(game.shots_fired(), 1);
    }

    #[test]
    fn test_from_config_uses_seed() {
        let config = GameConfig::new(6).with_seed(42);
        let game1 = Game::from_config(&config).unwrap();
        let game2 = Game::from_config(&config).unwrap();

        // Same seed, same hidden chamber.
        assert_eq!(game1.loaded_chamber, game2.loaded_chamber);
    }
}
