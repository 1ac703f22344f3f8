//! Pull report formatting.
//!
//! The classic bot line is `nick: chamber 3 of 6 => +click+`, followed by an
//! emote when the cylinder is respun or the gun reloaded. The chamber
//! numbers must be captured *before* the pull, because a terminal outcome
//! resets the counters; [`PullReport::capture`] packages that choreography.

use serde::{Deserialize, Serialize};

use crate::core::{ShooterId, Spin};
use crate::error::GameResult;
use crate::game::{Game, Outcome};

/// Snapshot of one trigger pull, ready for rendering.
///
/// ```
/// use revolver::{FixedSpin, Game, PullReport, ShooterId};
///
/// let mut game = Game::with_rng(6, FixedSpin(1)).unwrap();
/// let report = PullReport::capture(&mut game, ShooterId::new("alice")).unwrap();
///
/// assert_eq!(report.to_string(), "alice: chamber 1 of 6 => *BANG*");
/// assert_eq!(report.emote(), Some("reloads"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullReport {
    /// Who pulled the trigger.
    pub shooter: ShooterId,
    /// The 1-based chamber that was fired.
    pub chamber: u32,
    /// Total chambers in the gun at the time of the pull.
    pub total: u32,
    /// What the pull produced.
    pub outcome: Outcome,
}

impl PullReport {
    /// Pull the trigger and snapshot the result.
    ///
    /// Reads the chamber numbers first, then pulls. A repeated shooter
    /// fails through unchanged, with no report.
    pub fn capture<R: Spin>(game: &mut Game<R>, shooter: ShooterId) -> GameResult<Self> {
        let chamber = game.next_chamber();
        let total = game.chambers();
        let outcome = game.pull(shooter.clone())?;
        Ok(Self {
            shooter,
            chamber,
            total,
            outcome,
        })
    }

    /// The secondary emote-style announcement, if the outcome has one.
    #[must_use]
    pub fn emote(&self) -> Option<&'static str> {
        self.outcome.emote()
    }
}

impl std::fmt::Display for PullReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: chamber {} of {} => {}",
            self.shooter, self.chamber, self.total, self.outcome
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedSpin;

    #[test]
    fn test_render_click() {
        let mut game = Game::with_rng(6, FixedSpin(3)).unwrap();
        let report = PullReport::capture(&mut game, ShooterId::new("alice")).unwrap();

        assert_eq!(report.to_string(), "alice: chamber 1 of 6 => +click+");
        assert_eq!(report.emote(), None);
    }

    #[test]
    fn test_render_reload_keeps_pre_reset_numbers() {
        let mut game = Game::with_rng(2, FixedSpin(2)).unwrap();
        let report = PullReport::capture(&mut game, ShooterId::new("bob")).unwrap();

        assert_eq!(report.outcome, Outcome::Reload);
        assert_eq!(report.chamber, 1);
        assert_eq!(report.to_string(), "bob: chamber 1 of 2 => +click+");
        assert_eq!(report.emote(), Some("spins the cylinder"));
        // The gun itself has already been respun.
        assert_eq!(game.shots_fired(), 0);
    }

    #[test]
    fn test_repeated_shooter_produces_no_report() {
        let mut game = Game::with_rng(6, FixedSpin(6)).unwrap();
        PullReport::capture(&mut game, ShooterId::new("alice")).unwrap();

        assert!(PullReport::capture(&mut game, ShooterId::new("alice")).is_err());
        assert_eq!(game.shots_fired(), 1);
    }
}
