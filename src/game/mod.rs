//! The game itself: the loaded gun, pull outcomes, report formatting.

pub mod outcome;
pub mod report;
pub mod roulette;

pub use outcome::Outcome;
pub use report::PullReport;
pub use roulette::{Game, DEFAULT_CHAMBERS, MIN_CHAMBERS};
