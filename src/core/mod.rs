//! Core engine types: shooter identity, RNG, configuration.
//!
//! Everything here is host-agnostic. The chat frontend supplies a
//! [`ShooterId`] per participant and a [`GameConfig`] from its settings;
//! the engine supplies the randomness.

pub mod config;
pub mod rng;
pub mod shooter;

pub use config::GameConfig;
pub use rng::{FixedSpin, GameRng, GameRngState, Spin};
pub use shooter::ShooterId;
