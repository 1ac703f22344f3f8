//! # revolver
//!
//! A Russian Roulette game engine for chat bots.
//!
//! One [`Game`] owns the state of a single loaded gun: a cylinder with a
//! configurable number of chambers, one of which holds the live round.
//! Participants take turns pulling the trigger; the engine reports whether
//! the chamber was empty, empty-and-last-before-respin, or loaded, and
//! respins the cylinder after any terminal outcome.
//!
//! ## Design Principles
//!
//! 1. **Host-Agnostic**: No network, file, or chat-protocol code. The engine
//!    is a pure in-memory state machine; an external dispatcher (an IRC bot,
//!    a Discord bot, a test harness) maps commands to calls and outcomes to
//!    user-facing text.
//!
//! 2. **Deterministic When Asked**: Randomness enters through the [`Spin`]
//!    trait. Production code uses the seedable ChaCha8-backed [`GameRng`];
//!    tests pin the draw with [`FixedSpin`].
//!
//! 3. **One Game, One Instance**: The engine holds no session map. Callers
//!    that serve multiple rooms keep one `Game` per room and serialize
//!    access to each.
//!
//! ## Modules
//!
//! - `core`: Shooter identity, RNG, configuration
//! - `game`: The game itself, pull outcomes, report formatting
//! - `error`: Error types

pub mod core;
pub mod error;
pub mod game;

// Re-export commonly used types
pub use crate::core::{FixedSpin, GameConfig, GameRng, GameRngState, ShooterId, Spin};
pub use crate::error::{Error, GameResult};
pub use crate::game::{Game, Outcome, PullReport, DEFAULT_CHAMBERS, MIN_CHAMBERS};
