// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Skirmish: a real-time castle skirmish played in the terminal.
//!
//! Two factions each own a castle. Every few ticks both castles send out a
//! unit that marches on the enemy castle and fights whatever it meets. The
//! player steers an avatar with the arrow keys; the match ends when a
//! castle falls.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Terminal shell (ratatui/crossterm)│
//! ├─────────────────────────────────────┤
//! │   Session (single-owner event loop) │
//! ├─────────────────────────────────────┤
//! │   Game rules (targeting, combat)    │
//! └─────────────────────────────────────┘
//! ```
//!
//! The [`game`] module is pure and deterministic: no I/O, no clocks, no
//! randomness. [`session::Session`] feeds it ticks and actions;
//! [`render`] turns its state into text.

pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod render;
pub mod session;

pub use error::{GameError, Result};

// Re-export key game types at crate root for convenience
pub use game::{Entity, Faction, GameState, Location, Outcome, Side, Target};
