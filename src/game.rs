//! Simulation core for Skirmish.
//!
//! Implements the rules of a match:
//! - Grid locations and melee adjacency
//! - Factions with castles, money and units
//! - Targeting with first-match tie-breaks
//! - The per-tick simulation step
//! - Periodic unit spawning

mod combat;
mod entity;
mod faction;
mod invariants;
mod map;
mod simulation;
mod spawner;
mod state;

pub use combat::{find_target, Candidate, CandidatePools};
pub use entity::{Entity, Side, Target, Unit, UnitId};
pub use faction::Faction;
pub use invariants::{assert_invariants, check_invariants, InvariantViolation};
pub use map::{Bounds, Location, HEADER_HEIGHT};
pub use simulation::TickReport;
pub use spawner::{SpawnSchedule, DEFAULT_SPAWN_EVERY};
pub use state::{ActionEffect, GameState, Outcome, Rules};
