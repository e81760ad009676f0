//! Melee targeting.
//!
//! Every actor fights whatever is next to it. When several candidates are in
//! range the first one in candidate order wins; distance plays no part.

use crate::game::{Entity, Location, Target};

/// Something an actor could attack, as seen at the start of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// How to reach the candidate later.
    pub target: Target,
    /// Where the candidate stood when the snapshot was taken.
    pub location: Location,
}

/// Pick the first candidate in melee range of `actor`.
///
/// Returns `None` if nothing is nearby.
#[must_use]
pub fn find_target(actor: &Entity, candidates: &[Candidate]) -> Option<Target> {
    candidates
        .iter()
        .find(|candidate| actor.location.is_nearby(candidate.location))
        .map(|candidate| candidate.target)
}

/// Read-only candidate lists for one acquisition phase.
///
/// Built once per tick so that every actor sees the same world.
#[derive(Debug, Clone, Default)]
pub struct CandidatePools {
    /// Enemy units. Used by the player castle and player units.
    pub enemy_units: Vec<Candidate>,
    /// Player units followed by the avatar. Used by the enemy castle and enemy units.
    pub player_units_and_avatar: Vec<Candidate>,
    /// Enemy units followed by the enemy castle. Used by the avatar.
    pub enemy_units_and_castle: Vec<Candidate>,
}
