//! Match invariants - sanity checks that detect bugs.
//!
//! These hold between simulation steps in a correctly implemented match.
//! They are bug detectors, not gameplay limits.

use std::collections::HashSet;

use crate::game::{Faction, GameState, Side, Target, UnitId};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all match invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
/// Meant to run after [`GameState::step`], once casualties are removed.
#[must_use]
pub fn check_invariants(state: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    let mut seen_ids = HashSet::new();
    for faction in [&state.player, &state.enemy] {
        check_faction(faction, &mut seen_ids, &mut violations);
    }

    if state.avatar.is_dead() || state.avatar.health > state.avatar.max_health {
        violations.push(InvariantViolation {
            message: format!(
                "Avatar health {} outside 1..={}",
                state.avatar.health, state.avatar.max_health
            ),
        });
    }

    if let Some(target) = state.avatar.target
        && !matches!(target, Target::Unit(Side::Enemy, _) | Target::Castle(Side::Enemy))
    {
        violations.push(InvariantViolation {
            message: format!("Avatar targets {target:?}"),
        });
    }

    for faction in [&state.player, &state.enemy] {
        if let Some(target) = faction.castle.target
            && target.side() == faction.side
        {
            violations.push(InvariantViolation {
                message: format!("{:?} castle targets its own side: {target:?}", faction.side),
            });
        }
    }

    violations
}

fn check_faction(
    faction: &Faction,
    seen_ids: &mut HashSet<UnitId>,
    violations: &mut Vec<InvariantViolation>,
) {
    for unit in &faction.units {
        if !seen_ids.insert(unit.id) {
            violations.push(InvariantViolation {
                message: format!("Unit id {:?} appears more than once", unit.id),
            });
        }

        let entity = &unit.entity;
        if entity.is_dead() {
            violations.push(InvariantViolation {
                message: format!(
                    "{:?} unit {:?} at {:?} is dead but still on the field",
                    faction.side, unit.id, entity.location
                ),
            });
        }

        if entity.health > entity.max_health {
            violations.push(InvariantViolation {
                message: format!(
                    "{:?} unit {:?} has health {} > max {}",
                    faction.side, unit.id, entity.health, entity.max_health
                ),
            });
        }

        // Units only ever fight enemy units or the avatar, never castles.
        let valid_target = match (faction.side, entity.target) {
            (_, None) | (Side::Player, Some(Target::Unit(Side::Enemy, _))) => true,
            (Side::Enemy, Some(Target::Unit(Side::Player, _) | Target::Avatar)) => true,
            _ => false,
        };
        if !valid_target {
            violations.push(InvariantViolation {
                message: format!(
                    "{:?} unit {:?} targets {:?}",
                    faction.side, unit.id, entity.target
                ),
            });
        }
    }
}

/// Assert that all invariants hold, panicking if any are violated.
///
/// Use this in tests to catch invariant violations.
///
/// # Panics
///
/// Panics if any invariant is violated.
pub fn assert_invariants(state: &GameState) {
    let violations = check_invariants(state);
    assert!(
        violations.is_empty(),
        "Invariant violations at tick {}:\n{}",
        state.ticks(),
        violations
            .iter()
            .map(|v| format!("  - {}", v.message))
            .collect::<Vec<_>>()
            .join("\n")
    );
}
