//! Combat entities and the identifiers used to target them.

use serde::{Deserialize, Serialize};

use crate::game::Location;

/// One of the two opposing sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The keyboard-controlled side.
    Player,
    /// The computer-controlled side.
    Enemy,
}

impl Side {
    /// The opposing side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

/// Stable identifier of a spawned unit.
///
/// Ids are never reused within a match, so an id that no longer resolves
/// always means the unit was removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(pub u32);

/// A non-owning reference to something that can be attacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// A spawned unit of the given side.
    Unit(Side, UnitId),
    /// The castle of the given side.
    Castle(Side),
    /// The player's avatar.
    Avatar,
}

impl Target {
    /// The side the referenced entity fights for.
    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            Target::Unit(side, _) | Target::Castle(side) => side,
            Target::Avatar => Side::Player,
        }
    }
}

/// A unit, castle, or avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Current health. Zero or below means dead.
    pub health: i32,
    /// Health restored on respawn.
    pub max_health: i32,
    /// Position on the grid.
    pub location: Location,
    /// What this entity is currently fighting, if anything.
    pub target: Option<Target>,
}

impl Entity {
    /// Create an entity at full health with no target.
    #[must_use]
    pub const fn new(health: i32, location: Location) -> Self {
        Self {
            health,
            max_health: health,
            location,
            target: None,
        }
    }

    /// Check if health has run out.
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Deal one point of damage.
    ///
    /// Returns `true` if this hit left the entity dead.
    pub fn take_hit(&mut self) -> bool {
        self.health = self.health.saturating_sub(1);
        self.is_dead()
    }

    /// Put the entity back at `location` with full health.
    pub fn respawn_at(&mut self, location: Location) {
        self.location = location;
        self.health = self.max_health;
    }
}

/// A spawned mobile unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Identifier used by other entities to target this unit.
    pub id: UnitId,
    /// Combat state.
    pub entity: Entity,
}
