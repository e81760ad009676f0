//! Match state management.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::game::{Bounds, Entity, Faction, Location, Side, Target, UnitId};
use crate::input::Action;

/// Tunable numbers of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    /// Starting health of each castle.
    pub castle_health: i32,
    /// Health of the avatar, restored on every respawn.
    pub avatar_health: i32,
    /// Health of a freshly spawned unit.
    pub unit_health: i32,
    /// Money credited to a faction per enemy unit removed.
    pub kill_reward: u32,
    /// Money credited to the enemy each time the avatar dies.
    pub death_penalty: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            castle_health: 10,
            avatar_health: 2,
            unit_health: 1,
            kill_reward: 1,
            death_penalty: 5,
        }
    }
}

/// How a finished match ended, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The enemy castle fell.
    Victory,
    /// The player castle fell.
    Defeat,
    /// Both castles fell on the same tick.
    Draw,
}

/// What a keyboard action did to the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionEffect {
    /// The avatar moved.
    Moved,
    /// The match is now paused.
    Paused,
    /// The key was not understood; the match is now paused.
    Rejected,
    /// The player asked to leave. State is untouched.
    Quit,
}

/// Complete match state.
#[derive(Debug, Clone)]
pub struct GameState {
    /// The keyboard-controlled faction.
    pub player: Faction,
    /// The computer-controlled faction.
    pub enemy: Faction,
    /// The keyboard-controlled unit.
    pub avatar: Entity,
    /// While set, ticks are ignored.
    pub paused: bool,
    /// Rules this match was created with.
    pub rules: Rules,
    /// The playable grid.
    bounds: Bounds,
    /// Simulation steps run so far.
    pub(crate) ticks: u64,
    /// Next id handed out by the spawner.
    pub(crate) next_unit_id: u32,
}

impl GameState {
    /// Create a match for a window of the given size with default rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the window leaves no playable grid.
    pub fn new(width: u16, height: u16) -> Result<Self> {
        Self::with_rules(width, height, Rules::default())
    }

    /// Create a match for a window of the given size.
    ///
    /// The player castle sits in the top-left playable cell and the enemy
    /// castle in the bottom-right one. The avatar starts on its castle.
    ///
    /// # Errors
    ///
    /// Returns an error if the window leaves no playable grid.
    pub fn with_rules(width: u16, height: u16, rules: Rules) -> Result<Self> {
        let bounds = Bounds::from_window(width, height)?;
        let player = Faction::new(Side::Player, Location::new(0, 0), rules.castle_health);
        let enemy = Faction::new(Side::Enemy, bounds.far_corner(), rules.castle_health);
        let avatar = Entity::new(rules.avatar_health, player.castle.location);

        Ok(Self {
            player,
            enemy,
            avatar,
            paused: false,
            rules,
            bounds,
            ticks: 0,
            next_unit_id: 0,
        })
    }

    /// The playable grid.
    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of simulation steps run so far.
    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Get a faction by side.
    #[must_use]
    pub const fn faction(&self, side: Side) -> &Faction {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    /// Get a mutable reference to a faction by side.
    #[must_use]
    pub fn faction_mut(&mut self, side: Side) -> &mut Faction {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }

    /// Resolve a target reference.
    ///
    /// Returns `None` for a unit that has been removed.
    #[must_use]
    pub fn entity(&self, target: Target) -> Option<&Entity> {
        match target {
            Target::Unit(side, id) => self.faction(side).unit(id).map(|unit| &unit.entity),
            Target::Castle(side) => Some(&self.faction(side).castle),
            Target::Avatar => Some(&self.avatar),
        }
    }

    /// Resolve a target reference for mutation.
    #[must_use]
    pub fn entity_mut(&mut self, target: Target) -> Option<&mut Entity> {
        match target {
            Target::Unit(side, id) => self
                .faction_mut(side)
                .unit_mut(id)
                .map(|unit| &mut unit.entity),
            Target::Castle(side) => Some(&mut self.faction_mut(side).castle),
            Target::Avatar => Some(&mut self.avatar),
        }
    }

    /// Hand out a fresh unit id.
    pub(crate) fn allocate_unit_id(&mut self) -> UnitId {
        let id = UnitId(self.next_unit_id);
        self.next_unit_id = self.next_unit_id.wrapping_add(1);
        id
    }

    /// Check if either castle has fallen.
    #[must_use]
    pub const fn is_end_state(&self) -> bool {
        self.player.castle.is_dead() || self.enemy.castle.is_dead()
    }

    /// How the match ended, or `None` while both castles stand.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        match (self.player.castle.is_dead(), self.enemy.castle.is_dead()) {
            (false, false) => None,
            (false, true) => Some(Outcome::Victory),
            (true, false) => Some(Outcome::Defeat),
            (true, true) => Some(Outcome::Draw),
        }
    }

    /// Apply the direct effect of a keyboard action.
    ///
    /// Only the avatar position and the pause flag can change here; combat,
    /// movement and spawning advance on ticks alone. The avatar is not kept
    /// on the grid.
    pub fn apply_action(&mut self, action: Action) -> ActionEffect {
        let (dx, dy) = match action {
            Action::MoveUp => (0, -1),
            Action::MoveDown => (0, 1),
            Action::MoveLeft => (-1, 0),
            Action::MoveRight => (1, 0),
            Action::Pause => {
                self.paused = true;
                return ActionEffect::Paused;
            }
            Action::Unrecognized => {
                self.paused = true;
                return ActionEffect::Rejected;
            }
            Action::Escape => return ActionEffect::Quit,
        };

        self.avatar.location = self.avatar.location.offset(dx, dy);
        ActionEffect::Moved
    }
}
