//! Periodic reinforcements for both factions.

use serde::{Deserialize, Serialize};

use crate::game::GameState;

/// Default number of ticks between spawns.
pub const DEFAULT_SPAWN_EVERY: u32 = 5;

/// Decides which ticks bring reinforcements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnSchedule {
    every: u32,
}

impl SpawnSchedule {
    /// Spawn on every `every`-th tick. Zero is treated as one.
    #[must_use]
    pub fn new(every: u32) -> Self {
        Self {
            every: every.max(1),
        }
    }

    /// Ticks between spawns.
    #[must_use]
    pub const fn every(&self) -> u32 {
        self.every
    }

    /// Check if the given 1-based tick is a spawn tick.
    #[must_use]
    pub fn is_due(&self, tick: u64) -> bool {
        tick.is_multiple_of(u64::from(self.every))
    }
}

impl Default for SpawnSchedule {
    fn default() -> Self {
        Self::new(DEFAULT_SPAWN_EVERY)
    }
}

impl GameState {
    /// Add one fresh unit to each faction, standing on its castle.
    pub fn spawn_units(&mut self) {
        let health = self.rules.unit_health;

        let enemy_id = self.allocate_unit_id();
        self.enemy.spawn_unit(enemy_id, health);

        let player_id = self.allocate_unit_id();
        self.player.spawn_unit(player_id, health);

        tracing::info!(
            player_units = self.player.units.len(),
            enemy_units = self.enemy.units.len(),
            "Units spawned"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_default() {
        let schedule = SpawnSchedule::default();
        assert_eq!(schedule.every(), 5);
        assert!(!schedule.is_due(1));
        assert!(!schedule.is_due(4));
        assert!(schedule.is_due(5));
        assert!(schedule.is_due(10));
        assert!(!schedule.is_due(11));
    }

    #[test]
    fn test_schedule_zero_means_every_tick() {
        let schedule = SpawnSchedule::new(0);
        assert_eq!(schedule.every(), 1);
        assert!((1..10).all(|tick| schedule.is_due(tick)));
    }

    #[test]
    fn test_spawn_units_at_castles() {
        let mut game = GameState::new(10, 5).unwrap();
        game.spawn_units();

        assert_eq!(game.player.units.len(), 1);
        assert_eq!(game.enemy.units.len(), 1);

        let player_unit = game.player.units[0].entity;
        assert_eq!(player_unit.location, game.player.castle.location);
        assert_eq!(player_unit.health, 1);
        assert_eq!(player_unit.max_health, 1);

        let enemy_unit = game.enemy.units[0].entity;
        assert_eq!(enemy_unit.location, game.enemy.castle.location);
        assert_ne!(game.player.units[0].id, game.enemy.units[0].id);
    }

    #[test]
    fn test_spawn_is_unconditional() {
        let mut game = GameState::new(10, 5).unwrap();
        for _ in 0..3 {
            game.spawn_units();
        }
        // Stacked on the castle, all three remain.
        assert_eq!(game.player.units.len(), 3);
        assert_eq!(game.enemy.units.len(), 3);
    }
}
