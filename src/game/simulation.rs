//! The per-tick simulation step.
//!
//! A step runs five phases in a fixed order, each finishing before the next
//! begins:
//!
//! 1. target acquisition
//! 2. movement of units that are not fighting
//! 3. damage from every unit and the avatar that holds a target
//! 4. removal of dead units, paying the opposing faction
//! 5. avatar respawn

use serde::Serialize;

use crate::game::{find_target, Candidate, CandidatePools, GameState, Target};

/// What happened during one simulation step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TickReport {
    /// Tick number of this step (1-based).
    pub tick: u64,
    /// Points of damage dealt.
    pub hits: u32,
    /// Player units removed.
    pub player_losses: u32,
    /// Enemy units removed.
    pub enemy_losses: u32,
    /// Whether the avatar died and was sent back to its castle.
    pub avatar_respawned: bool,
}

impl GameState {
    /// Advance the match by one tick.
    pub fn step(&mut self) -> TickReport {
        self.ticks += 1;

        self.acquire_targets();
        self.move_units();
        let hits = self.apply_damage();
        let (player_losses, enemy_losses) = self.remove_casualties();
        let avatar_respawned = self.respawn_avatar();

        let report = TickReport {
            tick: self.ticks,
            hits,
            player_losses,
            enemy_losses,
            avatar_respawned,
        };

        tracing::debug!(
            tick = report.tick,
            player_units = self.player.units.len(),
            enemy_units = self.enemy.units.len(),
            hits,
            player_losses,
            enemy_losses,
            "Simulation step"
        );

        report
    }

    /// Snapshot the candidate lists for this tick's acquisition phase.
    #[must_use]
    pub fn candidate_pools(&self) -> CandidatePools {
        let enemy_units: Vec<Candidate> = self.enemy.unit_candidates().collect();

        let mut player_units_and_avatar: Vec<Candidate> = self.player.unit_candidates().collect();
        player_units_and_avatar.push(Candidate {
            target: Target::Avatar,
            location: self.avatar.location,
        });

        let mut enemy_units_and_castle = enemy_units.clone();
        enemy_units_and_castle.push(self.enemy.castle_candidate());

        CandidatePools {
            enemy_units,
            player_units_and_avatar,
            enemy_units_and_castle,
        }
    }

    /// A target that still resolves, or `None`.
    fn live_target(&self, target: Option<Target>) -> Option<Target> {
        target.filter(|&target| self.entity(target).is_some())
    }

    /// Phase 1: give every idle actor the first enemy in reach.
    ///
    /// Castles and units keep a target once they have one. The avatar drops
    /// a target that is no longer next to it.
    fn acquire_targets(&mut self) {
        let pools = self.candidate_pools();

        if self.live_target(self.player.castle.target).is_none() {
            self.player.castle.target = find_target(&self.player.castle, &pools.enemy_units);
        }

        if self.live_target(self.enemy.castle.target).is_none() {
            self.enemy.castle.target =
                find_target(&self.enemy.castle, &pools.player_units_and_avatar);
        }

        for i in 0..self.player.units.len() {
            if self.live_target(self.player.units[i].entity.target).is_none() {
                let unit = &self.player.units[i].entity;
                self.player.units[i].entity.target = find_target(unit, &pools.enemy_units);
            }
        }

        for i in 0..self.enemy.units.len() {
            if self.live_target(self.enemy.units[i].entity.target).is_none() {
                let unit = &self.enemy.units[i].entity;
                self.enemy.units[i].entity.target =
                    find_target(unit, &pools.player_units_and_avatar);
            }
        }

        let engaged = self
            .avatar
            .target
            .and_then(|target| self.entity(target))
            .is_some_and(|target| self.avatar.location.is_nearby(target.location));
        if !engaged {
            self.avatar.target = find_target(&self.avatar, &pools.enemy_units_and_castle);
            if let Some(target) = self.avatar.target {
                tracing::trace!(?target, "Avatar engaged");
            }
        }
    }

    /// Phase 2: march idle units toward the opposing castle.
    ///
    /// Units with a target hold their ground.
    fn move_units(&mut self) {
        for unit in &mut self.enemy.units {
            if unit.entity.target.is_some() {
                continue;
            }
            let location = &mut unit.entity.location;
            if location.x >= location.y {
                location.x -= 1;
            } else {
                location.y -= 1;
            }
        }

        let enemy_castle_row = self.enemy.castle.location.y;
        for unit in &mut self.player.units {
            if unit.entity.target.is_some() {
                continue;
            }
            let location = &mut unit.entity.location;
            if location.x <= location.y || location.y == enemy_castle_row {
                location.x += 1;
            } else {
                location.y += 1;
            }
        }
    }

    /// Land one hit on `target`.
    ///
    /// Returns `None` if the target no longer exists, otherwise whether the
    /// hit left it dead.
    fn strike(&mut self, target: Target) -> Option<bool> {
        self.entity_mut(target).map(|entity| entity.take_hit())
    }

    /// Phase 3: every unit and the avatar hits its target once.
    ///
    /// An attacker whose target dies, or has vanished, forgets it.
    /// Castles never deal damage. Returns the number of hits landed.
    fn apply_damage(&mut self) -> u32 {
        let mut hits = 0u32;

        for i in 0..self.enemy.units.len() {
            let Some(target) = self.enemy.units[i].entity.target else {
                continue;
            };
            let killed = self.strike(target);
            hits += u32::from(killed.is_some());
            if killed != Some(false) {
                self.enemy.units[i].entity.target = None;
            }
        }

        for i in 0..self.player.units.len() {
            let Some(target) = self.player.units[i].entity.target else {
                continue;
            };
            let killed = self.strike(target);
            hits += u32::from(killed.is_some());
            if killed != Some(false) {
                self.player.units[i].entity.target = None;
            }
        }

        if let Some(target) = self.avatar.target {
            let killed = self.strike(target);
            hits += u32::from(killed.is_some());
            if killed != Some(false) {
                self.avatar.target = None;
            }
        }

        hits
    }

    /// Phase 4: remove dead units and pay out kill rewards.
    ///
    /// Returns `(player_losses, enemy_losses)`.
    fn remove_casualties(&mut self) -> (u32, u32) {
        let reward = self.rules.kill_reward;

        let player_losses = self.player.remove_casualties();
        self.enemy.earn(player_losses.saturating_mul(reward));

        let enemy_losses = self.enemy.remove_casualties();
        self.player.earn(enemy_losses.saturating_mul(reward));

        (player_losses, enemy_losses)
    }

    /// Phase 5: send a dead avatar home at full health.
    ///
    /// The avatar keeps its old target; acquisition drops it next tick once
    /// it is out of reach.
    fn respawn_avatar(&mut self) -> bool {
        if !self.avatar.is_dead() {
            return false;
        }

        self.enemy.earn(self.rules.death_penalty);
        self.avatar.respawn_at(self.player.castle.location);
        tracing::info!(enemy_money = self.enemy.money, "Avatar died and respawned");
        true
    }
}
