//! Faction state: a castle, a treasury, and an army.

use crate::game::{Candidate, Entity, Location, Side, Target, Unit, UnitId};

/// State for one side of the match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faction {
    /// Which side this faction fights for.
    pub side: Side,
    /// The faction's castle. Never removed, only worn down.
    pub castle: Entity,
    /// Kill rewards collected so far. Only ever increases.
    pub money: u32,
    /// Living units in spawn order.
    pub units: Vec<Unit>,
}

impl Faction {
    /// Create a faction with a castle at `castle` and no units.
    #[must_use]
    pub fn new(side: Side, castle: Location, castle_health: i32) -> Self {
        Self {
            side,
            castle: Entity::new(castle_health, castle),
            money: 0,
            units: Vec::new(),
        }
    }

    /// Add a fresh unit standing on the castle.
    pub fn spawn_unit(&mut self, id: UnitId, health: i32) {
        self.units.push(Unit {
            id,
            entity: Entity::new(health, self.castle.location),
        });
    }

    /// Look up a unit by id.
    #[must_use]
    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.id == id)
    }

    /// Look up a unit by id for mutation.
    #[must_use]
    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.iter_mut().find(|unit| unit.id == id)
    }

    /// This faction's units as targeting candidates, in spawn order.
    pub fn unit_candidates(&self) -> impl Iterator<Item = Candidate> + '_ {
        let side = self.side;
        self.units.iter().map(move |unit| Candidate {
            target: Target::Unit(side, unit.id),
            location: unit.entity.location,
        })
    }

    /// The castle as a targeting candidate.
    #[must_use]
    pub const fn castle_candidate(&self) -> Candidate {
        Candidate {
            target: Target::Castle(self.side),
            location: self.castle.location,
        }
    }

    /// Drop every unit whose health has run out, keeping spawn order.
    ///
    /// Returns how many units were removed.
    pub fn remove_casualties(&mut self) -> u32 {
        let before = self.units.len();
        self.units.retain(|unit| !unit.entity.is_dead());
        u32::try_from(before - self.units.len()).unwrap_or(u32::MAX)
    }

    /// Credit kill rewards.
    pub fn earn(&mut self, amount: u32) {
        self.money = self.money.saturating_add(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faction_with_units(count: u32) -> Faction {
        let mut faction = Faction::new(Side::Player, Location::new(0, 0), 10);
        for id in 0..count {
            faction.spawn_unit(UnitId(id), 1);
        }
        faction
    }

    #[test]
    fn test_faction_creation() {
        let faction = Faction::new(Side::Enemy, Location::new(9, 3), 10);
        assert_eq!(faction.castle.location, Location::new(9, 3));
        assert_eq!(faction.castle.health, 10);
        assert_eq!(faction.money, 0);
        assert!(faction.units.is_empty());
    }

    #[test]
    fn test_spawn_unit_at_castle() {
        let faction = faction_with_units(2);
        assert_eq!(faction.units.len(), 2);
        for unit in &faction.units {
            assert_eq!(unit.entity.location, faction.castle.location);
            assert_eq!(unit.entity.health, 1);
            assert_eq!(unit.entity.max_health, 1);
        }
    }

    #[test]
    fn test_unit_lookup() {
        let mut faction = faction_with_units(3);
        assert_eq!(faction.unit(UnitId(1)).map(|u| u.id), Some(UnitId(1)));
        assert!(faction.unit(UnitId(7)).is_none());

        if let Some(unit) = faction.unit_mut(UnitId(2)) {
            unit.entity.health = 0;
        }
        assert!(faction.unit(UnitId(2)).unwrap().entity.is_dead());
    }

    #[test]
    fn test_remove_casualties_keeps_order() {
        let mut faction = faction_with_units(5);
        faction.units[1].entity.health = 0;
        faction.units[3].entity.health = -2;

        assert_eq!(faction.remove_casualties(), 2);
        let ids: Vec<_> = faction.units.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![UnitId(0), UnitId(2), UnitId(4)]);
    }

    #[test]
    fn test_remove_casualties_none_dead() {
        let mut faction = faction_with_units(3);
        assert_eq!(faction.remove_casualties(), 0);
        assert_eq!(faction.units.len(), 3);
    }

    #[test]
    fn test_candidates_follow_spawn_order() {
        let faction = faction_with_units(3);
        let targets: Vec<_> = faction.unit_candidates().map(|c| c.target).collect();
        assert_eq!(
            targets,
            vec![
                Target::Unit(Side::Player, UnitId(0)),
                Target::Unit(Side::Player, UnitId(1)),
                Target::Unit(Side::Player, UnitId(2)),
            ]
        );
        assert_eq!(faction.castle_candidate().target, Target::Castle(Side::Player));
    }

    #[test]
    fn test_earn_saturates() {
        let mut faction = faction_with_units(0);
        faction.earn(5);
        assert_eq!(faction.money, 5);
        faction.money = u32::MAX - 1;
        faction.earn(5);
        assert_eq!(faction.money, u32::MAX);
    }
}
