//! Stat aggregation.
//!
//! Effective combat stats are never stored. They are derived on demand as the
//! fighter's base values plus the summed bonuses of every equipped item in
//! the owner's inventory:
//!
//! ```text
//! effective = base + Σ equipped.bonus
//! ```
//!
//! Entities without an inventory contribute no bonus.

use crate::error::InvariantViolation;
use crate::state::{EntityId, Fighter, StatBonuses, World};

/// Snapshot of a fighter's effective stats at the moment of a query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectiveStats {
    pub power: i32,
    pub defense: i32,
    pub max_hp: i32,
    pub critical: i32,
    pub hit_chance: i32,
}

impl EffectiveStats {
    /// Combines base fighter stats with a bonus total.
    pub fn compose(fighter: &Fighter, bonus: StatBonuses) -> Self {
        Self {
            power: fighter.base_power + bonus.power,
            defense: fighter.base_defense + bonus.defense,
            max_hp: fighter.base_max_hp + bonus.max_hp,
            critical: fighter.base_critical + bonus.critical,
            hit_chance: fighter.base_hit_chance + bonus.hit_chance,
        }
    }
}

/// Effective stats of `id`.
pub fn effective_stats(world: &World, id: EntityId) -> Result<EffectiveStats, InvariantViolation> {
    let fighter = world.fighter(id)?;
    Ok(EffectiveStats::compose(fighter, world.equipment_bonuses(id)))
}

/// Restores up to `amount` hit points without exceeding effective max hp.
///
/// Returns the number of hit points actually restored.
pub fn heal(world: &mut World, id: EntityId, amount: i32) -> Result<i32, InvariantViolation> {
    let max_hp = effective_stats(world, id)?.max_hp;
    let fighter = world.fighter_mut(id)?;
    let before = fighter.hp;
    fighter.hp = (fighter.hp + amount.max(0)).min(max_hp);
    Ok((fighter.hp - before).max(0))
}

/// Hit points still missing from full health.
pub fn missing_hp(world: &World, id: EntityId) -> Result<i32, InvariantViolation> {
    let max_hp = effective_stats(world, id)?.max_hp;
    Ok((max_hp - world.fighter(id)?.hp).max(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{
        Color, DeathKind, Entity, Equipment, Hunger, Item, MessageLog, Position, Slot,
    };

    fn world_with_gear() -> World {
        let player = Entity::new(EntityId::PLAYER, Position::ORIGIN, '@', "player", Color::White)
            .with_fighter(Fighter::new(100, 0, 2, 0, DeathKind::Player));
        let mut world = World::new(player, MessageLog::default(), Hunger::new(100));

        let mut amulet = Equipment::new(Slot::Body, StatBonuses::NONE.max_hp(10).defense(1));
        amulet.is_equipped = true;
        let loose = Equipment::new(Slot::RightHand, StatBonuses::NONE.power(3));

        for (name, eq) in [("amulet", amulet), ("sword", loose)] {
            let id = world.allocate_entity_id();
            let item = Entity::new(id, Position::ORIGIN, '/', name, Color::Sky)
                .with_item(Item::equipment(eq));
            assert!(world.inventory_entry(EntityId::PLAYER).push(item).is_ok());
        }
        world
    }

    #[test]
    fn only_equipped_items_contribute() {
        let world = world_with_gear();
        let stats = effective_stats(&world, EntityId::PLAYER).unwrap();
        assert_eq!(stats.power, 2);
        assert_eq!(stats.defense, 1);
        assert_eq!(stats.max_hp, 110);
    }

    #[test]
    fn heal_caps_at_effective_max() {
        let mut world = world_with_gear();
        world.fighter_mut(EntityId::PLAYER).unwrap().hp = 95;
        let healed = heal(&mut world, EntityId::PLAYER, 40).unwrap();
        assert_eq!(healed, 15);
        assert_eq!(world.fighter(EntityId::PLAYER).unwrap().hp, 110);
        assert_eq!(missing_hp(&world, EntityId::PLAYER).unwrap(), 0);
    }
}
