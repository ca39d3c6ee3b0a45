//! Combat resolution system.
//!
//! The pure pieces (`hit`, `damage`, `result`) decide what happens from
//! effective stats and rolls. [`attack`] applies the outcome to the world:
//! messages, hit point loss, death, and the noise a melee makes.
//!
//! # Core Functions
//!
//! - `resolve_attack`: Complete attack resolution (hit check + damage)
//! - `calculate_hit_chance`: Hit chance adjusted by critical stats
//! - `roll_damage`: Damage with critical redraw and floor policy
//! - `take_damage`: HP reduction and death routine

pub mod damage;
pub mod death;
pub mod hit;
pub mod result;

pub use damage::{DamageRoll, apply_floor, raw_damage, roll_damage};
pub use death::{Death, kill, take_damage};
pub use hit::{calculate_hit_chance, check_hit};
pub use result::{AttackOutcome, resolve_attack};

use tracing::trace;

use crate::ai::sound;
use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::error::InvariantViolation;
use crate::state::{Color, EntityId, World, capitalize};
use crate::stats::effective_stats;

/// Melee attack of `attacker` against `defender`.
///
/// Every outcome posts a distinct message. Afterwards the clash may be heard
/// by nearby monsters.
pub fn attack(
    world: &mut World,
    config: &GameConfig,
    rng: &mut (impl RngOracle + ?Sized),
    attacker: EntityId,
    defender: EntityId,
) -> Result<AttackOutcome, InvariantViolation> {
    let attacker_stats = effective_stats(world, attacker)?;
    let defender_stats = effective_stats(world, defender)?;
    let outcome = resolve_attack(
        &attacker_stats,
        &defender_stats,
        config.combat.crit_chance,
        rng,
    );

    let attacker_name = capitalize(&world.require(attacker)?.name);
    let defender_name = world.require(defender)?.name.clone();

    trace!(
        target: "rogue::combat",
        attacker = %attacker,
        defender = %defender,
        ?outcome,
        "attack resolved"
    );

    match outcome {
        AttackOutcome::Miss => {
            world.message(
                format!("{attacker_name} attacks {defender_name} but misses."),
                Color::LightGray,
            );
        }
        AttackOutcome::Hit {
            damage,
            critical: true,
        } => {
            world.message(
                format!("{attacker_name} scores a critical hit for {damage} damage!"),
                Color::Yellow,
            );
            take_damage(world, defender, damage)?;
        }
        AttackOutcome::Hit { damage, .. } if damage > 0 => {
            let color = if attacker.is_player() {
                Color::White
            } else {
                Color::Orange
            };
            world.message(
                format!("{attacker_name} attacks {defender_name} for {damage} hit points."),
                color,
            );
            take_damage(world, defender, damage)?;
        }
        AttackOutcome::Hit { .. } => {
            world.message(
                format!("{attacker_name} attacks {defender_name} but it has no effect!"),
                Color::DarkGray,
            );
        }
    }

    sound::on_melee(world, config, rng, attacker);
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Position, Role};
    use crate::testing::{ScriptedRng, arena, spawn_orc};

    fn quiet() -> GameConfig {
        let mut config = GameConfig::default();
        config.combat.sound_chance = 0;
        config
    }

    #[test]
    fn miss_never_changes_hp() {
        let mut world = arena();
        let orc = spawn_orc(&mut world, Position::new(6, 5));
        let mut rng = ScriptedRng::new([100]);

        let outcome = attack(&mut world, &quiet(), &mut rng, EntityId::PLAYER, orc).unwrap();
        assert_eq!(outcome, AttackOutcome::Miss);
        assert_eq!(world.fighter(orc).unwrap().hp, 20);
        assert!(world.messages.contains("Player attacks orc but misses."));
    }

    #[test]
    fn killing_blow_leaves_a_corpse() {
        let mut world = arena();
        let orc = spawn_orc(&mut world, Position::new(6, 5));
        world.fighter_mut(EntityId::PLAYER).unwrap().base_power = 12;
        // hit, power roll 100 (no crit), defense roll 100
        let mut rng = ScriptedRng::new([1, 100, 100]);

        let outcome = attack(&mut world, &quiet(), &mut rng, EntityId::PLAYER, orc).unwrap();
        // 6 + 12 - 0 = 18
        assert_eq!(outcome.damage(), 18);
        assert_eq!(world.entity(orc).unwrap().role(), Role::Monster);

        let mut rng = ScriptedRng::new([1, 100, 100]);
        attack(&mut world, &quiet(), &mut rng, EntityId::PLAYER, orc).unwrap();
        assert_eq!(world.entity(orc).unwrap().role(), Role::Corpse);
    }

    #[test]
    fn no_effect_message_for_zero_damage() {
        let mut world = arena();
        let orc = spawn_orc(&mut world, Position::new(6, 5));
        world.fighter_mut(orc).unwrap().base_defense = 10;
        // hit, power 50, defense 150, glance 8 (> 1)
        let mut rng = ScriptedRng::new([1, 50, 150, 8]);

        let outcome = attack(&mut world, &quiet(), &mut rng, EntityId::PLAYER, orc).unwrap();
        assert_eq!(outcome.damage(), 0);
        assert!(world.messages.contains("but it has no effect!"));
    }
}
