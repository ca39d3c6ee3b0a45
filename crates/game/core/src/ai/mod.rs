//! Monster perception and behaviour.
//!
//! Each monster runs a small state machine ([`AiMode`]):
//!
//! ```text
//! Dormant --sees player--> Engaged --loses sight--> Alerted --arrives--> Dormant
//!                             ^                        |
//!                             +------sees player-------+
//! ```
//!
//! Sight is "the monster stands in the player's field of view". Confusion
//! overrides all of the above until it wears off, then the previous mode
//! resumes. Sounds (see [`sound`]) push dormant monsters into Alerted.

pub mod movement;
pub mod sound;

use tracing::debug;

use crate::combat;
use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::error::InvariantViolation;
use crate::state::{Ai, AiMode, Color, EntityId, World};
use crate::timers::refresh_alert;

/// Runs one AI step for `id`. Entities without AI are skipped.
pub fn take_turn(
    world: &mut World,
    config: &GameConfig,
    rng: &mut (impl RngOracle + ?Sized),
    id: EntityId,
) -> Result<(), InvariantViolation> {
    let Some(ai) = world.require(id)?.ai.clone() else {
        return Ok(());
    };

    if let AiMode::Confused {
        restore,
        turns_left,
    } = ai.mode
    {
        return confused_turn(world, rng, id, *restore, turns_left);
    }

    let ai = perceive(world, config, rng, id, ai)?;
    let mode = ai.mode.clone();
    set_ai(world, id, ai)?;

    match mode {
        AiMode::Engaged => engaged_turn(world, config, rng, id),
        AiMode::Alerted => alerted_turn(world, id),
        _ => {
            movement::wander(world, rng, id);
            Ok(())
        }
    }
}

/// Updates the mode from what the monster can currently see.
fn perceive(
    world: &mut World,
    config: &GameConfig,
    rng: &mut (impl RngOracle + ?Sized),
    id: EntityId,
    mut ai: Ai,
) -> Result<Ai, InvariantViolation> {
    let position = world.require(id)?.position;
    let player = world.player().position;
    let before = ai.mode.label();

    if world.is_visible(position) {
        ai.mode = AiMode::Engaged;
        ai.remembered = Some(player);
    } else if ai.mode == AiMode::Engaged {
        if ai.remembered.is_some() {
            ai.mode = AiMode::Alerted;
            refresh_alert(world, config, rng, id);
        } else {
            ai.mode = AiMode::Dormant;
        }
    }

    if before != ai.mode.label() {
        debug!(target: "rogue::ai", entity = %id, from = before, to = ai.mode.label(), "ai transition");
    }
    Ok(ai)
}

fn engaged_turn(
    world: &mut World,
    config: &GameConfig,
    rng: &mut (impl RngOracle + ?Sized),
    id: EntityId,
) -> Result<(), InvariantViolation> {
    let position = world.require(id)?.position;
    let player = world.player().position;

    if position.chebyshev(player) >= 2 {
        movement::step_towards(world, id, player);
    } else if world.is_player_alive() {
        combat::attack(world, config, rng, id, EntityId::PLAYER)?;
    }
    Ok(())
}

fn alerted_turn(world: &mut World, id: EntityId) -> Result<(), InvariantViolation> {
    let entity = world.require(id)?;
    let position = entity.position;
    let Some(target) = entity.ai.as_ref().and_then(|ai| ai.remembered) else {
        return set_mode(world, id, AiMode::Dormant);
    };

    if position != target {
        movement::step_towards(world, id, target);
    }
    if world.require(id)?.position == target {
        debug!(target: "rogue::ai", entity = %id, %target, "reached alert location");
        if let Some(ai) = world.require_mut(id)?.ai.as_mut() {
            ai.remembered = None;
            ai.mode = AiMode::Dormant;
        }
    }
    Ok(())
}

fn confused_turn(
    world: &mut World,
    rng: &mut (impl RngOracle + ?Sized),
    id: EntityId,
    restore: AiMode,
    turns_left: u32,
) -> Result<(), InvariantViolation> {
    if turns_left > 0 {
        movement::stumble(world, rng, id);
        return set_mode(
            world,
            id,
            AiMode::Confused {
                restore: Box::new(restore),
                turns_left: turns_left - 1,
            },
        );
    }

    let name = world.require(id)?.name.clone();
    set_mode(world, id, restore)?;
    world.message(format!("The {name} is no longer confused!"), Color::Red);
    Ok(())
}

fn set_ai(world: &mut World, id: EntityId, ai: Ai) -> Result<(), InvariantViolation> {
    let entity = world.require_mut(id)?;
    // The monster may have died during its own turn.
    if entity.ai.is_some() {
        entity.ai = Some(ai);
    }
    Ok(())
}

fn set_mode(world: &mut World, id: EntityId, mode: AiMode) -> Result<(), InvariantViolation> {
    if let Some(ai) = world.require_mut(id)?.ai.as_mut() {
        ai.mode = mode;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::VisibleSet;
    use crate::state::{Position, TimerEffect};
    use crate::testing::{ScriptedRng, arena, spawn_orc};

    fn quiet() -> GameConfig {
        let mut config = GameConfig::default();
        config.combat.sound_chance = 0;
        config
    }

    fn mode(world: &World, id: EntityId) -> AiMode {
        world.entity(id).unwrap().ai.as_ref().unwrap().mode.clone()
    }

    #[test]
    fn dormant_monster_engages_on_sight_same_turn() {
        let mut world = arena();
        let orc = spawn_orc(&mut world, Position::new(9, 5));
        world.set_visible(VisibleSet::from_iter([Position::new(9, 5)]));

        take_turn(&mut world, &quiet(), &mut ScriptedRng::default(), orc).unwrap();
        assert_eq!(mode(&world, orc), AiMode::Engaged);
        assert_eq!(world.entity(orc).unwrap().position, Position::new(8, 5));
    }

    #[test]
    fn engaged_monster_losing_sight_becomes_alerted() {
        let config = quiet();
        let mut world = arena();
        let orc = spawn_orc(&mut world, Position::new(9, 5));
        world.set_visible(VisibleSet::from_iter([Position::new(9, 5)]));
        take_turn(&mut world, &config, &mut ScriptedRng::default(), orc).unwrap();

        world.set_visible(VisibleSet::new());
        take_turn(&mut world, &config, &mut ScriptedRng::default(), orc).unwrap();
        assert_eq!(mode(&world, orc), AiMode::Alerted);
        assert!(world.timers.find(orc, TimerEffect::ClearAlert).is_some());
    }

    #[test]
    fn alerted_monster_reaching_memory_goes_dormant() {
        let mut world = arena();
        let orc = spawn_orc(&mut world, Position::new(9, 9));
        {
            let ai = world.entity_mut(orc).unwrap().ai.as_mut().unwrap();
            ai.mode = AiMode::Alerted;
            ai.remembered = Some(Position::new(10, 10));
        }
        take_turn(&mut world, &quiet(), &mut ScriptedRng::default(), orc).unwrap();
        assert_eq!(world.entity(orc).unwrap().position, Position::new(10, 10));
        assert_eq!(mode(&world, orc), AiMode::Dormant);
    }

    #[test]
    fn adjacent_engaged_monster_attacks() {
        let mut world = arena();
        let orc = spawn_orc(&mut world, Position::new(6, 6));
        world.set_visible(VisibleSet::from_iter([Position::new(6, 6)]));
        // hit roll 1, power 100, defense 100 -> 2 + 4 = 6
        let mut rng = ScriptedRng::new([1, 100, 100]);
        take_turn(&mut world, &quiet(), &mut rng, orc).unwrap();
        assert_eq!(world.fighter(EntityId::PLAYER).unwrap().hp, 94);
        assert_eq!(world.entity(orc).unwrap().position, Position::new(6, 6));
    }

    #[test]
    fn noisy_attacker_still_chases_after_losing_sight() {
        let mut config = GameConfig::default();
        config.combat.sound_chance = 100;
        let mut world = arena();
        let orc = spawn_orc(&mut world, Position::new(6, 5));
        world.set_visible(VisibleSet::from_iter([Position::new(6, 5)]));

        // hit, power, defense, then the clash is heard
        let mut rng = ScriptedRng::new([1, 100, 100, 1]);
        take_turn(&mut world, &config, &mut rng, orc).unwrap();
        let ai = world.entity(orc).unwrap().ai.clone().unwrap();
        assert_eq!(ai.remembered, Some(Position::new(5, 5)));

        world.set_visible(VisibleSet::new());
        take_turn(&mut world, &config, &mut ScriptedRng::default(), orc).unwrap();
        let ai = world.entity(orc).unwrap().ai.clone().unwrap();
        assert_eq!(ai.mode, AiMode::Alerted);
        assert_eq!(ai.remembered, Some(Position::new(5, 5)));
    }

    #[test]
    fn confusion_wears_off_and_restores_mode() {
        let mut world = arena();
        let orc = spawn_orc(&mut world, Position::new(9, 9));
        world
            .entity_mut(orc)
            .unwrap()
            .ai
            .as_mut()
            .unwrap()
            .confuse(1);

        take_turn(&mut world, &quiet(), &mut ScriptedRng::default(), orc).unwrap();
        assert!(mode(&world, orc).is_confused());
        take_turn(&mut world, &quiet(), &mut ScriptedRng::default(), orc).unwrap();
        assert_eq!(mode(&world, orc), AiMode::Dormant);
        assert!(world.messages.contains("The orc is no longer confused!"));
    }
}
