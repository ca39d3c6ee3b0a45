//! Noise propagation.
//!
//! A sound has an origin and a radius rolled from its intensity. Every live
//! monster inside the square box around the origin (edges included) turns
//! its attention to the origin and gets an alert timer. Engaged monsters
//! already track the player and keep their memory; the monster that made the
//! noise does not hear itself.

use tracing::debug;

use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::state::{AiMode, EntityId, Position, World};
use crate::timers::refresh_alert;

/// Rolls whether a melee clash started by `attacker` is loud enough to be
/// heard. The sound comes from the attacker's tile.
pub fn on_melee(
    world: &mut World,
    config: &GameConfig,
    rng: &mut (impl RngOracle + ?Sized),
    attacker: EntityId,
) -> usize {
    if rng.roll_d100() > config.combat.sound_chance {
        return 0;
    }
    let Some(origin) = world.entity(attacker).map(|e| e.position) else {
        return 0;
    };
    emit(
        world,
        config,
        rng,
        origin,
        config.combat.sound_intensity,
        Some(attacker),
    )
}

/// Broadcasts a sound and returns how many monsters heard it.
///
/// `source` is the entity making the noise, if any; it is never a listener.
pub fn emit(
    world: &mut World,
    config: &GameConfig,
    rng: &mut (impl RngOracle + ?Sized),
    origin: Position,
    intensity: i32,
    source: Option<EntityId>,
) -> usize {
    let intensity = intensity.max(0);
    let radius = rng.range(intensity, intensity * 2);

    let listeners: Vec<_> = world
        .entities()
        .filter(|e| Some(e.id) != source)
        .filter(|e| e.is_live_monster() && e.position.chebyshev(origin) <= radius)
        .map(|e| e.id)
        .collect();

    for &id in &listeners {
        if let Some(ai) = world.entity_mut(id).and_then(|e| e.ai.as_mut()) {
            match ai.mode {
                AiMode::Engaged => {}
                AiMode::Dormant => {
                    ai.remembered = Some(origin);
                    ai.mode = AiMode::Alerted;
                }
                _ => ai.remembered = Some(origin),
            }
        }
        refresh_alert(world, config, rng, id);
    }

    debug!(
        target: "rogue::ai",
        %origin,
        radius,
        heard = listeners.len(),
        "sound emitted"
    );
    listeners.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TimerEffect;
    use crate::testing::{ScriptedRng, arena, spawn_orc};

    #[test]
    fn box_scan_is_inclusive() {
        let config = GameConfig::default();
        let mut world = arena();
        let near = spawn_orc(&mut world, Position::new(9, 9));
        let edge = spawn_orc(&mut world, Position::new(1, 9));
        let far = spawn_orc(&mut world, Position::new(15, 15));

        // radius 4, then one alert roll per listener
        let mut rng = ScriptedRng::new([4, 8, 8]);
        let heard = emit(&mut world, &config, &mut rng, Position::new(5, 5), 4, None);
        assert_eq!(heard, 2);

        for id in [near, edge] {
            let ai = world.entity(id).unwrap().ai.as_ref().unwrap();
            assert_eq!(ai.mode, AiMode::Alerted);
            assert_eq!(ai.remembered, Some(Position::new(5, 5)));
            assert!(world.timers.find(id, TimerEffect::ClearAlert).is_some());
        }
        let ai = world.entity(far).unwrap().ai.as_ref().unwrap();
        assert_eq!(ai.mode, AiMode::Dormant);
    }

    #[test]
    fn quiet_clash_alerts_nobody() {
        let mut config = GameConfig::default();
        config.combat.sound_chance = 30;
        let mut world = arena();
        spawn_orc(&mut world, Position::new(6, 6));
        let mut rng = ScriptedRng::new([31]);
        assert_eq!(on_melee(&mut world, &config, &mut rng, EntityId::PLAYER), 0);
    }

    #[test]
    fn attacker_does_not_hear_its_own_clash() {
        let mut config = GameConfig::default();
        config.combat.sound_chance = 100;
        let mut world = arena();
        let attacker = spawn_orc(&mut world, Position::new(6, 5));
        let bystander = spawn_orc(&mut world, Position::new(8, 5));
        {
            let ai = world.entity_mut(attacker).unwrap().ai.as_mut().unwrap();
            ai.mode = AiMode::Engaged;
            ai.remembered = Some(Position::new(5, 5));
        }

        let heard = on_melee(&mut world, &config, &mut ScriptedRng::default(), attacker);
        assert_eq!(heard, 1);
        let ai = world.entity(attacker).unwrap().ai.as_ref().unwrap();
        assert_eq!(ai.remembered, Some(Position::new(5, 5)));
        assert!(world.timers.find(attacker, TimerEffect::ClearAlert).is_none());
        let ai = world.entity(bystander).unwrap().ai.as_ref().unwrap();
        assert_eq!(ai.remembered, Some(Position::new(6, 5)));
    }

    #[test]
    fn engaged_listener_keeps_tracking_the_player() {
        let config = GameConfig::default();
        let mut world = arena();
        let hunter = spawn_orc(&mut world, Position::new(7, 7));
        {
            let ai = world.entity_mut(hunter).unwrap().ai.as_mut().unwrap();
            ai.mode = AiMode::Engaged;
            ai.remembered = Some(Position::new(5, 5));
        }

        emit(&mut world, &config, &mut ScriptedRng::default(), Position::new(9, 9), 4, None);
        let ai = world.entity(hunter).unwrap().ai.as_ref().unwrap();
        assert_eq!(ai.mode, AiMode::Engaged);
        assert_eq!(ai.remembered, Some(Position::new(5, 5)));
    }
}
