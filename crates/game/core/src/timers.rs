//! Timer effects.
//!
//! The registry on [`World::timers`] only does bookkeeping. [`tick`] runs it
//! once and then applies the effect of every timer that fired, after all
//! counters have been updated.

use tracing::{debug, trace};

use crate::combat::take_damage;
use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::error::InvariantViolation;
use crate::state::{AiMode, Color, EntityId, Timer, TimerEffect, World};

pub const HUNGER_TIMER: &str = "hunger";
pub const ALERT_TIMER: &str = "alert";

/// Advances every timer by one turn and applies the effects of those that
/// expired.
pub fn tick(world: &mut World, config: &GameConfig) -> Result<Vec<Timer>, InvariantViolation> {
    let fired = world.timers.advance();
    for timer in &fired {
        trace!(target: "rogue::timers", id = timer.id.0, name = %timer.name, entity = %timer.entity, "timer fired");
        apply(world, config, timer)?;
    }
    Ok(fired)
}

fn apply(world: &mut World, config: &GameConfig, timer: &Timer) -> Result<(), InvariantViolation> {
    match timer.effect {
        TimerEffect::Hunger => hunger_pang(world, config, timer.entity),
        TimerEffect::ClearAlert => {
            clear_alert(world, timer.entity);
            Ok(())
        }
    }
}

/// Arms the repeating hunger clock on the player.
pub fn arm_hunger(world: &mut World, config: &GameConfig) {
    if world.timers.find(EntityId::PLAYER, TimerEffect::Hunger).is_none() {
        world.timers.arm(
            HUNGER_TIMER,
            config.hunger.interval,
            true,
            EntityId::PLAYER,
            TimerEffect::Hunger,
        );
    }
}

fn hunger_pang(world: &mut World, config: &GameConfig, entity: EntityId) -> Result<(), InvariantViolation> {
    // Only the player has a stomach.
    if !entity.is_player() || !world.is_player_alive() {
        return Ok(());
    }

    if world.hunger.satiety > 0 {
        world.hunger.satiety -= 1;
        let satiety = world.hunger.satiety;
        if satiety == 0 {
            world.message("You are starving!", Color::Red);
        } else if satiety == config.hunger.hungry_threshold {
            world.message("You are getting hungry.", Color::Yellow);
        }
        return Ok(());
    }

    world.message(
        format!(
            "Hunger gnaws at you for {} hit points.",
            config.hunger.starvation_damage
        ),
        Color::Red,
    );
    take_damage(world, entity, config.hunger.starvation_damage)?;
    Ok(())
}

/// Arms or extends the alert of a monster.
///
/// A fresh duration is rolled from the alert range; an unexpired alert is
/// never shortened by it.
pub fn refresh_alert(
    world: &mut World,
    config: &GameConfig,
    rng: &mut (impl RngOracle + ?Sized),
    entity: EntityId,
) {
    let turns = rng
        .range(config.alert.min_turns as i32, config.alert.max_turns as i32)
        .max(1) as u32;

    match world.timers.find_mut(entity, TimerEffect::ClearAlert) {
        Some(timer) if timer.remaining >= turns => {}
        Some(timer) => {
            timer.total_turns = turns;
            timer.remaining = turns;
        }
        None => {
            world
                .timers
                .arm(ALERT_TIMER, turns, false, entity, TimerEffect::ClearAlert);
        }
    }
}

/// The monster forgets where it was alerted to.
fn clear_alert(world: &mut World, entity: EntityId) {
    let Some(ai) = world.entity_mut(entity).and_then(|e| e.ai.as_mut()) else {
        return;
    };
    ai.remembered = None;
    match &mut ai.mode {
        AiMode::Alerted => ai.mode = AiMode::Dormant,
        AiMode::Confused { restore, .. } if **restore == AiMode::Alerted => {
            **restore = AiMode::Dormant;
        }
        _ => {}
    }
    debug!(target: "rogue::ai", %entity, "alert expired");
}
