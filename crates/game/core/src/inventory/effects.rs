//! Use-effects of consumable items.
//!
//! Every effect reports whether it actually happened. A cancelled effect
//! (nothing to do, no target, player aborted the targeting) leaves the item
//! in the inventory and does not spend the turn.

use crate::combat::take_damage;
use crate::config::GameConfig;
use crate::env::PlayerPrompt;
use crate::error::InvariantViolation;
use crate::state::{Color, EntityId, Position, UseEffect, World};
use crate::stats;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectOutcome {
    Applied,
    Cancelled,
}

pub fn apply_effect(
    effect: UseEffect,
    world: &mut World,
    config: &GameConfig,
    prompt: &mut (impl PlayerPrompt + ?Sized),
    user: EntityId,
) -> Result<EffectOutcome, InvariantViolation> {
    match effect {
        UseEffect::Heal => heal(world, config, user),
        UseEffect::Lightning => lightning(world, config, user),
        UseEffect::Confuse => confuse(world, config, prompt, user),
        UseEffect::Fireball => fireball(world, config, prompt),
        UseEffect::Eat => eat(world, config),
    }
}

fn heal(world: &mut World, config: &GameConfig, user: EntityId) -> Result<EffectOutcome, InvariantViolation> {
    if stats::missing_hp(world, user)? == 0 {
        world.message("You are already at full health.", Color::Red);
        return Ok(EffectOutcome::Cancelled);
    }
    world.message("Your wounds start to feel better!", Color::LightViolet);
    stats::heal(world, user, config.spells.heal_amount)?;
    Ok(EffectOutcome::Applied)
}

fn lightning(world: &mut World, config: &GameConfig, user: EntityId) -> Result<EffectOutcome, InvariantViolation> {
    let origin = world.require(user)?.position;
    let Some(target) = closest_monster(world, origin, config.spells.lightning_range) else {
        world.message("No enemy is close enough to strike.", Color::Red);
        return Ok(EffectOutcome::Cancelled);
    };

    let damage = config.spells.lightning_damage;
    let name = world.require(target)?.name.clone();
    world.message(
        format!("A lightning bolt strikes the {name} for {damage} hit points."),
        Color::LightBlue,
    );
    take_damage(world, target, damage)?;
    Ok(EffectOutcome::Applied)
}

fn confuse(
    world: &mut World,
    config: &GameConfig,
    prompt: &mut (impl PlayerPrompt + ?Sized),
    user: EntityId,
) -> Result<EffectOutcome, InvariantViolation> {
    world.message(
        "Choose an enemy to confuse, or cancel.",
        Color::LightCyan,
    );
    let Some(target) = target_monster(world, prompt, user, Some(config.spells.confuse_range)) else {
        return Ok(EffectOutcome::Cancelled);
    };

    let entity = world.require_mut(target)?;
    let name = entity.name.clone();
    if let Some(ai) = entity.ai.as_mut() {
        ai.confuse(config.spells.confuse_turns);
    }
    world.message(
        format!("The eyes of the {name} look vacant, as it starts to stumble around."),
        Color::LightGreen,
    );
    Ok(EffectOutcome::Applied)
}

fn fireball(
    world: &mut World,
    config: &GameConfig,
    prompt: &mut (impl PlayerPrompt + ?Sized),
) -> Result<EffectOutcome, InvariantViolation> {
    world.message(
        "Choose a target tile for the fireball, or cancel.",
        Color::LightCyan,
    );
    let Some(center) = target_tile(world, prompt, None) else {
        return Ok(EffectOutcome::Cancelled);
    };

    let radius = config.spells.fireball_radius;
    let damage = config.spells.fireball_damage;
    world.message(
        format!("The fireball explodes, burning everything within {radius} tiles!"),
        Color::Orange,
    );

    // The caster is not spared.
    let burned: Vec<_> = world
        .entities()
        .filter(|e| e.fighter.is_some() && e.position.distance(center) <= radius)
        .map(|e| (e.id, e.name.clone()))
        .collect();
    for (id, name) in burned {
        world.message(
            format!("The {name} gets burned for {damage} hit points."),
            Color::Orange,
        );
        take_damage(world, id, damage)?;
    }
    Ok(EffectOutcome::Applied)
}

fn eat(world: &mut World, config: &GameConfig) -> Result<EffectOutcome, InvariantViolation> {
    if world.hunger.is_full() {
        world.message("You are not hungry.", Color::Red);
        return Ok(EffectOutcome::Cancelled);
    }
    let hunger = &mut world.hunger;
    hunger.satiety = (hunger.satiety + config.hunger.ration_value).min(hunger.max);
    world.message("That hit the spot. You feel satiated.", Color::Green);
    Ok(EffectOutcome::Applied)
}

/// Closest living monster in view within `max_range` of `origin`.
pub fn closest_monster(world: &World, origin: Position, max_range: f64) -> Option<EntityId> {
    world
        .entities()
        .filter(|e| !e.is_player() && e.fighter.is_some() && world.is_visible(e.position))
        .map(|e| (e.id, origin.distance(e.position)))
        .filter(|(_, dist)| *dist <= max_range)
        .fold(None, |best: Option<(EntityId, f64)>, (id, dist)| match best {
            Some((_, best_dist)) if best_dist <= dist => best,
            _ => Some((id, dist)),
        })
        .map(|(id, _)| id)
}

/// Asks the player for a tile in view and, if given, within range of the
/// player. Invalid answers are asked again; `None` means aborted.
fn target_tile(
    world: &World,
    prompt: &mut (impl PlayerPrompt + ?Sized),
    max_range: Option<f64>,
) -> Option<Position> {
    let origin = world.player().position;
    loop {
        let tile = prompt.select_tile(world, max_range)?;
        let in_range = max_range.is_none_or(|range| origin.distance(tile) <= range);
        if world.is_visible(tile) && in_range {
            return Some(tile);
        }
    }
}

/// Like [`target_tile`], but keeps asking until the tile holds a monster.
fn target_monster(
    world: &World,
    prompt: &mut (impl PlayerPrompt + ?Sized),
    user: EntityId,
    max_range: Option<f64>,
) -> Option<EntityId> {
    loop {
        let tile = target_tile(world, prompt, max_range)?;
        let monster = world
            .entities()
            .find(|e| e.position == tile && e.fighter.is_some() && e.id != user);
        if let Some(monster) = monster {
            return Some(monster.id);
        }
    }
}
