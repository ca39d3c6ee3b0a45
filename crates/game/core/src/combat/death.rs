//! Hit point loss and death handling.

use tracing::debug;

use crate::error::InvariantViolation;
use crate::state::{Color, DeathKind, EntityId, GameStatus, World, capitalize};

/// Summary of a fighter that just died.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Death {
    pub id: EntityId,
    pub kind: DeathKind,
    /// Experience paid to the player, 0 when the player died.
    pub xp_awarded: i32,
}

/// Subtracts `damage` (if positive) and runs the death routine at hp <= 0.
///
/// Returns the death, if this call caused one.
pub fn take_damage(
    world: &mut World,
    id: EntityId,
    damage: i32,
) -> Result<Option<Death>, InvariantViolation> {
    let fighter = world.fighter_mut(id)?;
    if damage > 0 {
        fighter.hp -= damage;
    }
    if fighter.hp > 0 {
        return Ok(None);
    }
    if id.is_player() && world.status == GameStatus::Dead {
        return Ok(None);
    }
    kill(world, id).map(Some)
}

/// Runs the death routine selected by the fighter's [`DeathKind`].
pub fn kill(world: &mut World, id: EntityId) -> Result<Death, InvariantViolation> {
    let (kind, xp) = {
        let fighter = world.fighter(id)?;
        (fighter.death, fighter.xp)
    };

    match kind {
        DeathKind::Player => {
            world.message("You died!", Color::Red);
            world.status = GameStatus::Dead;
            world.require_mut(id)?.become_corpse();
        }
        DeathKind::Monster => {
            let entity = world.require_mut(id)?;
            let name = std::mem::take(&mut entity.name);
            entity.become_corpse();
            entity.blocks = false;
            entity.fighter = None;
            entity.ai = None;
            entity.name = format!("remains of {name}");
            world.message(
                format!(
                    "{} is dead! You gain {xp} experience points.",
                    capitalize(&name)
                ),
                Color::Sky,
            );
            world.timers.retain_entities(|entity| entity != id);
        }
    }

    let xp_awarded = if id.is_player() {
        0
    } else {
        if let Some(player) = world.player_mut().fighter.as_mut() {
            player.xp += xp;
        }
        xp
    };

    debug!(target: "rogue::combat", entity = %id, ?kind, xp_awarded, "fighter died");
    Ok(Death {
        id,
        kind,
        xp_awarded,
    })
}
