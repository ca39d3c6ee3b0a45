//! Command selection for the autopilot.

use rogue_core::stats;
use rogue_core::{
    Command, EntityId, GameConfig, GameStatus, InvariantViolation, PlayerAction, Position, Role,
    TurnReport, UseEffect, World,
};
use tracing::trace;

use super::path::{direction_between, first_step};

/// Potions are drunk below this share of max hit points.
const LOW_HP_PERCENT: i32 = 35;
/// Monsters with at least this many hit points are worth a scroll.
const TOUGH_MONSTER_HP: i32 = 25;
/// Commands that did not take a turn in a row before the pilot just waits.
const STALL_LIMIT: u32 = 2;

/// Greedy player: survive, fight what is in view, loot, explore, descend.
#[derive(Debug, Default)]
pub struct Autopilot {
    stalled: u32,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records how the last command played out.
    pub fn observe(&mut self, report: &TurnReport) {
        self.stalled = match report.action {
            PlayerAction::DidntTakeTurn => self.stalled + 1,
            PlayerAction::TookTurn | PlayerAction::Exit => 0,
        };
    }

    pub fn next_command(
        &mut self,
        world: &World,
        config: &GameConfig,
    ) -> Result<Command, InvariantViolation> {
        if world.status == GameStatus::Dead {
            return Ok(Command::Quit);
        }
        if self.stalled >= STALL_LIMIT {
            self.stalled = 0;
            return Ok(Command::Wait);
        }

        let command = self.choose(world, config)?;
        trace!(target: "rogue::client", ?command, "autopilot");
        Ok(command)
    }

    fn choose(&self, world: &World, config: &GameConfig) -> Result<Command, InvariantViolation> {
        let here = world.player().position;

        if let Some(command) = self.tend_to_self(world, config)? {
            return Ok(command);
        }

        let monsters = visible_monsters(world, here);
        if let Some(&(_, at)) = monsters.iter().find(|(_, at)| here.chebyshev(*at) == 1) {
            if let Some(direction) = direction_between(here, at) {
                return Ok(Command::Move(direction));
            }
        }
        if let Some(index) = scroll_for(world, config, &monsters)? {
            return Ok(Command::Use(index));
        }

        let pack_full = world
            .inventory(EntityId::PLAYER)
            .is_some_and(|inventory| inventory.is_full());
        if !pack_full && !world.items_at(here).is_empty() {
            return Ok(Command::PickUp);
        }

        if let Some(&(_, at)) = monsters.first() {
            if let Some(direction) = step_toward(world, here, |p| p == at) {
                return Ok(Command::Move(direction));
            }
        }

        if !pack_full {
            let loot: Vec<Position> = world
                .entities()
                .filter(|e| e.role() == Role::Item && world.is_visible(e.position))
                .map(|e| e.position)
                .collect();
            if let Some(direction) = step_toward(world, here, |p| loot.contains(&p)) {
                return Ok(Command::Move(direction));
            }
        }

        if let Some(direction) = step_toward(world, here, |p| {
            world.map.tile(p).is_some_and(|tile| !tile.explored && !tile.blocked)
        }) {
            return Ok(Command::Move(direction));
        }

        let stairs = world.require(world.stairs)?.position;
        if here == stairs {
            return Ok(Command::Descend);
        }
        Ok(step_toward(world, here, |p| p == stairs)
            .map(Command::Move)
            .unwrap_or(Command::Wait))
    }

    /// Healing, eating and putting on gear for empty slots.
    fn tend_to_self(
        &self,
        world: &World,
        config: &GameConfig,
    ) -> Result<Option<Command>, InvariantViolation> {
        let hp = world.fighter(EntityId::PLAYER)?.hp;
        let max_hp = stats::effective_stats(world, EntityId::PLAYER)?.max_hp;
        if hp * 100 < max_hp * LOW_HP_PERCENT {
            if let Some(index) = find_consumable(world, UseEffect::Heal) {
                return Ok(Some(Command::Use(index)));
            }
        }

        if world.hunger.satiety <= config.hunger.hungry_threshold {
            if let Some(index) = find_consumable(world, UseEffect::Eat) {
                return Ok(Some(Command::Use(index)));
            }
        }

        let Some(inventory) = world.inventory(EntityId::PLAYER) else {
            return Ok(None);
        };
        let spare = inventory.iter().position(|item| {
            item.equipment().is_some_and(|equipment| {
                !equipment.is_equipped && inventory.equipped_in_slot(equipment.slot).is_none()
            })
        });
        Ok(spare.map(Command::Use))
    }
}

/// Live monsters in view, nearest first.
pub(crate) fn visible_monsters(world: &World, from: Position) -> Vec<(EntityId, Position)> {
    let mut monsters: Vec<(EntityId, Position)> = world
        .entities()
        .filter(|e| e.is_live_monster() && world.is_visible(e.position))
        .map(|e| (e.id, e.position))
        .collect();
    monsters.sort_by(|a, b| from.distance(a.1).total_cmp(&from.distance(b.1)));
    monsters
}

fn find_consumable(world: &World, effect: UseEffect) -> Option<usize> {
    world.inventory(EntityId::PLAYER)?.iter().position(|item| {
        item.item
            .as_ref()
            .is_some_and(|item| item.effect == Some(effect))
    })
}

/// Lightning for a tough monster in range, otherwise confusion.
fn scroll_for(
    world: &World,
    config: &GameConfig,
    monsters: &[(EntityId, Position)],
) -> Result<Option<usize>, InvariantViolation> {
    let here = world.player().position;
    let Some(&(nearest, at)) = monsters.first() else {
        return Ok(None);
    };
    if world.fighter(nearest)?.hp < TOUGH_MONSTER_HP {
        return Ok(None);
    }

    let distance = here.distance(at);
    if distance <= config.spells.lightning_range {
        if let Some(index) = find_consumable(world, UseEffect::Lightning) {
            return Ok(Some(index));
        }
    }
    if distance <= config.spells.confuse_range {
        if let Some(index) = find_consumable(world, UseEffect::Confuse) {
            return Ok(Some(index));
        }
    }
    Ok(None)
}

fn step_toward(
    world: &World,
    from: Position,
    is_goal: impl Fn(Position) -> bool,
) -> Option<rogue_core::Direction> {
    first_step(&world.map, from, |p| !world.is_blocked(p), is_goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autopilot::testing::{arena, put_item, put_monster};
    use rogue_core::dungeon::templates;
    use rogue_core::{Direction, ItemKind, MonsterKind};

    #[test]
    fn attacks_an_adjacent_monster() {
        let (mut world, config) = arena();
        put_monster(&mut world, MonsterKind::Orc, Position::new(6, 5));

        let command = Autopilot::new().next_command(&world, &config).unwrap();
        assert_eq!(command, Command::Move(Direction::East));
    }

    #[test]
    fn drinks_a_potion_when_badly_hurt() {
        let (mut world, config) = arena();
        let index = put_item(&mut world, ItemKind::HealingPotion);
        world.fighter_mut(EntityId::PLAYER).unwrap().hp = 20;

        let command = Autopilot::new().next_command(&world, &config).unwrap();
        assert_eq!(command, Command::Use(index));
    }

    #[test]
    fn picks_up_what_lies_underfoot() {
        let (mut world, config) = arena();
        let id = world.allocate_entity_id();
        let here = world.player().position;
        world.spawn(templates::item(ItemKind::Ration, id, here));

        let command = Autopilot::new().next_command(&world, &config).unwrap();
        assert_eq!(command, Command::PickUp);
    }

    #[test]
    fn waits_after_repeated_free_commands() {
        let (world, config) = arena();
        let mut pilot = Autopilot::new();
        let stalled = TurnReport {
            action: PlayerAction::DidntTakeTurn,
            timers_fired: 0,
            levels_gained: 0,
            character: None,
        };
        pilot.observe(&stalled);
        pilot.observe(&stalled);
        assert_eq!(pilot.next_command(&world, &config).unwrap(), Command::Wait);
    }

    #[test]
    fn dead_player_quits() {
        let (mut world, config) = arena();
        world.status = GameStatus::Dead;
        assert_eq!(
            Autopilot::new().next_command(&world, &config).unwrap(),
            Command::Quit
        );
    }
}
