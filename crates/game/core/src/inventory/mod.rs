//! Inventory and equipment transitions.
//!
//! Items live either in the level's entity list or in an inventory, never in
//! both. Equipment is an item whose "use" toggles whether it is worn; at most
//! one piece is worn per [`Slot`].

pub mod effects;

use tracing::debug;

pub use effects::{EffectOutcome, apply_effect, closest_monster};

use crate::config::GameConfig;
use crate::env::PlayerPrompt;
use crate::error::InvariantViolation;
use crate::state::{Color, Entity, EntityId, Slot, World};

/// Result of using an item from the inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UseOutcome {
    /// A consumable took effect and was used up.
    Consumed,
    /// An equipment piece was put on or taken off.
    Toggled,
    /// The effect was cancelled; the item stays in the inventory.
    Cancelled,
    /// The item has no use.
    Unusable,
}

impl UseOutcome {
    /// Whether the action spent the player's turn.
    pub fn took_turn(self) -> bool {
        matches!(self, UseOutcome::Consumed | UseOutcome::Toggled)
    }
}

/// Moves a ground item into `actor`'s inventory.
///
/// A full inventory only produces a message. Equipment whose slot is free is
/// put on straight away. Returns whether the item was taken.
pub fn pick_up(world: &mut World, actor: EntityId, item: EntityId) -> Result<bool, InvariantViolation> {
    let entity = world.require(item)?;
    if entity.item.is_none() {
        return Err(InvariantViolation::MissingCapability {
            entity: item,
            capability: "item",
        });
    }
    let name = entity.name.clone();

    if world.inventory(actor).is_some_and(|inv| inv.is_full()) {
        world.message(
            format!("Your inventory is full, you cannot carry {name}!"),
            Color::Yellow,
        );
        return Ok(false);
    }

    let entity = world
        .despawn(item)
        .ok_or(InvariantViolation::MissingEntity(item))?;
    let slot = entity.equipment().map(|eq| eq.slot);
    if world.inventory_entry(actor).push(entity).is_err() {
        // Capacity was checked above.
        return Ok(false);
    }
    world.message(format!("You picked up a {name}!"), Color::Green);
    debug!(target: "rogue::inventory", %actor, %item, "picked up");

    if let Some(slot) = slot {
        if equipped_in_slot(world, actor, slot).is_none() {
            let index = last_index(world, actor)?;
            equip(world, actor, index)?;
        }
    }
    Ok(true)
}

/// Uses the item at `index`: equipment toggles, consumables run their effect.
pub fn use_item(
    world: &mut World,
    config: &GameConfig,
    prompt: &mut (impl PlayerPrompt + ?Sized),
    actor: EntityId,
    index: usize,
) -> Result<UseOutcome, InvariantViolation> {
    let entity = item_at(world, actor, index)?;
    let id = entity.id;
    let name = entity.name.clone();
    let item = entity.item.unwrap_or_default();

    if item.equipment.is_some() {
        toggle_equip(world, actor, index)?;
        return Ok(UseOutcome::Toggled);
    }

    let Some(effect) = item.effect else {
        world.message(format!("The {name} cannot be used."), Color::White);
        return Ok(UseOutcome::Unusable);
    };

    match apply_effect(effect, world, config, prompt, actor)? {
        EffectOutcome::Cancelled => Ok(UseOutcome::Cancelled),
        EffectOutcome::Applied => {
            if let Some(inventory) = world.inventory_mut(actor) {
                if let Some(position) = inventory.position_of(id) {
                    inventory.remove(position);
                }
            }
            debug!(target: "rogue::inventory", %actor, item = %id, %effect, "consumed");
            Ok(UseOutcome::Consumed)
        }
    }
}

/// Drops the item at `index` at the actor's feet, taking it off first.
pub fn drop_item(world: &mut World, actor: EntityId, index: usize) -> Result<(), InvariantViolation> {
    item_at(world, actor, index)?;
    dequip(world, actor, index)?;

    let position = world.require(actor)?.position;
    let len = world.inventory(actor).map_or(0, |inv| inv.len());
    let mut entity = world
        .inventory_mut(actor)
        .and_then(|inv| inv.remove(index))
        .ok_or(InvariantViolation::NoSuchInventorySlot { index, len })?;
    entity.position = position;
    let name = entity.name.clone();
    world.spawn(entity);
    world.message(format!("You dropped a {name}."), Color::Yellow);
    Ok(())
}

/// Puts on the equipment at `index`, taking off whatever occupies its slot.
pub fn equip(world: &mut World, owner: EntityId, index: usize) -> Result<(), InvariantViolation> {
    let slot = equipment_slot(world, owner, index)?;
    match equipped_in_slot(world, owner, slot) {
        Some(current) if current != index => dequip(world, owner, current)?,
        _ => {}
    }

    let entity = item_at_mut(world, owner, index)?;
    let name = entity.name.clone();
    if let Some(eq) = entity.equipment_mut() {
        eq.is_equipped = true;
    }
    world.message(format!("Equipped {name} on {slot}."), Color::LightGreen);
    Ok(())
}

/// Takes off the equipment at `index`. No-op when it is not worn.
pub fn dequip(world: &mut World, owner: EntityId, index: usize) -> Result<(), InvariantViolation> {
    let entity = item_at_mut(world, owner, index)?;
    let name = entity.name.clone();
    let Some(eq) = entity.equipment_mut().filter(|eq| eq.is_equipped) else {
        return Ok(());
    };
    eq.is_equipped = false;
    let slot = eq.slot;
    world.message(format!("Removed {name} from {slot}."), Color::LightGreen);
    Ok(())
}

pub fn toggle_equip(world: &mut World, owner: EntityId, index: usize) -> Result<(), InvariantViolation> {
    let worn = item_at(world, owner, index)?
        .equipment()
        .is_some_and(|eq| eq.is_equipped);
    if worn {
        dequip(world, owner, index)
    } else {
        equip(world, owner, index)
    }
}

/// Index of the item `owner` wears in `slot`.
pub fn equipped_in_slot(world: &World, owner: EntityId, slot: Slot) -> Option<usize> {
    world.inventory(owner)?.equipped_in_slot(slot)
}

/// Menu labels for `owner`'s inventory, equipped items tagged with their slot.
pub fn menu_options(world: &World, owner: EntityId) -> Result<Vec<String>, InvariantViolation> {
    let options = match world.inventory(owner).filter(|inv| !inv.is_empty()) {
        None => vec!["Inventory is empty.".to_string()],
        Some(inventory) => inventory
            .iter()
            .map(|item| match item.equipment() {
                Some(eq) if eq.is_equipped => format!("{} (on {})", item.name, eq.slot),
                _ => item.name.clone(),
            })
            .collect(),
    };
    check_menu(options)
}

/// A menu can offer at most one option per letter.
pub fn check_menu(options: Vec<String>) -> Result<Vec<String>, InvariantViolation> {
    if options.len() > GameConfig::MAX_INVENTORY_SLOTS {
        return Err(InvariantViolation::MenuOverflow {
            count: options.len(),
            max: GameConfig::MAX_INVENTORY_SLOTS,
        });
    }
    Ok(options)
}

fn item_at(
    world: &World,
    owner: EntityId,
    index: usize,
) -> Result<&Entity, InvariantViolation> {
    let inventory = world.inventory(owner);
    inventory
        .and_then(|inv| inv.get(index))
        .ok_or(InvariantViolation::NoSuchInventorySlot {
            index,
            len: inventory.map_or(0, |inv| inv.len()),
        })
}

fn item_at_mut(
    world: &mut World,
    owner: EntityId,
    index: usize,
) -> Result<&mut Entity, InvariantViolation> {
    let len = world.inventory(owner).map_or(0, |inv| inv.len());
    world
        .inventory_mut(owner)
        .and_then(|inv| inv.get_mut(index))
        .ok_or(InvariantViolation::NoSuchInventorySlot { index, len })
}

fn equipment_slot(world: &World, owner: EntityId, index: usize) -> Result<Slot, InvariantViolation> {
    let entity = item_at(world, owner, index)?;
    entity
        .equipment()
        .map(|eq| eq.slot)
        .ok_or(InvariantViolation::MissingCapability {
            entity: entity.id,
            capability: "equipment",
        })
}

fn last_index(world: &World, owner: EntityId) -> Result<usize, InvariantViolation> {
    world
        .inventory(owner)
        .and_then(|inv| inv.len().checked_sub(1))
        .ok_or(InvariantViolation::NoSuchInventorySlot { index: 0, len: 0 })
}
