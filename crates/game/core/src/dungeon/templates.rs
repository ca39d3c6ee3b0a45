//! Entity templates for the player, monsters, items and stairs.
//!
//! Templates take an already allocated id and a position; they never touch
//! the world themselves.

use super::tables::{ItemKind, MonsterKind};
use crate::config::GameConfig;
use crate::state::{
    Ai, AiMode, Color, DeathKind, Entity, EntityId, Equipment, Fighter, Item, Position, Slot,
    StatBonuses, UseEffect,
};

pub fn player(config: &GameConfig, position: Position) -> Entity {
    let base = &config.player;
    Entity::new(EntityId::PLAYER, position, '@', "player", Color::White)
        .blocking()
        .with_fighter(
            Fighter::new(base.hp, base.defense, base.power, 0, DeathKind::Player)
                .with_critical(base.critical)
                .with_hit_chance(base.hit_chance),
        )
}

/// Gear the player wakes up with; both pieces go straight into their slots.
pub fn starting_gear(dagger: EntityId, rags: EntityId) -> [Entity; 2] {
    let mut gear = [
        Entity::new(dagger, Position::ORIGIN, '-', "dagger", Color::Sky).with_item(Item::equipment(
            Equipment::new(Slot::RightHand, StatBonuses::NONE.power(2)),
        )),
        Entity::new(rags, Position::ORIGIN, '&', "dirty rags", Color::Brown).with_item(
            Item::equipment(Equipment::new(Slot::Body, StatBonuses::NONE.defense(1))),
        ),
    ];
    for piece in &mut gear {
        if let Some(equipment) = piece.equipment_mut() {
            equipment.is_equipped = true;
        }
    }
    gear
}

pub fn monster(kind: MonsterKind, id: EntityId, position: Position) -> Entity {
    let (glyph, color, fighter) = match kind {
        MonsterKind::Orc => (
            'o',
            Color::DesaturatedGreen,
            Fighter::new(20, 0, 4, 36, DeathKind::Monster).with_hit_chance(75),
        ),
        MonsterKind::Troll => (
            'T',
            Color::DarkerGreen,
            Fighter::new(30, 2, 8, 100, DeathKind::Monster)
                .with_critical(5)
                .with_hit_chance(70),
        ),
    };
    Entity::new(id, position, glyph, kind.to_string(), color)
        .blocking()
        .with_fighter(fighter)
        .with_ai(Ai::new(AiMode::Dormant))
}

pub fn item(kind: ItemKind, id: EntityId, position: Position) -> Entity {
    let (glyph, name, color, item) = match kind {
        ItemKind::HealingPotion => (
            '!',
            "healing potion",
            Color::Violet,
            Item::consumable(UseEffect::Heal),
        ),
        ItemKind::LightningScroll => (
            '#',
            "scroll of lightning bolt",
            Color::LightYellow,
            Item::consumable(UseEffect::Lightning),
        ),
        ItemKind::FireballScroll => (
            '#',
            "scroll of fireball",
            Color::Red,
            Item::consumable(UseEffect::Fireball),
        ),
        ItemKind::ConfusionScroll => (
            '#',
            "scroll of confusion",
            Color::LightGray,
            Item::consumable(UseEffect::Confuse),
        ),
        ItemKind::Ration => (',', "ration", Color::Brown, Item::consumable(UseEffect::Eat)),
        ItemKind::Sword => (
            '/',
            "sword",
            Color::Sky,
            Item::equipment(Equipment::new(Slot::RightHand, StatBonuses::NONE.power(3))),
        ),
        ItemKind::Shield => (
            '[',
            "shield",
            Color::DarkerOrange,
            Item::equipment(Equipment::new(Slot::LeftHand, StatBonuses::NONE.defense(1))),
        ),
    };
    Entity::new(id, position, glyph, name, color)
        .always_visible()
        .with_item(item)
}

pub fn stairs(id: EntityId, position: Position) -> Entity {
    Entity::new(id, position, '<', "stairs", Color::White).always_visible()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Role;

    #[test]
    fn troll_is_tougher_than_orc() {
        let orc = monster(MonsterKind::Orc, EntityId(1), Position::ORIGIN);
        let troll = monster(MonsterKind::Troll, EntityId(2), Position::ORIGIN);
        assert_eq!(orc.name, "orc");
        assert_eq!(orc.role(), Role::Monster);
        let (orc, troll) = (orc.fighter.unwrap(), troll.fighter.unwrap());
        assert!(troll.base_max_hp > orc.base_max_hp);
        assert_eq!(orc.xp, 36);
        assert_eq!(troll.base_critical, 5);
    }

    #[test]
    fn starting_gear_is_equipped() {
        let gear = starting_gear(EntityId(1), EntityId(2));
        assert!(gear.iter().all(|g| g.equipment().is_some_and(|e| e.is_equipped)));
        assert_eq!(gear[0].equipment().unwrap().slot, Slot::RightHand);
    }

    #[test]
    fn items_stay_visible_once_seen() {
        let ration = item(ItemKind::Ration, EntityId(3), Position::ORIGIN);
        assert!(ration.always_visible);
        assert!(!ration.blocks);
        assert_eq!(ration.role(), Role::Item);
    }
}
