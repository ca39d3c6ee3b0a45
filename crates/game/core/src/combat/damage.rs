//! Damage calculation.

use crate::env::RngOracle;

/// Raw damage before the floor policy.
///
/// # Formula
///
/// ```text
/// raw = round(power / 2 + power * power_mod - defense * defense_mod)
/// ```
///
/// `power / 2` is integer halving; rounding is half away from zero.
pub fn raw_damage(power: i32, defense: i32, power_mod: f64, defense_mod: f64) -> i32 {
    let half = f64::from(power.div_euclid(2));
    (half + f64::from(power) * power_mod - f64::from(defense) * defense_mod).round() as i32
}

/// Applies the minimum-damage policy to a raw value.
///
/// Anything below 1 becomes 0, except that a critical hit always connects
/// and a glancing roll `glance <= 1` also forces a single point.
pub fn apply_floor(raw: i32, critical: bool, glance: i32) -> i32 {
    if raw >= 1 {
        return raw;
    }
    if critical || glance <= 1 { 1 } else { 0 }
}

/// Result of the damage rolls for one landed blow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageRoll {
    pub damage: i32,
    pub critical: bool,
}

/// Rolls power and defense modifiers and computes the final damage.
///
/// The power modifier is drawn from `[0.01, 1.00]`; at or below the critical
/// threshold the blow becomes critical and the modifier is redrawn from
/// `[1.00, 3.00]`. The defense modifier is drawn from `[0.50, 1.50]`. The
/// glancing roll `[0, |power - defense|]` is drawn only when the raw damage
/// falls below 1.
///
/// # Arguments
///
/// * `power` - Attacker's effective power
/// * `defense` - Defender's effective defense
/// * `crit_threshold` - Critical threshold in percent (base chance plus attacker critical)
pub fn roll_damage(
    power: i32,
    defense: i32,
    crit_threshold: i32,
    rng: &mut (impl RngOracle + ?Sized),
) -> DamageRoll {
    let mut critical = false;
    let mut power_roll = rng.range(1, 100);
    if power_roll <= crit_threshold {
        critical = true;
        power_roll = rng.range(100, 300);
    }
    let power_mod = f64::from(power_roll) / 100.0;
    let defense_mod = rng.percent(50, 150);

    let raw = raw_damage(power, defense, power_mod, defense_mod);
    let damage = if raw < 1 {
        let glance = rng.range(0, (power - defense).abs());
        apply_floor(raw, critical, glance)
    } else {
        raw
    };

    DamageRoll { damage, critical }
}
