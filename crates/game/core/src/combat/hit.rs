//! Hit check.

use crate::stats::EffectiveStats;

/// Chance to hit, in percent.
///
/// # Formula
///
/// ```text
/// hit_chance = attacker.hit_chance + attacker.critical - defender.critical
/// ```
///
/// The result is not clamped: values at or above 100 always hit, values
/// below 1 never do.
pub fn calculate_hit_chance(attacker: &EffectiveStats, defender: &EffectiveStats) -> i32 {
    attacker.hit_chance + attacker.critical - defender.critical
}

/// Whether a d100 `roll` (1-100) lands against `hit_chance`.
pub fn check_hit(roll: i32, hit_chance: i32) -> bool {
    roll <= hit_chance
}
