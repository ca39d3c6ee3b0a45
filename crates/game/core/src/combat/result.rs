//! Attack resolution result types.

use crate::env::RngOracle;
use crate::stats::EffectiveStats;

use super::damage::roll_damage;
use super::hit::{calculate_hit_chance, check_hit};

/// Outcome of a single attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// The hit roll failed.
    Miss,
    /// The blow landed. `damage` may be 0 when it had no effect.
    Hit { damage: i32, critical: bool },
}

impl AttackOutcome {
    pub fn damage(&self) -> i32 {
        match self {
            AttackOutcome::Miss => 0,
            AttackOutcome::Hit { damage, .. } => *damage,
        }
    }
}

/// Resolves hit check and damage without touching the world.
///
/// # Arguments
///
/// * `attacker` - Attacker's effective stats
/// * `defender` - Defender's effective stats
/// * `crit_chance` - Base critical probability (0.0-1.0)
/// * `rng` - Random source
pub fn resolve_attack(
    attacker: &EffectiveStats,
    defender: &EffectiveStats,
    crit_chance: f64,
    rng: &mut (impl RngOracle + ?Sized),
) -> AttackOutcome {
    let hit_chance = calculate_hit_chance(attacker, defender);
    if !check_hit(rng.roll_d100(), hit_chance) {
        return AttackOutcome::Miss;
    }

    let crit_threshold = (crit_chance * 100.0).round() as i32 + attacker.critical;
    let roll = roll_damage(attacker.power, defender.defense, crit_threshold, rng);
    AttackOutcome::Hit {
        damage: roll.damage,
        critical: roll.critical,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedRng;

    fn stats(power: i32, defense: i32) -> EffectiveStats {
        EffectiveStats {
            power,
            defense,
            max_hp: 20,
            critical: 0,
            hit_chance: 85,
        }
    }

    #[test]
    fn miss_consumes_only_the_hit_roll() {
        let mut rng = ScriptedRng::new([86, 50, 100]);
        let outcome = resolve_attack(&stats(4, 0), &stats(2, 0), 0.1, &mut rng);
        assert_eq!(outcome, AttackOutcome::Miss);
        assert_eq!(rng.remaining(), 2);
    }

    #[test]
    fn attacker_critical_widens_threshold() {
        let mut attacker = stats(4, 0);
        attacker.critical = 5;
        // hit, power roll 15 <= 10 + 5 -> crit, redraw 100, defense 100
        let mut rng = ScriptedRng::new([1, 15, 100, 100]);
        let outcome = resolve_attack(&attacker, &stats(2, 0), 0.1, &mut rng);
        assert_eq!(
            outcome,
            AttackOutcome::Hit {
                damage: 6,
                critical: true
            }
        );
    }
}
