//! Runtime side of abilities.
//!
//! Definitions live in content data (see [`crate::env::AbilityOracle`]); this
//! module holds cooldown bookkeeping and the arithmetic each effect uses.
//! [`GameEngine::use_ability`](crate::engine::GameEngine::use_ability)
//! applies effects through the engine's hook surface so damage, death, and
//! XP follow the same rules as melee.
mod cooldown;

pub use cooldown::CooldownTracker;

use crate::env::CoreStats;

/// Scales `base` by an integer percentage, truncating. Negative bases
/// scale to 0.
pub fn scale_by_percent(base: i32, power: u32) -> u32 {
    let scaled = i64::from(base.max(0)) * i64::from(power) / 100;
    scaled.min(i64::from(u32::MAX)) as u32
}

/// Damage of a ranged strike: `(attack + INT) * power / 100`.
pub fn strike_damage(attack: i32, stats: &CoreStats, power: u32) -> u32 {
    let int = i32::try_from(stats.int).unwrap_or(i32::MAX);
    scale_by_percent(attack.saturating_add(int), power)
}

/// Damage of a sweep against each adjacent monster: `attack * power / 100`.
pub fn sweep_damage(attack: i32, power: u32) -> u32 {
    scale_by_percent(attack, power)
}

/// `maximum / divisor`, treating a zero divisor as "restore nothing".
pub fn fraction_of(maximum: u32, divisor: u32) -> u32 {
    maximum.checked_div(divisor).unwrap_or(0)
}

/// Flat heal: `base + MND * mnd_scale`.
pub fn flat_heal(base: u32, stats: &CoreStats, mnd_scale: u32) -> u32 {
    base.saturating_add(stats.mnd.saturating_mul(mnd_scale))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_scaling_truncates() {
        assert_eq!(scale_by_percent(13, 150), 19);
        assert_eq!(scale_by_percent(10, 220), 22);
        assert_eq!(scale_by_percent(-4, 200), 0);
    }

    #[test]
    fn strike_adds_intelligence() {
        let stats = CoreStats::new(5, 7, 16, 6, 9);
        // (12 + 16) * 1.2 = 33.6
        assert_eq!(strike_damage(12, &stats, 120), 33);
        assert_eq!(sweep_damage(12, 150), 18);
    }

    #[test]
    fn heals() {
        let stats = CoreStats::new(5, 6, 8, 18, 10);
        assert_eq!(flat_heal(20, &stats, 2), 56);
        assert_eq!(fraction_of(60, 4), 15);
        assert_eq!(fraction_of(60, 0), 0);
    }
}
