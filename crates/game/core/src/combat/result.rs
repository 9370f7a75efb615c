//! Combat result type and attack resolution.

use crate::env::RngStream;
use crate::state::Actor;

use super::damage::{VARIANCE, apply_damage, calculate_damage};
use super::hit::check_hit;

/// Result of one melee exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatOutcome {
    pub hit: bool,
    /// Damage dealt (0 on a miss).
    pub damage: u32,
    pub defender_died: bool,
    /// Log line describing the exchange.
    pub message: String,
}

/// Resolve a complete attack sequence (hit check + damage application).
///
/// Draws the hit roll first and the variance only on a hit. The defender's
/// HP is reduced in place; XP is the caller's business.
pub fn resolve_attack(
    attacker: &Actor,
    defender: &mut Actor,
    rng: &mut dyn RngStream,
) -> CombatOutcome {
    let roll = rng.roll_percent();
    if !check_hit(attacker.attack, defender.defense, roll) {
        return CombatOutcome {
            hit: false,
            damage: 0,
            defender_died: false,
            message: format!("{} misses {}.", attacker.name, defender.name),
        };
    }

    let variance = rng.range_inclusive(-VARIANCE, VARIANCE);
    let damage = calculate_damage(attacker.attack, defender.defense, variance);
    let defender_died = apply_damage(defender, damage);

    let mut message = format!("{} hits {} for {}!", attacker.name, defender.name, damage);
    if defender_died {
        message.push_str(&format!(" {} is defeated.", defender.name));
    }

    CombatOutcome {
        hit: true,
        damage,
        defender_died,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use crate::state::EntityId;

    fn actor(name: &str, hp: u32, attack: i32, defense: i32) -> Actor {
        Actor::new(EntityId(1), name, 'x')
            .with_hp(hp)
            .with_combat(attack, defense)
    }

    #[test]
    fn hits_deal_at_least_one_and_hp_never_underflows() {
        let mut rng = PcgRng::seed_from_u64(17);
        let attacker = actor("Rat", 5, 1, 0);
        for _ in 0..500 {
            let mut defender = actor("Knight", 3, 0, 40);
            let outcome = resolve_attack(&attacker, &mut defender, &mut rng);
            if outcome.hit {
                assert_eq!(outcome.damage, 1);
                assert_eq!(defender.hp.current, 2);
            } else {
                assert_eq!(outcome.damage, 0);
                assert_eq!(defender.hp.current, 3);
                assert_eq!(outcome.message, "Rat misses Knight.");
            }
        }
    }

    #[test]
    fn lethal_hit_reports_death() {
        let mut rng = PcgRng::seed_from_u64(4);
        let attacker = actor("Hero", 30, 1000, 0);
        let mut landed = None;
        for _ in 0..20 {
            let mut defender = actor("Goblin", 10, 1, 0);
            let outcome = resolve_attack(&attacker, &mut defender, &mut rng);
            if outcome.hit {
                landed = Some((outcome, defender));
                break;
            }
        }
        let (outcome, defender) = landed.expect("95% hit chance lands within 20 swings");
        assert!(outcome.defender_died);
        assert_eq!(defender.hp.current, 0);
        assert!(outcome.message.ends_with("Goblin is defeated."));
    }

    #[test]
    fn observed_hit_rate_tracks_clamped_chance() {
        let mut rng = PcgRng::seed_from_u64(2024);
        let attacker = actor("Hero", 30, 1000, 0);
        let trials = 4_000;
        let mut hits = 0;
        for _ in 0..trials {
            let mut defender = actor("Wall", u32::MAX, 0, 0);
            if resolve_attack(&attacker, &mut defender, &mut rng).hit {
                hits += 1;
            }
        }
        let rate = hits as f64 / trials as f64;
        assert!((0.92..=0.98).contains(&rate), "hit rate {rate}");
    }
}
