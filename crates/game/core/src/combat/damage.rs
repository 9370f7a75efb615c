//! Damage calculation and application.

use crate::state::Actor;

/// Every landed hit deals at least this much.
pub const MIN_DAMAGE: u32 = 1;

/// Damage variance is drawn uniformly from `[-VARIANCE, VARIANCE]`.
pub const VARIANCE: i32 = 2;

/// Calculate damage from a landed hit.
///
/// # Formula
///
/// ```text
/// damage = max(1, attack + variance - defense)
/// ```
pub fn calculate_damage(attack: i32, defense: i32, variance: i32) -> u32 {
    let raw = i64::from(attack) + i64::from(variance) - i64::from(defense);
    raw.clamp(i64::from(MIN_DAMAGE), i64::from(u32::MAX)) as u32
}

/// Subtract `amount` from the actor's HP, clamped at zero.
///
/// Returns `true` only on the call that takes the actor from alive to dead,
/// so kill rewards cannot be paid twice.
pub fn apply_damage(actor: &mut Actor, amount: u32) -> bool {
    let was_alive = actor.is_alive();
    actor.hp.drain(amount);
    was_alive && !actor.is_alive()
}
