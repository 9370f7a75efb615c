use std::collections::BTreeMap;

use crate::env::AbilityId;
use crate::state::EntityId;

/// Remaining cooldown turns per `(entity, ability)` pair.
///
/// Entries only exist while at least one turn remains. The tracker lives in
/// [`GameState`](crate::state::GameState) and survives floor transitions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CooldownTracker {
    remaining: BTreeMap<(EntityId, AbilityId), u32>,
}

impl CooldownTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns left before `ability` is usable again by `entity` (0 = ready).
    pub fn remaining(&self, entity: EntityId, ability: &AbilityId) -> u32 {
        self.remaining
            .get(&(entity, ability.clone()))
            .copied()
            .unwrap_or(0)
    }

    pub fn is_ready(&self, entity: EntityId, ability: &AbilityId) -> bool {
        self.remaining(entity, ability) == 0
    }

    /// Starts a cooldown. A zero-turn cooldown records nothing.
    pub fn start(&mut self, entity: EntityId, ability: AbilityId, turns: u32) {
        if turns == 0 {
            self.remaining.remove(&(entity, ability));
        } else {
            self.remaining.insert((entity, ability), turns);
        }
    }

    /// Decrements every entry by one consumed turn and drops expired ones.
    pub fn tick(&mut self) {
        self.remaining.retain(|_, turns| {
            *turns = turns.saturating_sub(1);
            *turns > 0
        });
    }

    /// Forgets every cooldown owned by `entity`.
    pub fn clear_entity(&mut self, entity: EntityId) {
        self.remaining.retain(|(owner, _), _| *owner != entity);
    }

    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Active cooldowns in key order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &AbilityId, u32)> {
        self.remaining
            .iter()
            .map(|((entity, ability), turns)| (*entity, ability, *turns))
    }
}
