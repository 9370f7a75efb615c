use crate::env::MonsterTemplate;

use super::{Actor, EntityId, Monster, Player, Position};

/// Owns the player and the monsters of the current floor.
///
/// Dead monsters stay in the list until the floor is replaced but are never
/// returned by the live queries, so AI, collision, and targeting code cannot
/// reach them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityRegistry {
    player: Player,
    monsters: Vec<Monster>,
    /// Sequential monster ID allocator. Never reused within a session; 0 is
    /// reserved for the player.
    next_id: u32,
}

impl EntityRegistry {
    pub fn new(player: Player) -> Self {
        Self {
            player,
            monsters: Vec::new(),
            next_id: 1,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Every monster spawned on this floor, dead or alive, in spawn order.
    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    pub fn living_monsters(&self) -> impl Iterator<Item = &Monster> {
        self.monsters.iter().filter(|m| m.is_alive())
    }

    pub fn living_count(&self) -> usize {
        self.living_monsters().count()
    }

    /// Live monster IDs in spawn order. Used to iterate the monster phase
    /// while mutating the registry.
    pub fn living_ids(&self) -> Vec<EntityId> {
        self.living_monsters().map(Monster::id).collect()
    }

    pub fn living_monster(&self, id: EntityId) -> Option<&Monster> {
        self.monsters.iter().find(|m| m.id() == id && m.is_alive())
    }

    pub fn living_monster_mut(&mut self, id: EntityId) -> Option<&mut Monster> {
        self.monsters
            .iter_mut()
            .find(|m| m.id() == id && m.is_alive())
    }

    /// Player or live monster by ID.
    pub fn actor(&self, id: EntityId) -> Option<&Actor> {
        if id.is_player() {
            return Some(&self.player.actor);
        }
        self.living_monster(id).map(|m| &m.actor)
    }

    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut Actor> {
        if id.is_player() {
            return Some(&mut self.player.actor);
        }
        self.living_monster_mut(id).map(|m| &mut m.actor)
    }

    /// Splits the borrow so a live monster and the player can fight.
    pub fn player_and_monster_mut(&mut self, id: EntityId) -> Option<(&mut Player, &mut Monster)> {
        let monster = self
            .monsters
            .iter_mut()
            .find(|m| m.id() == id && m.is_alive())?;
        Some((&mut self.player, monster))
    }

    /// Live monster standing on `position`, if any.
    pub fn monster_at(&self, position: Position) -> Option<EntityId> {
        self.living_monsters()
            .find(|m| m.position() == position)
            .map(Monster::id)
    }

    /// True if a live monster other than `except` stands on `position`.
    pub fn is_blocked_by_monster(&self, position: Position, except: EntityId) -> bool {
        self.living_monsters()
            .any(|m| m.id() != except && m.position() == position)
    }

    /// Nearest live monster by Manhattan distance, within `range` inclusive.
    /// Ties go to the earliest spawned.
    pub fn nearest_monster_within(&self, origin: Position, range: u32) -> Option<EntityId> {
        self.living_monsters()
            .map(|m| (m.position().manhattan_distance(origin), m.id()))
            .filter(|(distance, _)| *distance <= range)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, id)| id)
    }

    /// Live monsters on the eight tiles surrounding `origin`, in spawn order.
    pub fn monsters_adjacent_to(&self, origin: Position) -> Vec<EntityId> {
        self.living_monsters()
            .filter(|m| m.position().is_adjacent(origin))
            .map(Monster::id)
            .collect()
    }

    pub fn boss_alive(&self) -> bool {
        self.living_monsters().any(|m| m.is_boss)
    }

    // ===== floor lifecycle =====

    /// Spawns a monster from a resolved template and returns its ID.
    pub fn spawn(
        &mut self,
        template: &MonsterTemplate,
        position: Position,
        sight_range: u32,
    ) -> EntityId {
        let id = self.allocate_id();
        self.monsters
            .push(Monster::from_template(id, template, position, sight_range));
        id
    }

    /// Drops every monster. The player is kept.
    pub fn clear_monsters(&mut self) {
        self.monsters.clear();
    }

    fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }
}
