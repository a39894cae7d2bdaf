//! Per-kind entity collections.
//!
//! [`EntityGroups`] keeps the level's entities grouped by kind, each list in
//! spawn order. Systems that need a deterministic order (platform collision)
//! or only one kind (coin pickup, enemy contact) walk these lists instead of
//! querying the whole world. The ECS world itself is the "all entities"
//! collection used for the uniform per-tick update and drawing.

use bevy_ecs::prelude::*;

use crate::components::entitykind::EntityKind;

#[derive(Debug, Clone, Resource, Default)]
pub struct EntityGroups {
    pub player: Option<Entity>,
    pub platforms: Vec<Entity>,
    pub coins: Vec<Entity>,
    pub enemies: Vec<Entity>,
    pub clouds: Vec<Entity>,
}

impl EntityGroups {
    /// Append `entity` to the list for its kind.
    pub fn register(&mut self, entity: Entity, kind: &EntityKind) {
        match kind {
            EntityKind::Player(_) => self.player = Some(entity),
            EntityKind::Platform => self.platforms.push(entity),
            EntityKind::Coin(_) => self.coins.push(entity),
            EntityKind::Enemy(_) => self.enemies.push(entity),
            EntityKind::Cloud(_) => self.clouds.push(entity),
        }
    }

    /// Drop the given coins, keeping the order of the rest.
    pub fn remove_coins(&mut self, picked: &[Entity]) {
        self.coins.retain(|coin| !picked.contains(coin));
    }

    /// Total number of tracked entities.
    pub fn total(&self) -> usize {
        usize::from(self.player.is_some())
            + self.platforms.len()
            + self.coins.len()
            + self.enemies.len()
            + self.clouds.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::bob::Bob;
    use crate::components::rigidbody::RigidBody;

    #[test]
    fn register_sorts_by_kind_in_order() {
        let mut world = World::new();
        let mut groups = EntityGroups::default();
        let p = world.spawn_empty().id();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        let c = world.spawn_empty().id();

        groups.register(p, &EntityKind::Player(RigidBody::new()));
        groups.register(a, &EntityKind::Platform);
        groups.register(c, &EntityKind::Coin(Bob::new(0.0)));
        groups.register(b, &EntityKind::Platform);

        assert_eq!(groups.player, Some(p));
        assert_eq!(groups.platforms, vec![a, b]);
        assert_eq!(groups.coins, vec![c]);
        assert_eq!(groups.total(), 4);
    }

    #[test]
    fn remove_coins_keeps_remaining_order() {
        let mut world = World::new();
        let mut groups = EntityGroups::default();
        let coins: Vec<Entity> = (0..4).map(|_| world.spawn_empty().id()).collect();
        for coin in &coins {
            groups.register(*coin, &EntityKind::Coin(Bob::new(0.0)));
        }
        groups.remove_coins(&[coins[1], coins[3]]);
        assert_eq!(groups.coins, vec![coins[0], coins[2]]);
        assert_eq!(groups.total(), 2);
    }
}
