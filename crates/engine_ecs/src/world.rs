// crates/engine_ecs/src/world.rs

use std::any::{TypeId, type_name};
use std::collections::HashMap;

use crate::entity::Entity;
use crate::storage::{SparseSet, Storage};

pub struct World {
    // Map Component Type -> Storage
    components: HashMap<TypeId, Box<dyn Storage>>,
    free_indices: Vec<u32>,
    generations: Vec<u32>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    pub fn new() -> Self {
        Self {
            components: HashMap::new(),
            free_indices: Vec::new(),
            generations: Vec::new(),
        }
    }

    /// Register a component type with the world.
    /// This MUST be called exactly once per component type.
    pub fn register_component<T: 'static>(&mut self) {
        let type_id = TypeId::of::<T>();

        if self.components.contains_key(&type_id) {
            panic!(
                "Component {} registered twice. \
                 Ensure you only call world.register_component::<{}>() once.",
                type_name::<T>(),
                type_name::<T>(),
            );
        }

        self.components
            .insert(type_id, Box::new(SparseSet::<T>::new()));
    }

    pub fn spawn(&mut self) -> Entity {
        let index = if let Some(idx) = self.free_indices.pop() {
            idx
        } else {
            self.generations.push(0);
            (self.generations.len() - 1) as u32
        };

        let generation = self.generations[index as usize];
        Entity::new(index, generation)
    }

    /// Removes `entity` and every component it owns. The slot is recycled with
    /// a bumped generation, so stale handles never alias the new occupant.
    /// Returns `false` if the entity was already dead.
    pub fn despawn(&mut self, entity: Entity) -> bool {
        if !self.is_alive(entity) {
            return false;
        }

        for storage in self.components.values_mut() {
            storage.remove_entity(entity);
        }

        let slot = entity.index();
        self.generations[slot] = self.generations[slot].wrapping_add(1);
        self.free_indices.push(slot as u32);
        true
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.generations
            .get(entity.index())
            .is_some_and(|generation| *generation == entity.generation())
    }

    /// STRICT MODE: adding a component to an unregistered type is a hard error.
    pub fn add_component<T: 'static>(&mut self, entity: Entity, component: T) {
        use std::collections::hash_map::Entry;

        let type_id = TypeId::of::<T>();

        match self.components.entry(type_id) {
            Entry::Occupied(mut occ) => {
                let storage = occ.get_mut();
                let sparse_set = storage
                    .as_any_mut()
                    .downcast_mut::<SparseSet<T>>()
                    .unwrap_or_else(|| {
                        panic!(
                            "Component storage type mismatch for {}. \
                             Storage was created for a different concrete type.",
                            type_name::<T>(),
                        )
                    });

                sparse_set.insert(entity, component);
            }
            Entry::Vacant(_) => {
                panic!(
                    "Component {} was not registered! \
                     Call world.register_component::<{}>() during setup (e.g. Scene::new).",
                    type_name::<T>(),
                    type_name::<T>(),
                );
            }
        }
    }

    /// Returns a shared reference to the component `T` for `entity`, or `None` if not present.
    pub fn get_component<T: 'static>(&self, entity: Entity) -> Option<&T> {
        self.query::<T>()?.get(entity)
    }

    pub fn get_component_mut<T: 'static>(&mut self, entity: Entity) -> Option<&mut T> {
        self.query_mut::<T>()?.get_mut(entity)
    }

    /// Read-only access to the full storage of a component type.
    pub fn query<T: 'static>(&self) -> Option<&SparseSet<T>> {
        let type_id = TypeId::of::<T>();
        self.components
            .get(&type_id)
            .and_then(|boxed| boxed.as_any().downcast_ref::<SparseSet<T>>())
    }

    /// Mutable access to the full storage of a component type.
    pub fn query_mut<T: 'static>(&mut self) -> Option<&mut SparseSet<T>> {
        let type_id = TypeId::of::<T>();
        self.components
            .get_mut(&type_id)
            .and_then(|boxed| boxed.as_any_mut().downcast_mut::<SparseSet<T>>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Health(u32);

    #[test]
    fn despawn_removes_components_and_recycles_slot() {
        let mut world = World::new();
        world.register_component::<Health>();

        let a = world.spawn();
        world.add_component(a, Health(5));
        assert!(world.despawn(a));
        assert!(!world.is_alive(a));
        assert_eq!(world.get_component::<Health>(a), None);

        let b = world.spawn();
        assert_eq!(b.index(), a.index());
        assert_ne!(b.generation(), a.generation());
        assert!(world.is_alive(b));
    }

    #[test]
    fn despawn_twice_is_a_no_op() {
        let mut world = World::new();
        let a = world.spawn();
        assert!(world.despawn(a));
        assert!(!world.despawn(a));
    }

    #[test]
    fn get_component_mut_edits_in_place() {
        let mut world = World::new();
        world.register_component::<Health>();
        let a = world.spawn();
        world.add_component(a, Health(1));

        world.get_component_mut::<Health>(a).unwrap().0 = 9;
        assert_eq!(world.get_component::<Health>(a), Some(&Health(9)));
    }

    #[test]
    #[should_panic(expected = "was not registered")]
    fn adding_unregistered_component_panics() {
        let mut world = World::new();
        let a = world.spawn();
        world.add_component(a, Health(1));
    }
}
