// crates/batarong_ecs/src/world.rs

use std::any::{type_name, TypeId};
use std::collections::HashMap;

use crate::entity::Entity;
use crate::storage::{SparseSet, Storage};

pub struct World {
    entities: Vec<Entity>,
    // Map Component Type -> Storage
    components: HashMap<TypeId, Box<dyn Storage>>,
    free_indices: Vec<u32>,
    generations: Vec<u32>,
}

impl World {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
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
        let entity = Entity::new(index, generation);
        self.entities.push(entity);
        entity
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
                     Call world.register_component::<{}>() during scene setup.",
                    type_name::<T>(),
                    type_name::<T>(),
                );
            }
        }
    }

    /// Returns a shared reference to the component `T` for `entity`, or `None` if not present.
    pub fn get_component<T: 'static>(&self, entity: Entity) -> Option<&T> {
        let type_id = TypeId::of::<T>();
        if let Some(storage) = self.components.get(&type_id) {
            if let Some(sparse_set) = storage.as_any().downcast_ref::<SparseSet<T>>() {
                return sparse_set.get(entity);
            }
        }
        None
    }

    /// Mutable variant of [`World::get_component`].
    pub fn get_component_mut<T: 'static>(&mut self, entity: Entity) -> Option<&mut T> {
        let type_id = TypeId::of::<T>();
        if let Some(storage) = self.components.get_mut(&type_id) {
            if let Some(sparse_set) = storage.as_any_mut().downcast_mut::<SparseSet<T>>() {
                return sparse_set.get_mut(entity);
            }
        }
        None
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

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Health(u32);

    #[test]
    fn spawn_add_get_roundtrip() {
        let mut world = World::new();
        world.register_component::<Health>();

        let e = world.spawn();
        world.add_component(e, Health(100));

        assert_eq!(world.get_component::<Health>(e), Some(&Health(100)));
    }

    #[test]
    fn get_component_mut_updates_storage() {
        let mut world = World::new();
        world.register_component::<Health>();

        let e = world.spawn();
        world.add_component(e, Health(100));
        world.get_component_mut::<Health>(e).unwrap().0 = 5;

        assert_eq!(world.get_component::<Health>(e), Some(&Health(5)));
    }

    #[test]
    #[should_panic]
    fn adding_unregistered_component_panics() {
        let mut world = World::new();
        let e = world.spawn();
        world.add_component(e, Health(1));
    }

    #[test]
    fn query_is_none_for_unregistered_type() {
        let world = World::new();
        assert!(world.query::<Health>().is_none());
    }
}
