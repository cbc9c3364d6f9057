// crates/engine_ecs/src/storage.rs
use crate::Entity;

// The trait allows us to treat different component storages generically
pub trait Storage {
    fn as_any(&self) -> &dyn std::any::Any;
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any;
    /// Drops the component owned by `entity`, if any.
    fn remove_entity(&mut self, entity: Entity);
}

pub struct SparseSet<T> {
    pub dense: Vec<T>,          // Tightly packed data (Cache friendly!)
    pub entities: Vec<Entity>,  // The entity that owns the data at 'dense[i]'
    pub sparse: Vec<Option<usize>>, // Maps Entity Index -> Dense Index
}

impl<T: 'static> SparseSet<T> {
    pub fn new() -> Self {
        Self {
            dense: Vec::new(),
            entities: Vec::new(),
            sparse: Vec::new(),
        }
    }

    pub fn insert(&mut self, entity: Entity, value: T) {
        let index = entity.index();

        // Resize sparse array if the entity index is too big
        if index >= self.sparse.len() {
            self.sparse.resize(index + 1, None);
        }

        // If this entity already has this component, overwrite it
        if let Some(dense_index) = self.sparse[index] {
            self.dense[dense_index] = value;
            self.entities[dense_index] = entity;
        } else {
            let dense_index = self.dense.len();
            self.dense.push(value);
            self.entities.push(entity);
            self.sparse[index] = Some(dense_index);
        }
    }

    fn dense_index(&self, entity: Entity) -> Option<usize> {
        let dense_index = (*self.sparse.get(entity.index())?)?;
        // Check generation to ensure the entity is still alive!
        (self.entities[dense_index].generation() == entity.generation()).then_some(dense_index)
    }

    pub fn get(&self, entity: Entity) -> Option<&T> {
        self.dense_index(entity).map(|i| &self.dense[i])
    }

    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        self.dense_index(entity).map(move |i| &mut self.dense[i])
    }

    /// Swap-removes the component of `entity`, keeping `dense` packed.
    pub fn remove(&mut self, entity: Entity) -> Option<T> {
        let dense_index = self.dense_index(entity)?;
        self.sparse[entity.index()] = None;

        let last = self.dense.len() - 1;
        self.dense.swap(dense_index, last);
        self.entities.swap(dense_index, last);
        let value = self.dense.pop();
        self.entities.pop();

        if dense_index != last {
            let moved = self.entities[dense_index];
            self.sparse[moved.index()] = Some(dense_index);
        }
        value
    }

    pub fn len(&self) -> usize {
        self.dense.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    // Expose the raw data for linear iteration (The "D" in DOD)
    pub fn as_slice(&self) -> &[T] {
        &self.dense
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.dense
    }

    // Iterate over (Entity, Component) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&Entity, &T)> {
        self.entities.iter().zip(self.dense.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&Entity, &mut T)> {
        self.entities.iter().zip(self.dense.iter_mut())
    }
}

impl<T: 'static> Default for SparseSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Boilerplate to allow dynamic typing of the storage
impl<T: 'static> Storage for SparseSet<T> {
    fn as_any(&self) -> &dyn std::any::Any { self }
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any { self }
    fn remove_entity(&mut self, entity: Entity) {
        self.remove(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_keeps_dense_packed_and_sparse_consistent() {
        let mut set = SparseSet::new();
        let a = Entity::new(0, 0);
        let b = Entity::new(1, 0);
        let c = Entity::new(2, 0);
        set.insert(a, 'a');
        set.insert(b, 'b');
        set.insert(c, 'c');

        assert_eq!(set.remove(a), Some('a'));
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(a), None);
        assert_eq!(set.get(b), Some(&'b'));
        assert_eq!(set.get(c), Some(&'c'));
    }

    #[test]
    fn stale_generation_is_not_visible() {
        let mut set = SparseSet::new();
        set.insert(Entity::new(4, 1), 10u32);

        assert_eq!(set.get(Entity::new(4, 0)), None);
        assert_eq!(set.remove(Entity::new(4, 0)), None);
        assert_eq!(set.get(Entity::new(4, 1)), Some(&10));
    }

    #[test]
    fn get_mut_writes_through() {
        let mut set = SparseSet::new();
        let e = Entity::new(0, 0);
        set.insert(e, 1.0f32);
        *set.get_mut(e).unwrap() += 1.5;
        assert_eq!(set.as_slice(), &[2.5]);
    }
}
