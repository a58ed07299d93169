// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The reference implementation of the entity storage contract.

use std::any::{Any, TypeId};
use std::collections::HashMap;

use skene_core::ecs::{Component, EntityId, EntityStore};

/// A simple, generation-checked entity store.
///
/// `WorldStore` maintains a dense list of entity slots and recycles indices
/// via a free list. Each time an index is reused, the slot's generation is
/// incremented, so stale [`EntityId`] handles held by callers can never
/// reach the new occupant.
///
/// Component data lives in one column per component type, keyed by entity
/// index. The store favors simplicity over query throughput; it exists so
/// the instantiation pipeline is usable and testable out of the box.
#[derive(Default)]
pub struct WorldStore {
    /// A dense list of every entity slot ever created. Each entry holds the
    /// slot's current `EntityId` (including generation) and whether the slot
    /// is currently occupied by a live entity.
    pub(crate) entities: Vec<(EntityId, bool)>,
    /// Entity indices available for reuse, so despawned slots are recycled
    /// in constant time.
    pub(crate) freed_entities: Vec<u32>,
    /// Component columns, keyed by component type and then by entity index.
    components: HashMap<TypeId, HashMap<u32, Box<dyn Any + Send + Sync>>>,
}

impl WorldStore {
    /// Creates a new, empty `WorldStore`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of live entities.
    pub fn len(&self) -> usize {
        self.entities.iter().filter(|(_, alive)| *alive).count()
    }

    /// Returns `true` if the store holds no live entities.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn column<C: Component>(&self) -> Option<&HashMap<u32, Box<dyn Any + Send + Sync>>> {
        self.components.get(&TypeId::of::<C>())
    }
}

impl EntityStore for WorldStore {
    /// Allocates a new or recycled `EntityId`.
    ///
    /// If there are indices in the free list, one is popped and its
    /// generation is incremented. Otherwise, a new slot is appended.
    fn create_entity(&mut self) -> EntityId {
        if let Some(index) = self.freed_entities.pop() {
            let index = index as usize;
            let (id_slot, alive) = &mut self.entities[index];
            id_slot.generation += 1;
            *alive = true;
            *id_slot
        } else {
            let index = self.entities.len() as u32;
            let new_id = EntityId {
                index,
                generation: 0,
            };
            self.entities.push((new_id, true));
            new_id
        }
    }

    fn destroy_entity(&mut self, entity: EntityId) -> bool {
        if !self.contains(entity) {
            return false;
        }
        for column in self.components.values_mut() {
            column.remove(&entity.index);
        }
        let (_, alive) = &mut self.entities[entity.index as usize];
        *alive = false;
        self.freed_entities.push(entity.index);
        true
    }

    fn contains(&self, entity: EntityId) -> bool {
        self.entities
            .get(entity.index as usize)
            .map_or(false, |(slot_id, alive)| {
                *alive && slot_id.generation == entity.generation
            })
    }

    fn add_component<C: Component>(&mut self, entity: EntityId, component: C) -> bool {
        if !self.contains(entity) {
            return false;
        }
        self.components
            .entry(TypeId::of::<C>())
            .or_default()
            .insert(entity.index, Box::new(component));
        true
    }

    fn get_component<C: Component>(&self, entity: EntityId) -> Option<&C> {
        if !self.contains(entity) {
            return None;
        }
        self.column::<C>()?
            .get(&entity.index)?
            .downcast_ref::<C>()
    }

    fn get_component_mut<C: Component>(&mut self, entity: EntityId) -> Option<&mut C> {
        if !self.contains(entity) {
            return None;
        }
        self.components
            .get_mut(&TypeId::of::<C>())?
            .get_mut(&entity.index)?
            .downcast_mut::<C>()
    }
}
