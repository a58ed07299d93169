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

//! Defines the storage contract the instantiation engine operates against.

use super::component::Component;
use super::entity::EntityId;

/// The minimal entity-storage contract required by the scene pipeline.
///
/// The instantiation engine, the reference-resolution pass, and the transform
/// queries are all generic over this trait, so scenes can be loaded into any
/// backend that implements it. A reference implementation, `WorldStore`,
/// ships in `skene-data`.
///
/// Implementations are expected to reject operations on handles whose
/// generation no longer matches the live entity at that index (see
/// [`EntityId`] for the recycling scheme).
pub trait EntityStore {
    /// Creates a new, empty entity and returns its handle.
    fn create_entity(&mut self) -> EntityId;

    /// Destroys an entity and all of its components.
    ///
    /// Returns `true` if the entity was alive and has been destroyed,
    /// `false` if the handle was stale or never valid.
    fn destroy_entity(&mut self, entity: EntityId) -> bool;

    /// Returns `true` if the handle designates a live entity.
    fn contains(&self, entity: EntityId) -> bool;

    /// Attaches a component to an entity, replacing any existing component
    /// of the same type.
    ///
    /// Returns `false` if the entity is not alive; the component is dropped
    /// in that case.
    fn add_component<C: Component>(&mut self, entity: EntityId, component: C) -> bool;

    /// Returns a shared reference to the entity's component of type `C`, if any.
    fn get_component<C: Component>(&self, entity: EntityId) -> Option<&C>;

    /// Returns an exclusive reference to the entity's component of type `C`, if any.
    fn get_component_mut<C: Component>(&mut self, entity: EntityId) -> Option<&mut C>;
}
