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

//! The handle a successful load returns.

use skene_core::{EntityId, EntityStore};

use super::error::LoadWarning;

/// The result of one scene load: every created entity plus the warnings the
/// load accumulated.
///
/// The scene tracks entities only by handle; their data lives in the store.
/// Dropping a `Scene` leaks nothing but forgets which entities belonged to
/// it, so call [`Scene::unload`] first when tear-down matters.
#[derive(Debug)]
pub struct Scene {
    name: String,
    entities: Vec<EntityId>,
    warnings: Vec<LoadWarning>,
}

impl Scene {
    pub(crate) fn new(name: String, entities: Vec<EntityId>, warnings: Vec<LoadWarning>) -> Self {
        Self {
            name,
            entities,
            warnings,
        }
    }

    /// The scene's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Every entity the load created — top-level definitions, inline
    /// children, and gizmos — in creation order.
    pub fn entities(&self) -> &[EntityId] {
        &self.entities
    }

    /// The non-fatal degradations recorded during the load.
    pub fn warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }

    /// Returns `true` if the load produced no warnings.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Destroys every entity this load created.
    ///
    /// Entities destroyed by other code in the meantime are skipped. The
    /// scene is consumed; its bookkeeping goes with it.
    pub fn unload<S: EntityStore>(self, store: &mut S) {
        let mut destroyed = 0usize;
        for entity in self.entities.iter().rev() {
            if store.destroy_entity(*entity) {
                destroyed += 1;
            }
        }
        log::debug!(
            "Scene '{}': unloaded, {destroyed} of {} entities destroyed",
            self.name,
            self.entities.len()
        );
    }
}
