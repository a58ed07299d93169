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

//! Defines the library of named, reusable component sets.

use std::collections::HashMap;

use super::set::ComponentSet;

/// A collection of named prefabs available to one scene load.
///
/// The library is fixed before loading starts; an entity definition naming a
/// prefab that is not here fails validation before any entity is created.
#[derive(Debug, Clone, Default)]
pub struct PrefabLibrary {
    prefabs: HashMap<String, ComponentSet>,
}

impl PrefabLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a prefab under `name`.
    ///
    /// Re-registering a name warns and overwrites, returning the previous
    /// set.
    pub fn insert(&mut self, name: impl Into<String>, set: ComponentSet) -> Option<ComponentSet> {
        let name = name.into();
        let previous = self.prefabs.insert(name.clone(), set);
        if previous.is_some() {
            log::warn!("PrefabLibrary: prefab '{name}' registered twice, the new set wins");
        }
        previous
    }

    /// Looks up a prefab's component set.
    pub fn get(&self, name: &str) -> Option<&ComponentSet> {
        self.prefabs.get(name)
    }

    /// Returns `true` if a prefab is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.prefabs.contains_key(name)
    }

    /// Returns the number of registered prefabs.
    pub fn len(&self) -> usize {
        self.prefabs.len()
    }

    /// Returns `true` if no prefab is registered.
    pub fn is_empty(&self) -> bool {
        self.prefabs.is_empty()
    }
}
