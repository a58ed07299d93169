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

//! Defines the fatal load errors and the non-fatal load warnings.

use std::fmt;

use skene_core::EntityId;

/// A fatal definition error.
///
/// Every variant is raised by the validation pass, before any entity is
/// created; a load that returns one of these has not touched the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// A definition names a prefab the library does not contain.
    #[error("entity '{entity}' references unknown prefab '{prefab}'")]
    UnknownPrefab {
        /// Label of the offending definition.
        entity: String,
        /// The missing prefab name.
        prefab: String,
    },

    /// A merged component set lacks a required field that has no default.
    #[error("entity '{entity}' is missing required field '{field}'")]
    MissingField {
        /// Label of the offending definition.
        entity: String,
        /// The missing field, as `component.field`.
        field: String,
    },

    /// Inline entity definitions nest deeper than the structural ceiling,
    /// usually a prefab whose component set inlines an entity using that
    /// same prefab.
    #[error("entity '{entity}' nests deeper than {} definition levels", super::MAX_DEFINITION_DEPTH)]
    DefinitionTooDeep {
        /// Label of the definition at the ceiling.
        entity: String,
    },
}

/// A non-fatal degradation recorded during loading.
///
/// Warnings are logged as they happen and collected on the returned
/// [`Scene`](super::Scene), so callers can distinguish a clean load from a
/// degraded one. None of them fail the load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// A reference field named an entity that does not exist; the field
    /// keeps the placeholder handle.
    UnresolvedReference {
        /// The entity whose field stayed unpatched.
        owner: EntityId,
        /// The key that failed to resolve.
        key: String,
    },
    /// A parent key named an entity that does not exist; the child stays
    /// unparented and its local position acts as its world position.
    UnresolvedParent {
        /// The child that stayed unparented.
        child: EntityId,
        /// The key that failed to resolve.
        key: String,
    },
    /// The same unique id was registered twice; the second registration
    /// wins for lookups.
    DuplicateId {
        /// The id registered more than once.
        id: String,
    },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::UnresolvedReference { owner, key } => {
                write!(
                    f,
                    "reference '{key}' on entity {}v{} did not resolve",
                    owner.index, owner.generation
                )
            }
            LoadWarning::UnresolvedParent { child, key } => {
                write!(
                    f,
                    "parent key '{key}' of entity {}v{} did not resolve",
                    child.index, child.generation
                )
            }
            LoadWarning::DuplicateId { id } => {
                write!(f, "id '{id}' registered more than once")
            }
        }
    }
}
