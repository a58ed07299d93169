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

//! Defines the entity-definition tree that makes up a scene description.

use serde::{Deserialize, Serialize};
use skene_core::math::Vec2;

use super::set::{ComponentSet, ShapeDef};

/// The root container of a static scene description.
///
/// Fully known before loading starts; the instantiation pipeline discovers
/// nothing while it runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    /// The scene's display name.
    pub name: String,
    /// The top-level entity definitions, in declaration order.
    #[serde(default)]
    pub entities: Vec<EntityDefinition>,
}

impl SceneDescription {
    /// Parses a scene description from RON text.
    ///
    /// A convenience for fixtures and tools; the description model itself is
    /// format-agnostic and any serde front end will do.
    pub fn from_ron(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(text)
    }
}

/// One node of the description tree: a single entity to materialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDefinition {
    /// Display name, registered in the per-load name table. Unscoped; when
    /// two entities share a name, the most recently registered wins.
    #[serde(default)]
    pub name: Option<String>,
    /// Unique id, registered in the per-load id table. Duplicates are
    /// tolerated with a warning; the second registration wins.
    #[serde(default)]
    pub id: Option<String>,
    /// Parent to attach to once the whole scene exists. The key resolves
    /// through the id table first, then the name table.
    #[serde(default)]
    pub parent: Option<ParentSpec>,
    /// Where the entity's components come from: a prefab plus overrides, or
    /// an inline set. Exactly one of the two, by construction.
    pub source: EntitySource,
}

impl EntityDefinition {
    /// Creates a definition with an inline component set and nothing else.
    pub fn from_components(components: ComponentSet) -> Self {
        Self {
            name: None,
            id: None,
            parent: None,
            source: EntitySource::Components {
                components,
                gizmos: Vec::new(),
            },
        }
    }

    /// Creates a definition instantiating a prefab with no overrides.
    pub fn from_prefab(prefab: impl Into<String>) -> Self {
        Self {
            name: None,
            id: None,
            parent: None,
            source: EntitySource::Prefab {
                prefab: prefab.into(),
                overrides: ComponentSet::default(),
            },
        }
    }
}

/// The component source of an entity definition.
///
/// The enum is what enforces the model's "exactly one of `prefab` or
/// `components`" invariant; a definition cannot hold both or neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EntitySource {
    /// Instantiate a named prefab, merging `overrides` over its set per
    /// field.
    Prefab {
        /// The prefab's name in the library. Unknown names are a fatal
        /// definition error.
        prefab: String,
        /// Per-instance component overrides.
        #[serde(default)]
        overrides: ComponentSet,
    },
    /// Use an inline component set.
    Components {
        /// The components to materialize.
        #[serde(default)]
        components: ComponentSet,
        /// Auxiliary debug entities created alongside this one.
        #[serde(default)]
        gizmos: Vec<GizmoDef>,
    },
}

/// A deferred parent attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentSpec {
    /// The parent's key, resolved by id first and display name second.
    pub key: String,
    /// Whether the child inherits the parent's world rotation.
    #[serde(default)]
    pub inherit_rotation: bool,
    /// Whether the child inherits the parent's world scale.
    #[serde(default)]
    pub inherit_scale: bool,
}

/// A reference marker naming another entity in the same scene.
///
/// Markers are never resolved while entities are still being created; the
/// field holds the placeholder handle until the resolution pass runs with
/// complete lookup tables, so declaration order never matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityRef {
    /// Resolve through the display-name table.
    Named(String),
    /// Resolve through the unique-id table.
    Id(String),
    /// Resolve to the entity the field belongs to.
    SelfRef,
}

impl EntityRef {
    /// The key this marker resolves by, for diagnostics.
    pub fn key(&self) -> &str {
        match self {
            EntityRef::Named(key) | EntityRef::Id(key) => key,
            EntityRef::SelfRef => "self",
        }
    }
}

/// An entity-valued component field: inline child or reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EntitySlot {
    /// A nested definition, materialized as a child entity whose handle is
    /// written into the field immediately.
    Inline(Box<EntityDefinition>),
    /// A marker resolved in the second pass.
    Ref(EntityRef),
}

/// An auxiliary debug entity created alongside its owner.
///
/// Gizmo entities carry a back-reference to the owner and a pixel offset;
/// they never register a name or id and never join the transform hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GizmoDef {
    /// Offset from the owner's world position.
    #[serde(default)]
    pub offset: Vec2,
    /// Optional silhouette for the gizmo entity.
    #[serde(default)]
    pub shape: Option<ShapeDef>,
}
