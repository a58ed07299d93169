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

//! The serializable component palette and its per-field merge rules.

use serde::{Deserialize, Serialize};
use skene_core::math::{LinearRgba, Vec2};

use super::definition::{EntityDefinition, EntityRef, EntitySlot};
use crate::ecs::ShapeKind;

/// The set of component definitions an entity definition or a prefab carries.
///
/// Every field is optional: a prefab supplies a base set and a per-instance
/// override supplies a second, and [`ComponentSet::merged_over`] combines
/// them. Components present on only one side pass through unchanged;
/// components present on both sides merge **per field**, so an override can
/// change a shape's color without restating its kind or size.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentSet {
    /// Position and orientation data.
    #[serde(default)]
    pub position: Option<PositionDef>,
    /// Display text.
    #[serde(default)]
    pub label: Option<LabelDef>,
    /// Drawable silhouette.
    #[serde(default)]
    pub shape: Option<ShapeDef>,
    /// View framing on a target entity.
    #[serde(default)]
    pub camera: Option<CameraDef>,
    /// A single attached entity, inline or by reference.
    #[serde(default)]
    pub mount: Option<MountDef>,
    /// A route through inline waypoint entities.
    #[serde(default)]
    pub path: Option<PathDef>,
}

impl ComponentSet {
    /// Merges `self` (the per-instance overrides) over `base` (the prefab's
    /// set), field by field.
    pub fn merged_over(&self, base: &ComponentSet) -> ComponentSet {
        ComponentSet {
            position: merge_component(&self.position, &base.position, PositionDef::merged_over),
            label: merge_component(&self.label, &base.label, LabelDef::merged_over),
            shape: merge_component(&self.shape, &base.shape, ShapeDef::merged_over),
            camera: merge_component(&self.camera, &base.camera, CameraDef::merged_over),
            mount: merge_component(&self.mount, &base.mount, MountDef::merged_over),
            path: merge_component(&self.path, &base.path, PathDef::merged_over),
        }
    }
}

/// Combines one component slot of an override set with the prefab's slot.
///
/// Both present: per-field merge. One present: that one. Neither: `None`.
fn merge_component<T: Clone>(
    over: &Option<T>,
    base: &Option<T>,
    merge: impl Fn(&T, &T) -> T,
) -> Option<T> {
    match (over, base) {
        (Some(o), Some(b)) => Some(merge(o, b)),
        (Some(o), None) => Some(o.clone()),
        (None, Some(b)) => Some(b.clone()),
        (None, None) => None,
    }
}

/// Takes the override's field when supplied, else the base's.
fn merge_field<T: Clone>(over: &Option<T>, base: &Option<T>) -> Option<T> {
    over.clone().or_else(|| base.clone())
}

/// Definition of a `Position` component. All fields default to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionDef {
    /// X coordinate, local to the definition's parent offset. Defaults to `0.0`.
    #[serde(default)]
    pub x: Option<f32>,
    /// Y coordinate, local to the definition's parent offset. Defaults to `0.0`.
    #[serde(default)]
    pub y: Option<f32>,
    /// Orientation in radians. Defaults to `0.0`.
    #[serde(default)]
    pub rotation: Option<f32>,
}

impl PositionDef {
    /// Creates a definition with both coordinates supplied.
    pub fn from_xy(x: f32, y: f32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            rotation: None,
        }
    }

    /// The local translation this definition declares, defaults applied.
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.x.unwrap_or(0.0), self.y.unwrap_or(0.0))
    }

    fn merged_over(&self, base: &Self) -> Self {
        Self {
            x: merge_field(&self.x, &base.x),
            y: merge_field(&self.y, &base.y),
            rotation: merge_field(&self.rotation, &base.rotation),
        }
    }
}

/// Definition of a `Label` component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelDef {
    /// The display text. Defaults to the empty string.
    #[serde(default)]
    pub text: Option<String>,
}

impl LabelDef {
    fn merged_over(&self, base: &Self) -> Self {
        Self {
            text: merge_field(&self.text, &base.text),
        }
    }
}

/// Definition of a `Shape` component.
///
/// `kind` has no default; a merged set that still lacks it is a definition
/// error caught by validation before any entity is created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeDef {
    /// The kind of silhouette. **Required** after merging.
    #[serde(default)]
    pub kind: Option<ShapeKind>,
    /// The extents of the silhouette. Defaults to `(1, 1)`.
    #[serde(default)]
    pub size: Option<Vec2>,
    /// The tint color. Defaults to white.
    #[serde(default)]
    pub color: Option<LinearRgba>,
}

impl ShapeDef {
    fn merged_over(&self, base: &Self) -> Self {
        Self {
            kind: merge_field(&self.kind, &base.kind),
            size: merge_field(&self.size, &base.size),
            color: merge_field(&self.color, &base.color),
        }
    }
}

/// Definition of a `Camera` component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraDef {
    /// The entity the camera tracks. Without a marker the live component
    /// keeps the placeholder handle.
    #[serde(default)]
    pub target: Option<EntityRef>,
    /// The zoom factor. Defaults to `1.0`.
    #[serde(default)]
    pub zoom: Option<f32>,
}

impl CameraDef {
    fn merged_over(&self, base: &Self) -> Self {
        Self {
            target: merge_field(&self.target, &base.target),
            zoom: merge_field(&self.zoom, &base.zoom),
        }
    }
}

/// Definition of a `Mount` component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MountDef {
    /// The attached entity: an inline definition materialized as a child, or
    /// a reference marker patched after the whole scene exists. Without a
    /// slot the live component keeps the placeholder handle.
    #[serde(default)]
    pub attachment: Option<EntitySlot>,
}

impl MountDef {
    fn merged_over(&self, base: &Self) -> Self {
        Self {
            attachment: merge_field(&self.attachment, &base.attachment),
        }
    }
}

/// Definition of a `Path` component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathDef {
    /// Inline definitions of the waypoint entities, in route order.
    /// Defaults to an empty route.
    #[serde(default)]
    pub waypoints: Option<Vec<EntityDefinition>>,
    /// Whether the route loops. Defaults to `false`.
    #[serde(default)]
    pub looped: Option<bool>,
}

impl PathDef {
    fn merged_over(&self, base: &Self) -> Self {
        Self {
            waypoints: merge_field(&self.waypoints, &base.waypoints),
            looped: merge_field(&self.looped, &base.looped),
        }
    }
}
