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

use crate::ecs::{Component, EntityId};

/// A component that establishes a parent-child relationship.
///
/// When an entity has a `ParentLink`, its `Position` is considered relative
/// to the entity named here, and the world-transform queries compose the
/// two. The inherit flags choose which parts of the parent's world transform
/// apply to the child.
///
/// The resolution pass attaches this component; definitions only carry the
/// parent's key and flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentLink {
    /// The parent entity.
    pub entity: EntityId,
    /// Whether the parent's world rotation rotates this entity's local
    /// offset and adds into its world rotation.
    pub inherit_rotation: bool,
    /// Whether the parent's world scale is adopted as this entity's world
    /// scale.
    pub inherit_scale: bool,
}

impl Component for ParentLink {}
