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
use skene_core::math::Vec2;

/// A component marking an auxiliary editor or debug entity.
///
/// Gizmo entities are created alongside their owner during materialization.
/// They carry no `Position` and never join the transform hierarchy; a debug
/// renderer draws them at the owner's world position plus `offset`. They
/// also never register a name or id, so nothing can reference them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GizmoTag {
    /// The entity this gizmo annotates.
    pub owner: EntityId,
    /// Offset from the owner's world position.
    pub offset: Vec2,
}

impl Component for GizmoTag {}
