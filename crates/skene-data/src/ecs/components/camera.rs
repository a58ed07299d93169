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

/// A component that frames the view on a target entity.
///
/// `target` is written as [`EntityId::PLACEHOLDER`] during materialization
/// and patched by the resolution pass once every entity exists. A target
/// that cannot be resolved keeps the placeholder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// The entity the camera tracks.
    pub target: EntityId,
    /// The zoom factor (`1.0` = no zoom).
    pub zoom: f32,
}

impl Component for Camera {}
