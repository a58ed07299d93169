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

/// A component describing a route through waypoint entities.
///
/// Waypoints are declared inline in the scene description and materialized
/// as entities of their own; this component keeps their handles in route
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    /// Handles of the waypoint entities, in route order.
    pub waypoints: Vec<EntityId>,
    /// Whether the route loops back to the first waypoint.
    pub looped: bool,
}

impl Component for Path {}
