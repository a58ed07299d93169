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

//! # Skene Stage
//!
//! The scene instantiation engine: turns a static [`SceneDescription`]
//! into live entities in any [`EntityStore`], resolves forward and backward
//! named references in a second pass once every entity exists, and answers
//! hierarchical world-transform queries on demand.
//!
//! Loading is synchronous and single-threaded. [`load`] runs three phases:
//! validation (definition errors abort before any entity is created),
//! materialization (entities and components come alive, unresolvable links
//! are queued), and resolution (the queues drain against the now-complete
//! name and id tables). Dangling references degrade a single field and are
//! reported as [`LoadWarning`]s on the returned [`Scene`]; they never fail
//! the load.
//!
//! [`SceneDescription`]: skene_data::scene::SceneDescription
//! [`EntityStore`]: skene_core::EntityStore

#![warn(missing_docs)]

pub mod instantiate;
pub mod transform;

pub use instantiate::{load, LoadError, LoadWarning, Scene};
pub use transform::{
    set_world_position, set_world_position_xy, world_position, world_transform, WorldTransform,
    MAX_PARENT_DEPTH,
};
