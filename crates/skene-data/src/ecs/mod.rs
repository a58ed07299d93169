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

//! The live component set and the reference storage backend.
//!
//! [`WorldStore`] is a deliberately small implementation of the
//! `skene_core::EntityStore` contract: generation-checked handles, a free
//! list for index recycling, and one component column per component type.
//! The instantiation pipeline never depends on it directly; anything that
//! implements the trait will do.

mod components;
mod world;

pub use components::*;
pub use skene_core::ecs::{Component, EntityId, EntityStore};
pub use world::*;
