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

//! The static, serializable scene description model.
//!
//! A [`SceneDescription`] is the fully-known-in-advance tree of entity and
//! component data the instantiation pipeline materializes into live
//! entities. It is decoupled from the live component types: every component
//! here is a `…Def` struct of `Option` fields so prefab overrides can merge
//! per field, and entity-valued fields carry either inline definitions or
//! name/id reference markers resolved after the whole scene exists.

mod definition;
mod prefab;
mod set;

pub use definition::*;
pub use prefab::*;
pub use set::*;
