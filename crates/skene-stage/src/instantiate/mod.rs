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

//! Scene instantiation: validation, materialization, and resolution.

mod context;
mod error;
mod materializer;
mod resolve;
mod scene;
mod validate;

pub use error::{LoadError, LoadWarning};
pub use scene::Scene;
pub use validate::MAX_DEFINITION_DEPTH;

use skene_core::math::Vec2;
use skene_core::EntityStore;
use skene_data::scene::{PrefabLibrary, SceneDescription};

use context::ReferenceContext;

/// Loads a scene description into `store`.
///
/// Runs the three phases in order:
///
/// 1. **Validation** walks the whole description tree (prefab merges, nested
///    definitions, gizmos) and fails fast on definition errors, so a failed
///    load creates zero entities.
/// 2. **Materialization** walks the tree depth-first, creating one entity
///    per definition, registering names and ids, and queuing every link
///    whose target may not exist yet.
/// 3. **Resolution** drains the queues against the complete tables, patching
///    reference fields and attaching parent links.
///
/// Unresolvable references and parent keys degrade to warnings on the
/// returned [`Scene`]; only definition errors make `load` fail.
pub fn load<S: EntityStore>(
    store: &mut S,
    description: &SceneDescription,
    prefabs: &PrefabLibrary,
) -> Result<Scene, LoadError> {
    validate::validate(description, prefabs)?;

    let mut ctx = ReferenceContext::new();
    let mut created = Vec::new();
    for (index, def) in description.entities.iter().enumerate() {
        let label = validate::entity_label(def, &format!("entities[{index}]"));
        materializer::materialize_entity(
            store,
            &mut ctx,
            prefabs,
            def,
            Vec2::ZERO,
            &label,
            &mut created,
        )?;
    }

    let warnings = resolve::resolve(store, ctx);
    log::debug!(
        "Scene '{}': loaded {} entities, {} warning(s)",
        description.name,
        created.len(),
        warnings.len()
    );

    Ok(Scene::new(description.name.clone(), created, warnings))
}
