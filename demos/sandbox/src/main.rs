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

// Skene sandbox: loads the bundled orrery scene, prints what came alive,
// then exercises the transform queries on the loaded hierarchy.

use anyhow::Result;
use skene_core::math::FRAC_PI_2;
use skene_core::{EntityId, EntityStore};
use skene_data::ecs::{Camera, GizmoTag, Label, ParentLink, Position, WorldStore};
use skene_data::scene::{ComponentSet, PrefabLibrary, SceneDescription, ShapeDef};
use skene_stage::{load, world_transform};

const ORRERY_RON: &str = include_str!("../scenes/orrery.ron");

fn main() -> Result<()> {
    env_logger::init();

    let description = SceneDescription::from_ron(ORRERY_RON)?;
    log::info!(
        "Sandbox: parsed scene description '{}' ({} top-level entities)",
        description.name,
        description.entities.len()
    );
    let prefabs = build_prefabs();
    let mut store = WorldStore::new();

    let scene = load(&mut store, &description, &prefabs)?;
    log::info!(
        "Sandbox: scene '{}' loaded with {} entities and {} warning(s)",
        scene.name(),
        scene.entities().len(),
        scene.warnings().len()
    );
    println!(
        "Loaded scene '{}': {} entities, clean = {}",
        scene.name(),
        scene.entities().len(),
        scene.is_clean()
    );
    for warning in scene.warnings() {
        println!("  warning: {warning}");
    }

    println!("\nEntities:");
    for &entity in scene.entities() {
        describe(&store, entity);
    }

    // Swing the sun a quarter turn; everything that inherits rotation
    // follows, moon included (it orbits the planet, which orbits the sun).
    if let Some(&sun) = scene.entities().get(1) {
        if let Some(position) = store.get_component_mut::<Position>(sun) {
            position.rotation = FRAC_PI_2;
        }
        println!("\nAfter rotating the sun a quarter turn:");
        for &entity in scene.entities() {
            describe(&store, entity);
        }
    }

    scene.unload(&mut store);
    log::info!("Sandbox: scene unloaded");
    println!("\nScene unloaded, store is empty: {}", store.is_empty());

    Ok(())
}

fn build_prefabs() -> PrefabLibrary {
    let mut prefabs = PrefabLibrary::new();
    prefabs.insert(
        "rocky-body",
        ComponentSet {
            shape: Some(ShapeDef {
                kind: Some(skene_data::ecs::ShapeKind::Circle),
                size: Some(skene_core::math::Vec2::new(8.0, 8.0)),
                ..Default::default()
            }),
            ..Default::default()
        },
    );
    prefabs
}

fn describe(store: &WorldStore, entity: EntityId) {
    let label = store
        .get_component::<Label>(entity)
        .map(|l| l.text.clone())
        .unwrap_or_else(|| format!("entity {}v{}", entity.index, entity.generation));

    if let Some(transform) = world_transform(store, entity) {
        let parented = store.get_component::<ParentLink>(entity).is_some();
        println!(
            "  {label}: world ({:.1}, {:.1}), rotation {:.2} rad{}",
            transform.position.x,
            transform.position.y,
            transform.rotation,
            if parented { ", parented" } else { "" }
        );
    } else if let Some(tag) = store.get_component::<GizmoTag>(entity) {
        println!(
            "  {label}: gizmo of {}v{} at offset ({:.1}, {:.1})",
            tag.owner.index, tag.owner.generation, tag.offset.x, tag.offset.y
        );
    } else if let Some(camera) = store.get_component::<Camera>(entity) {
        let target = if camera.target.is_placeholder() {
            "<unresolved>".to_string()
        } else {
            format!("{}v{}", camera.target.index, camera.target.generation)
        };
        println!("  {label}: camera on {target}, zoom {:.1}", camera.zoom);
    } else {
        println!("  {label}: no transform");
    }
}
