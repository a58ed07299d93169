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

//! The materialization pass: one live entity per definition, depth-first.
//!
//! Materialization creates entities and components and registers names and
//! ids as it goes, but it never resolves a reference: any field whose target
//! might not exist yet gets the placeholder handle and a queue entry. Inline
//! child definitions are the exception, since materializing them yields
//! their handle on the spot.

use skene_core::math::{LinearRgba, Vec2};
use skene_core::{EntityId, EntityStore};
use skene_data::ecs::{Camera, GizmoTag, Label, Mount, Path, Position, Shape};
use skene_data::scene::{EntityDefinition, EntitySlot, PrefabLibrary, ShapeDef};

use super::context::ReferenceContext;
use super::error::LoadError;
use super::validate;

/// Materializes one definition into `store`, recursing into inline child
/// definitions with this entity's absolute position as their offset.
///
/// `offset` is the accumulated parent position; the entity's stored
/// `Position` is its local position plus `offset`, so nested children land
/// in absolute coordinates. `label` is the definition's diagnostic path.
/// Every created entity (this one, inline children, gizmos) is appended to
/// `created` in creation order.
pub(crate) fn materialize_entity<S: EntityStore>(
    store: &mut S,
    ctx: &mut ReferenceContext<S>,
    prefabs: &PrefabLibrary,
    def: &EntityDefinition,
    offset: Vec2,
    label: &str,
    created: &mut Vec<EntityId>,
) -> Result<EntityId, LoadError> {
    let (set, gizmos) = validate::merged_set(def, prefabs, label)?;

    let entity = store.create_entity();
    created.push(entity);
    log::trace!(
        "Materializer: '{label}' -> entity {}v{}",
        entity.index,
        entity.generation
    );

    if let Some(name) = &def.name {
        ctx.register_name(name, entity);
    }
    if let Some(id) = &def.id {
        ctx.register_id(id, entity);
    }

    // Absolute position of this entity, also the offset for its children.
    let local = set
        .position
        .as_ref()
        .map(|p| p.translation())
        .unwrap_or(Vec2::ZERO);
    let absolute = offset + local;

    if let Some(position) = &set.position {
        store.add_component(
            entity,
            Position {
                translation: absolute,
                rotation: position.rotation.unwrap_or(0.0),
            },
        );
    }

    if let Some(label_def) = &set.label {
        store.add_component(
            entity,
            Label::new(label_def.text.clone().unwrap_or_default()),
        );
    }

    if let Some(shape) = &set.shape {
        store.add_component(entity, build_shape(shape, label)?);
    }

    if let Some(camera) = &set.camera {
        store.add_component(
            entity,
            Camera {
                target: EntityId::PLACEHOLDER,
                zoom: camera.zoom.unwrap_or(1.0),
            },
        );
        if let Some(target) = &camera.target {
            ctx.defer_ref(entity, target.clone(), set_camera_target::<S>);
        }
    }

    if let Some(mount) = &set.mount {
        let attachment = match &mount.attachment {
            Some(EntitySlot::Inline(child)) => {
                let child_label =
                    validate::entity_label(child, &format!("{label}/mount.attachment"));
                materialize_entity(store, ctx, prefabs, child, absolute, &child_label, created)?
            }
            Some(EntitySlot::Ref(marker)) => {
                ctx.defer_ref(entity, marker.clone(), set_mount_attachment::<S>);
                EntityId::PLACEHOLDER
            }
            None => EntityId::PLACEHOLDER,
        };
        store.add_component(entity, Mount { attachment });
    }

    if let Some(path) = &set.path {
        let declared = path.waypoints.as_deref().unwrap_or(&[]);
        let mut waypoints = Vec::with_capacity(declared.len());
        for (index, waypoint) in declared.iter().enumerate() {
            let child_label =
                validate::entity_label(waypoint, &format!("{label}/path.waypoints[{index}]"));
            waypoints.push(materialize_entity(
                store,
                ctx,
                prefabs,
                waypoint,
                absolute,
                &child_label,
                created,
            )?);
        }
        store.add_component(
            entity,
            Path {
                waypoints,
                looped: path.looped.unwrap_or(false),
            },
        );
    }

    if let Some(spec) = &def.parent {
        ctx.defer_parent(entity, &spec.key, spec.inherit_rotation, spec.inherit_scale);
    }

    for gizmo in gizmos {
        let gizmo_entity = store.create_entity();
        created.push(gizmo_entity);
        store.add_component(
            gizmo_entity,
            GizmoTag {
                owner: entity,
                offset: gizmo.offset,
            },
        );
        if let Some(shape) = &gizmo.shape {
            store.add_component(gizmo_entity, build_shape(shape, label)?);
        }
    }

    Ok(entity)
}

fn build_shape(def: &ShapeDef, label: &str) -> Result<Shape, LoadError> {
    // Validation has already rejected a missing kind; kept as an error path
    // so the materializer holds its own invariants.
    let kind = def.kind.ok_or_else(|| LoadError::MissingField {
        entity: label.to_owned(),
        field: "shape.kind".to_owned(),
    })?;
    Ok(Shape {
        kind,
        size: def.size.unwrap_or(Vec2::ONE),
        color: def.color.unwrap_or(LinearRgba::WHITE),
    })
}

// --- Field setters ---
//
// One function per reference-valued (component, field) pair. The resolution
// pass calls these through the queued `fn` pointers; an owner that has lost
// the component in the meantime is a no-op.

fn set_camera_target<S: EntityStore>(store: &mut S, owner: EntityId, resolved: EntityId) {
    if let Some(camera) = store.get_component_mut::<Camera>(owner) {
        camera.target = resolved;
    }
}

fn set_mount_attachment<S: EntityStore>(store: &mut S, owner: EntityId, resolved: EntityId) {
    if let Some(mount) = store.get_component_mut::<Mount>(owner) {
        mount.attachment = resolved;
    }
}
