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

//! On-demand hierarchical world-transform queries.
//!
//! Nothing here is cached: every query is a pure function of the current
//! `Position` and `ParentLink` components, computed by walking the parent
//! chain. The walk is bounded by [`MAX_PARENT_DEPTH`] so a malformed cyclic
//! hierarchy terminates with a warning instead of recursing forever; a
//! tripped ceiling yields "no transform" for the whole query, while a parent
//! that is merely broken (dead handle, no `Position`) degrades to treating
//! the child's local position as its world position.

use skene_core::math::Vec2;
use skene_core::{EntityId, EntityStore};
use skene_data::ecs::{ParentLink, Position};

/// Ceiling on the parent-chain walk.
///
/// A safety net against cyclic `ParentLink` graphs, not a proof of
/// acyclicity; legitimate hierarchies this deep are treated as malformed.
pub const MAX_PARENT_DEPTH: u32 = 32;

/// An entity's position, rotation, and scale in root coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldTransform {
    /// World-space position.
    pub position: Vec2,
    /// World-space rotation, in radians.
    pub rotation: f32,
    /// World-space scale.
    pub scale: Vec2,
}

/// The parent chain exceeded [`MAX_PARENT_DEPTH`]; the whole query yields
/// no transform.
struct DepthExceeded;

/// Computes an entity's world transform by walking its parent chain.
///
/// Returns `None` when the entity has no `Position` component or when the
/// walk trips the depth ceiling. An entity without a `ParentLink` is its own
/// world frame: position and rotation are taken as-is and scale is `(1, 1)`.
pub fn world_transform<S: EntityStore>(store: &S, entity: EntityId) -> Option<WorldTransform> {
    match compute(store, entity, 0) {
        Ok(transform) => transform,
        Err(DepthExceeded) => None,
    }
}

/// Projects [`world_transform`] onto the position alone.
pub fn world_position<S: EntityStore>(store: &S, entity: EntityId) -> Option<Vec2> {
    world_transform(store, entity).map(|t| t.position)
}

/// Moves an entity so that its world position becomes `world`.
///
/// The inverse of the query: for an unparented entity the world position is
/// stored directly; for a parented one the world-space offset from the
/// parent is converted back into the parent's frame (undoing the parent's
/// rotation when rotation is inherited) before being stored as the local
/// position.
///
/// Returns `false` if the entity has no `Position` component to update.
pub fn set_world_position<S: EntityStore>(store: &mut S, entity: EntityId, world: Vec2) -> bool {
    let local = match parent_frame(store, entity) {
        Some((parent_position, parent_rotation, inherit_rotation)) => {
            let offset = world - parent_position;
            if inherit_rotation {
                offset.rotated(-parent_rotation)
            } else {
                offset
            }
        }
        None => world,
    };

    match store.get_component_mut::<Position>(entity) {
        Some(position) => {
            position.translation = local;
            true
        }
        None => false,
    }
}

/// Scalar convenience over [`set_world_position`].
pub fn set_world_position_xy<S: EntityStore>(
    store: &mut S,
    entity: EntityId,
    x: f32,
    y: f32,
) -> bool {
    set_world_position(store, entity, Vec2::new(x, y))
}

/// The frame an entity's local position is expressed in, if it has a usable
/// parent: the parent's world position, world rotation, and whether the
/// child inherits that rotation.
fn parent_frame<S: EntityStore>(store: &S, entity: EntityId) -> Option<(Vec2, f32, bool)> {
    let link = store.get_component::<ParentLink>(entity)?;
    let parent = world_transform(store, link.entity)?;
    Some((parent.position, parent.rotation, link.inherit_rotation))
}

fn compute<S: EntityStore>(
    store: &S,
    entity: EntityId,
    depth: u32,
) -> Result<Option<WorldTransform>, DepthExceeded> {
    if depth > MAX_PARENT_DEPTH {
        log::warn!(
            "Transform: parent chain of entity {}v{} exceeds {MAX_PARENT_DEPTH} links, likely a cycle",
            entity.index,
            entity.generation
        );
        return Err(DepthExceeded);
    }

    let Some(local) = store.get_component::<Position>(entity) else {
        return Ok(None);
    };

    let Some(link) = store.get_component::<ParentLink>(entity) else {
        return Ok(Some(own_frame(local)));
    };

    let parent = match compute(store, link.entity, depth + 1)? {
        Some(parent) => parent,
        // Broken parent: local position acts as world position.
        None => return Ok(Some(own_frame(local))),
    };

    let (position, rotation) = if link.inherit_rotation {
        (
            parent.position + local.translation.rotated(parent.rotation),
            parent.rotation + local.rotation,
        )
    } else {
        (parent.position + local.translation, local.rotation)
    };
    let scale = if link.inherit_scale {
        parent.scale
    } else {
        Vec2::ONE
    };

    Ok(Some(WorldTransform {
        position,
        rotation,
        scale,
    }))
}

fn own_frame(local: &Position) -> WorldTransform {
    WorldTransform {
        position: local.translation,
        rotation: local.rotation,
        scale: Vec2::ONE,
    }
}

/// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use skene_core::math::FRAC_PI_2;
    use skene_data::ecs::WorldStore;

    fn spawn_at(store: &mut WorldStore, x: f32, y: f32, rotation: f32) -> EntityId {
        let entity = store.create_entity();
        store.add_component(
            entity,
            Position {
                translation: Vec2::new(x, y),
                rotation,
            },
        );
        entity
    }

    fn link(store: &mut WorldStore, child: EntityId, parent: EntityId, rot: bool, scale: bool) {
        store.add_component(
            child,
            ParentLink {
                entity: parent,
                inherit_rotation: rot,
                inherit_scale: scale,
            },
        );
    }

    #[test]
    fn test_unparented_entity_is_its_own_frame() {
        let mut store = WorldStore::new();
        let entity = spawn_at(&mut store, 3.0, 4.0, 0.5);

        let transform = world_transform(&store, entity).expect("Should have a transform");

        assert_eq!(transform.position, Vec2::new(3.0, 4.0));
        assert_eq!(transform.rotation, 0.5);
        assert_eq!(transform.scale, Vec2::ONE, "Unparented scale should be unit");
    }

    #[test]
    fn test_entity_without_position_has_no_transform() {
        let mut store = WorldStore::new();
        let entity = store.create_entity();

        assert!(world_transform(&store, entity).is_none());
    }

    #[test]
    fn test_rotated_parent_rotates_the_child_offset() {
        // --- 1. ARRANGE ---
        // Parent at the origin, child 30 units along +X, inheriting rotation.
        let mut store = WorldStore::new();
        let parent = spawn_at(&mut store, 0.0, 0.0, 0.0);
        let child = spawn_at(&mut store, 30.0, 0.0, 0.0);
        link(&mut store, child, parent, true, false);

        // --- 2. ACT ---
        // Rotate the parent a quarter turn.
        store
            .get_component_mut::<Position>(parent)
            .expect("The parent should have a Position")
            .rotation = FRAC_PI_2;
        let transform = world_transform(&store, child).expect("Should have a transform");

        // --- 3. ASSERT ---
        // The +X offset becomes a +Y offset.
        assert_relative_eq!(transform.position.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(transform.position.y, 30.0, epsilon = 1e-5);
        assert_relative_eq!(transform.rotation, FRAC_PI_2, epsilon = 1e-5);
    }

    #[test]
    fn test_uninherited_rotation_leaves_the_offset_alone() {
        let mut store = WorldStore::new();
        let parent = spawn_at(&mut store, 10.0, 0.0, FRAC_PI_2);
        let child = spawn_at(&mut store, 5.0, 0.0, 0.25);
        link(&mut store, child, parent, false, false);

        let transform = world_transform(&store, child).expect("Should have a transform");

        assert_eq!(
            transform.position,
            Vec2::new(15.0, 0.0),
            "The offset should add unrotated"
        );
        assert_eq!(
            transform.rotation, 0.25,
            "The child should keep its local rotation"
        );
    }

    #[test]
    fn test_inherited_scale_is_copied_not_composed() {
        // Scale passes through the chain: grandchild sees the root's unit
        // scale via its parent, not a product of locals.
        let mut store = WorldStore::new();
        let root = spawn_at(&mut store, 0.0, 0.0, 0.0);
        let mid = spawn_at(&mut store, 1.0, 0.0, 0.0);
        let leaf = spawn_at(&mut store, 1.0, 0.0, 0.0);
        link(&mut store, mid, root, false, true);
        link(&mut store, leaf, mid, false, true);

        let transform = world_transform(&store, leaf).expect("Should have a transform");
        assert_eq!(transform.scale, Vec2::ONE);

        // Opting out yields unit scale as well, by definition.
        link(&mut store, leaf, mid, false, false);
        let transform = world_transform(&store, leaf).expect("Should have a transform");
        assert_eq!(transform.scale, Vec2::ONE);
    }

    #[test]
    fn test_broken_parent_falls_back_to_local_as_world() {
        // The parent exists but has no Position; the child degrades instead
        // of failing.
        let mut store = WorldStore::new();
        let parent = store.create_entity();
        let child = spawn_at(&mut store, 7.0, 8.0, 0.0);
        link(&mut store, child, parent, true, true);

        let transform = world_transform(&store, child).expect("Should have a transform");

        assert_eq!(transform.position, Vec2::new(7.0, 8.0));
        assert_eq!(transform.scale, Vec2::ONE);
    }

    #[test]
    fn test_dead_parent_handle_falls_back_to_local_as_world() {
        let mut store = WorldStore::new();
        let parent = spawn_at(&mut store, 100.0, 100.0, 0.0);
        let child = spawn_at(&mut store, 7.0, 8.0, 0.0);
        link(&mut store, child, parent, true, false);
        store.destroy_entity(parent);

        let transform = world_transform(&store, child).expect("Should have a transform");

        assert_eq!(transform.position, Vec2::new(7.0, 8.0));
    }

    #[test]
    fn test_cycle_terminates_with_no_transform() {
        // Two entities parented to each other: the ceiling must stop the
        // walk and the whole query must yield None, not a fallback.
        let mut store = WorldStore::new();
        let a = spawn_at(&mut store, 1.0, 0.0, 0.0);
        let b = spawn_at(&mut store, 2.0, 0.0, 0.0);
        link(&mut store, a, b, true, false);
        link(&mut store, b, a, true, false);

        assert!(world_transform(&store, a).is_none());
        assert!(world_transform(&store, b).is_none());
    }

    #[test]
    fn test_chain_deeper_than_the_ceiling_yields_no_transform() {
        let mut store = WorldStore::new();
        let mut previous = spawn_at(&mut store, 0.0, 0.0, 0.0);
        let mut deepest = previous;
        for _ in 0..40 {
            let next = spawn_at(&mut store, 1.0, 0.0, 0.0);
            link(&mut store, next, previous, false, false);
            previous = next;
            deepest = next;
        }

        assert!(
            world_transform(&store, deepest).is_none(),
            "An over-deep chain should yield no transform"
        );
    }

    #[test]
    fn test_set_world_position_round_trips_unparented() {
        let mut store = WorldStore::new();
        let entity = spawn_at(&mut store, 0.0, 0.0, 0.0);

        assert!(set_world_position(&mut store, entity, Vec2::new(10.0, 20.0)));

        assert_eq!(
            world_position(&store, entity),
            Some(Vec2::new(10.0, 20.0)),
            "An unparented entity should round-trip exactly"
        );
    }

    #[test]
    fn test_set_world_position_inverts_a_rotated_parent() {
        let mut store = WorldStore::new();
        let parent = spawn_at(&mut store, 10.0, 0.0, FRAC_PI_2);
        let child = spawn_at(&mut store, 0.0, 0.0, 0.0);
        link(&mut store, child, parent, true, false);

        assert!(set_world_position_xy(&mut store, child, 10.0, 30.0));

        // (10, 30) is 30 units above the parent; undoing the parent's
        // quarter turn stores that as +30 along local X.
        let local = store
            .get_component::<Position>(child)
            .expect("The child should have a Position");
        assert_relative_eq!(local.translation.x, 30.0, epsilon = 1e-4);
        assert_relative_eq!(local.translation.y, 0.0, epsilon = 1e-4);

        let world = world_position(&store, child).expect("Should have a position");
        assert_relative_eq!(world.x, 10.0, epsilon = 1e-4);
        assert_relative_eq!(world.y, 30.0, epsilon = 1e-4);
    }

    #[test]
    fn test_set_world_position_without_position_component_is_refused() {
        let mut store = WorldStore::new();
        let entity = store.create_entity();

        assert!(!set_world_position_xy(&mut store, entity, 1.0, 2.0));
    }
}
