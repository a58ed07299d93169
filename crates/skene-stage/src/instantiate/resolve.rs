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

//! The resolution pass: drains the pending queues against complete tables.

use skene_core::EntityStore;
use skene_data::ecs::ParentLink;

use super::context::ReferenceContext;
use super::error::LoadWarning;

/// Resolves every queued reference and parent link.
///
/// Runs once, after the whole scene is materialized, so every name and id is
/// registered and declaration order cannot affect the outcome. The context
/// is consumed; it never survives the load.
///
/// Misses degrade: an unresolved reference leaves its field at the
/// placeholder handle, an unresolved parent key leaves the child unparented,
/// and both are logged and recorded as warnings.
pub(crate) fn resolve<S: EntityStore>(
    store: &mut S,
    mut ctx: ReferenceContext<S>,
) -> Vec<LoadWarning> {
    let pending_refs = std::mem::take(&mut ctx.pending_refs);
    for pending in pending_refs {
        match ctx.lookup(&pending.key, pending.owner) {
            Some(resolved) => (pending.setter)(store, pending.owner, resolved),
            None => {
                let key = pending.key.key().to_owned();
                log::warn!(
                    "Resolution: reference '{key}' on entity {}v{} matches nothing, field left unset",
                    pending.owner.index,
                    pending.owner.generation
                );
                ctx.push_warning(LoadWarning::UnresolvedReference {
                    owner: pending.owner,
                    key,
                });
            }
        }
    }

    let pending_parents = std::mem::take(&mut ctx.pending_parents);
    for pending in pending_parents {
        match ctx.lookup_parent_key(&pending.key) {
            Some(parent) => {
                store.add_component(
                    pending.child,
                    ParentLink {
                        entity: parent,
                        inherit_rotation: pending.inherit_rotation,
                        inherit_scale: pending.inherit_scale,
                    },
                );
            }
            None => {
                log::warn!(
                    "Resolution: parent key '{}' of entity {}v{} matches nothing, child left unparented",
                    pending.key,
                    pending.child.index,
                    pending.child.generation
                );
                ctx.push_warning(LoadWarning::UnresolvedParent {
                    child: pending.child,
                    key: pending.key,
                });
            }
        }
    }

    ctx.take_warnings()
}
