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

//! The per-load lookup tables and deferred-resolution queues.

use std::collections::HashMap;

use skene_core::EntityId;
use skene_data::scene::EntityRef;

use super::error::LoadWarning;

/// Patches one reference-valued component field on `owner` with the
/// resolved handle.
///
/// One function exists per (component, field) pair — a small, static vtable
/// standing in for per-field callbacks. Plain function pointers keep
/// `PendingRef` `Copy`-cheap and allocation-free.
pub(crate) type RefSetter<S> = fn(store: &mut S, owner: EntityId, resolved: EntityId);

/// A reference field captured during materialization for later patching.
pub(crate) struct PendingRef<S> {
    /// The entity whose component holds the field.
    pub owner: EntityId,
    /// The marker to resolve.
    pub key: EntityRef,
    /// Writes the resolved handle into the exact field.
    pub setter: RefSetter<S>,
}

/// A parent attachment captured during materialization.
pub(crate) struct PendingParent {
    /// The entity to parent.
    pub child: EntityId,
    /// Resolved by id first, then by display name.
    pub key: String,
    /// Inherit flag for the parent's world rotation.
    pub inherit_rotation: bool,
    /// Inherit flag for the parent's world scale.
    pub inherit_scale: bool,
}

/// The state of one scene load: two name-spaces and two work queues.
///
/// Created when a load starts, filled during materialization, consumed by
/// the resolution pass, and dropped. It never outlives the load, and nothing
/// outside the load holds a reference to it.
pub(crate) struct ReferenceContext<S> {
    named: HashMap<String, EntityId>,
    by_id: HashMap<String, EntityId>,
    pub(crate) pending_refs: Vec<PendingRef<S>>,
    pub(crate) pending_parents: Vec<PendingParent>,
    warnings: Vec<LoadWarning>,
}

impl<S> ReferenceContext<S> {
    pub(crate) fn new() -> Self {
        Self {
            named: HashMap::new(),
            by_id: HashMap::new(),
            pending_refs: Vec::new(),
            pending_parents: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Registers an entity under its display name. Names are unscoped; a
    /// repeated name silently shadows the earlier entity for resolution.
    pub(crate) fn register_name(&mut self, name: &str, entity: EntityId) {
        if self.named.insert(name.to_owned(), entity).is_some() {
            log::debug!("ReferenceContext: name '{name}' shadows an earlier entity");
        }
    }

    /// Registers an entity under its unique id. A duplicate id warns and
    /// overwrites; the second registration wins.
    pub(crate) fn register_id(&mut self, id: &str, entity: EntityId) {
        if self.by_id.insert(id.to_owned(), entity).is_some() {
            log::warn!("ReferenceContext: id '{id}' registered more than once, the last one wins");
            self.warnings.push(LoadWarning::DuplicateId { id: id.to_owned() });
        }
    }

    /// Queues a reference field for the resolution pass.
    pub(crate) fn defer_ref(&mut self, owner: EntityId, key: EntityRef, setter: RefSetter<S>) {
        self.pending_refs.push(PendingRef { owner, key, setter });
    }

    /// Queues a parent attachment for the resolution pass.
    pub(crate) fn defer_parent(
        &mut self,
        child: EntityId,
        key: &str,
        inherit_rotation: bool,
        inherit_scale: bool,
    ) {
        self.pending_parents.push(PendingParent {
            child,
            key: key.to_owned(),
            inherit_rotation,
            inherit_scale,
        });
    }

    /// Resolves a reference marker against the completed tables.
    ///
    /// A self-reference resolves to `owner` without consulting any table.
    pub(crate) fn lookup(&self, key: &EntityRef, owner: EntityId) -> Option<EntityId> {
        match key {
            EntityRef::SelfRef => Some(owner),
            EntityRef::Id(id) => self.by_id.get(id).copied(),
            EntityRef::Named(name) => self.named.get(name).copied(),
        }
    }

    /// Resolves a parent key: the id table first, the name table second, so
    /// an id wins when a key exists in both spaces.
    pub(crate) fn lookup_parent_key(&self, key: &str) -> Option<EntityId> {
        self.by_id
            .get(key)
            .or_else(|| self.named.get(key))
            .copied()
    }

    /// Records a non-fatal degradation.
    pub(crate) fn push_warning(&mut self, warning: LoadWarning) {
        self.warnings.push(warning);
    }

    /// Hands the accumulated warnings to the caller.
    pub(crate) fn take_warnings(&mut self) -> Vec<LoadWarning> {
        std::mem::take(&mut self.warnings)
    }
}

/// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    // The context never touches the store itself, so a unit store suffices.
    type Ctx = ReferenceContext<()>;

    fn id(index: u32) -> EntityId {
        EntityId {
            index,
            generation: 0,
        }
    }

    #[test]
    fn test_last_name_registration_wins() {
        let mut ctx = Ctx::new();
        ctx.register_name("k", id(1));
        ctx.register_name("k", id(2));

        assert_eq!(
            ctx.lookup(&EntityRef::Named("k".into()), id(9)),
            Some(id(2)),
            "The most recent name registration should win"
        );
        assert!(
            ctx.take_warnings().is_empty(),
            "Name shadowing should not produce a warning"
        );
    }

    #[test]
    fn test_duplicate_id_warns_and_overwrites() {
        let mut ctx = Ctx::new();
        ctx.register_id("k", id(1));
        ctx.register_id("k", id(2));

        assert_eq!(
            ctx.lookup(&EntityRef::Id("k".into()), id(9)),
            Some(id(2)),
            "The second id registration should win"
        );
        assert_eq!(
            ctx.take_warnings(),
            vec![LoadWarning::DuplicateId { id: "k".into() }]
        );
    }

    #[test]
    fn test_self_ref_ignores_tables() {
        let mut ctx = Ctx::new();
        ctx.register_name("k", id(1));
        ctx.register_id("k", id(2));

        assert_eq!(
            ctx.lookup(&EntityRef::SelfRef, id(9)),
            Some(id(9)),
            "A self-reference should resolve to the owner"
        );
    }

    #[test]
    fn test_parent_key_prefers_id_over_name() {
        let mut ctx = Ctx::new();
        ctx.register_name("k", id(1));
        ctx.register_id("k", id(2));

        assert_eq!(
            ctx.lookup_parent_key("k"),
            Some(id(2)),
            "The id table should win when a key exists in both spaces"
        );
    }

    #[test]
    fn test_parent_key_falls_back_to_name() {
        let mut ctx = Ctx::new();
        ctx.register_name("k", id(1));

        assert_eq!(ctx.lookup_parent_key("k"), Some(id(1)));
        assert_eq!(ctx.lookup_parent_key("absent"), None);
    }
}
