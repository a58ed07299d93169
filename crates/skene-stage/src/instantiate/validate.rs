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

//! The validation pass: definition errors fail before any entity exists.

use skene_data::scene::{
    ComponentSet, EntityDefinition, EntitySlot, EntitySource, GizmoDef, PrefabLibrary,
    SceneDescription,
};

use super::error::LoadError;

/// Structural ceiling on inline-definition nesting.
///
/// Guards against a prefab whose component set inlines an entity using that
/// same prefab, which would otherwise expand forever.
pub const MAX_DEFINITION_DEPTH: usize = 32;

/// Walks the whole description tree and checks every definition error the
/// load can raise: unknown prefab names, merged component sets missing a
/// required field, and runaway nesting.
///
/// Runs before materialization, so a failing load creates zero entities.
pub(crate) fn validate(
    description: &SceneDescription,
    prefabs: &PrefabLibrary,
) -> Result<(), LoadError> {
    for (index, def) in description.entities.iter().enumerate() {
        let label = entity_label(def, &format!("entities[{index}]"));
        validate_definition(def, prefabs, &label, 0)?;
    }
    Ok(())
}

/// Human-readable label for a definition: its name, else its id, else the
/// positional path supplied by the caller.
pub(crate) fn entity_label(def: &EntityDefinition, fallback: &str) -> String {
    def.name
        .clone()
        .or_else(|| def.id.clone())
        .unwrap_or_else(|| fallback.to_owned())
}

/// Resolves a definition's component source into one merged set plus its
/// gizmo entries. The only failure is a prefab name the library lacks.
pub(crate) fn merged_set<'a>(
    def: &'a EntityDefinition,
    prefabs: &PrefabLibrary,
    label: &str,
) -> Result<(ComponentSet, &'a [GizmoDef]), LoadError> {
    match &def.source {
        EntitySource::Prefab { prefab, overrides } => {
            let base = prefabs.get(prefab).ok_or_else(|| LoadError::UnknownPrefab {
                entity: label.to_owned(),
                prefab: prefab.clone(),
            })?;
            Ok((overrides.merged_over(base), &[]))
        }
        EntitySource::Components { components, gizmos } => Ok((components.clone(), gizmos)),
    }
}

fn validate_definition(
    def: &EntityDefinition,
    prefabs: &PrefabLibrary,
    label: &str,
    depth: usize,
) -> Result<(), LoadError> {
    if depth > MAX_DEFINITION_DEPTH {
        return Err(LoadError::DefinitionTooDeep {
            entity: label.to_owned(),
        });
    }

    let (set, gizmos) = merged_set(def, prefabs, label)?;

    if let Some(shape) = &set.shape {
        if shape.kind.is_none() {
            return Err(LoadError::MissingField {
                entity: label.to_owned(),
                field: "shape.kind".to_owned(),
            });
        }
    }

    if let Some(mount) = &set.mount {
        if let Some(EntitySlot::Inline(child)) = &mount.attachment {
            let child_label = entity_label(child, &format!("{label}/mount.attachment"));
            validate_definition(child, prefabs, &child_label, depth + 1)?;
        }
    }

    if let Some(path) = &set.path {
        for (index, waypoint) in path.waypoints.iter().flatten().enumerate() {
            let child_label =
                entity_label(waypoint, &format!("{label}/path.waypoints[{index}]"));
            validate_definition(waypoint, prefabs, &child_label, depth + 1)?;
        }
    }

    for (index, gizmo) in gizmos.iter().enumerate() {
        if let Some(shape) = &gizmo.shape {
            if shape.kind.is_none() {
                return Err(LoadError::MissingField {
                    entity: label.to_owned(),
                    field: format!("gizmos[{index}].shape.kind"),
                });
            }
        }
    }

    Ok(())
}

/// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use skene_data::ecs::ShapeKind;
    use skene_data::scene::{MountDef, ShapeDef};

    fn scene_of(entities: Vec<EntityDefinition>) -> SceneDescription {
        SceneDescription {
            name: "test".into(),
            entities,
        }
    }

    #[test]
    fn test_unknown_prefab_is_fatal() {
        let scene = scene_of(vec![EntityDefinition::from_prefab("ghost")]);

        let err = validate(&scene, &PrefabLibrary::new()).unwrap_err();

        assert_eq!(
            err,
            LoadError::UnknownPrefab {
                entity: "entities[0]".into(),
                prefab: "ghost".into(),
            }
        );
    }

    #[test]
    fn test_missing_shape_kind_is_fatal() {
        let mut def = EntityDefinition::from_components(ComponentSet {
            shape: Some(ShapeDef::default()),
            ..Default::default()
        });
        def.name = Some("blob".into());

        let err = validate(&scene_of(vec![def]), &PrefabLibrary::new()).unwrap_err();

        assert_eq!(
            err,
            LoadError::MissingField {
                entity: "blob".into(),
                field: "shape.kind".into(),
            }
        );
    }

    #[test]
    fn test_prefab_can_satisfy_a_required_field() {
        // The override omits the kind; the prefab's kind fills it in.
        let mut prefabs = PrefabLibrary::new();
        prefabs.insert(
            "dot",
            ComponentSet {
                shape: Some(ShapeDef {
                    kind: Some(ShapeKind::Circle),
                    ..Default::default()
                }),
                ..Default::default()
            },
        );
        let scene = scene_of(vec![EntityDefinition::from_prefab("dot")]);

        assert!(validate(&scene, &prefabs).is_ok());
    }

    #[test]
    fn test_self_referential_prefab_hits_the_depth_ceiling() {
        // A prefab that mounts an instance of itself expands forever; the
        // ceiling turns that into a definition error.
        let mut prefabs = PrefabLibrary::new();
        prefabs.insert(
            "matryoshka",
            ComponentSet {
                mount: Some(MountDef {
                    attachment: Some(EntitySlot::Inline(Box::new(
                        EntityDefinition::from_prefab("matryoshka"),
                    ))),
                }),
                ..Default::default()
            },
        );
        let scene = scene_of(vec![EntityDefinition::from_prefab("matryoshka")]);

        let err = validate(&scene, &prefabs).unwrap_err();

        assert!(
            matches!(err, LoadError::DefinitionTooDeep { .. }),
            "Expected the depth ceiling, got {err:?}"
        );
    }

    #[test]
    fn test_nested_error_carries_a_positional_path() {
        let waypoint = EntityDefinition::from_components(ComponentSet {
            shape: Some(ShapeDef::default()),
            ..Default::default()
        });
        let mut def = EntityDefinition::from_components(ComponentSet {
            path: Some(skene_data::scene::PathDef {
                waypoints: Some(vec![waypoint]),
                looped: None,
            }),
            ..Default::default()
        });
        def.name = Some("patrol".into());

        let err = validate(&scene_of(vec![def]), &PrefabLibrary::new()).unwrap_err();

        assert_eq!(
            err,
            LoadError::MissingField {
                entity: "patrol/path.waypoints[0]".into(),
                field: "shape.kind".into(),
            }
        );
    }
}
