use criterion::{black_box, criterion_group, criterion_main, Criterion};
use skene_data::ecs::WorldStore;
use skene_data::scene::{
    ComponentSet, EntityDefinition, ParentSpec, PositionDef, PrefabLibrary, SceneDescription,
    ShapeDef,
};
use skene_stage::load;

/// Builds a flat scene where every odd entity is parented to the next named
/// entity, so half of the parent links are forward references.
fn build_description(count: usize) -> SceneDescription {
    let mut entities = Vec::with_capacity(count);
    for i in 0..count {
        let mut def = EntityDefinition::from_components(ComponentSet {
            position: Some(PositionDef::from_xy(i as f32, 0.0)),
            ..Default::default()
        });
        if i % 2 == 0 {
            def.name = Some(format!("anchor-{i}"));
        } else {
            def.parent = Some(ParentSpec {
                key: format!("anchor-{}", (i + 1) % count),
                inherit_rotation: true,
                inherit_scale: false,
            });
        }
        entities.push(def);
    }
    SceneDescription {
        name: "bench".into(),
        entities,
    }
}

fn bench_instantiate(c: &mut Criterion) {
    let description = build_description(1_000);
    let mut prefabs = PrefabLibrary::new();
    prefabs.insert(
        "dot",
        ComponentSet {
            shape: Some(ShapeDef {
                kind: Some(skene_data::ecs::ShapeKind::Circle),
                ..Default::default()
            }),
            ..Default::default()
        },
    );

    let mut group = c.benchmark_group("Scene Instantiation");

    group.bench_function("Load 1k entities, half forward-parented", |b| {
        b.iter(|| {
            let mut store = WorldStore::new();
            let scene = load(&mut store, &description, &prefabs).expect("load");
            black_box(scene.entities().len());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_instantiate);
criterion_main!(benches);
