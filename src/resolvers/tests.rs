use glam::{Quat, Vec3};
use placer_files::common::types::C3Vector;
use placer_files::model::types::{DecodedModel, ModelNode};
use placer_files::package::types::{Package, PackageCategory};

use crate::context::ResolutionContext;
use crate::io::memory::MemoryLoader;
use crate::placement::{ParamValue, PlacementObject, ResolveResult};
use crate::resolvers::PlacementResolver;
use crate::resolvers::actor::ActorParameterResolver;
use crate::resolvers::composite::CompositeResolver;
use crate::resolvers::enemy::EnemyResolver;
use crate::resolvers::non_visual::NonVisualResolver;
use crate::resolvers::package::PackageModelResolver;
use crate::resolvers::registry::ResolverRegistry;
use crate::resolvers::variant::{VariantResolver, VariantRule};
use crate::tables::ReferenceTables;

fn package_bytes(package: Package) -> Vec<u8> {
    let mut buf = Vec::new();
    package.write(&mut buf).expect("write package");
    buf
}

fn model_bytes(model: DecodedModel) -> Vec<u8> {
    let mut buf = Vec::new();
    model.write(&mut buf).expect("write model");
    buf
}

fn object(object_type: &str) -> PlacementObject {
    PlacementObject::new(object_type, Vec3::new(10.0, 0.0, 0.0), Quat::IDENTITY)
}

fn wapnet_loader(with_body_model: bool) -> MemoryLoader {
    let wapnet = Package {
        categories: vec![
            PackageCategory::new("model")
                .with_file("body", "object/stage/wapnet/body.xno")
                .with_file("net", "object/stage/wapnet/net.xno"),
        ],
    };
    let loader = MemoryLoader::new("stage").with_entry("object/stage/wapnet.pkg", package_bytes(wapnet));
    if !with_body_model {
        return loader;
    }

    let body = DecodedModel {
        nodes: vec![
            ModelNode::new("root", C3Vector::default()),
            ModelNode::new("netpoint", C3Vector { x: 0.0, y: 5.0, z: 0.0 }),
        ],
    };
    loader.with_entry("object/stage/wapnet/body.xno", model_bytes(body))
}

#[test]
fn can_resolve_follows_supported_types() {
    let non_visual = NonVisualResolver::new();
    assert!(non_visual.can_resolve("eventbox"));
    assert!(non_visual.can_resolve("camerapan"));
    assert!(!non_visual.can_resolve("ring"));

    let enemy = EnemyResolver::new();
    assert!(enemy.can_resolve("enemy"));
    assert!(enemy.can_resolve("enemyextra"));
    assert!(!enemy.can_resolve("Enemy"));

    let variant = VariantResolver::new();
    for object_type in variant.supported_types() {
        assert!(variant.can_resolve(object_type));
    }
    assert!(!variant.can_resolve("wapnet"));

    let fallback = PackageModelResolver::new();
    assert!(fallback.can_resolve("anything"));
    assert!(fallback.can_resolve(""));
    assert!(fallback.supported_types().is_empty());
}

#[test]
fn variant_selects_one_based_candidate() {
    let package = Package {
        categories: vec![
            PackageCategory::new("model")
                .with_file("modelA", "object/stage/stageprop/a.xno")
                .with_file("modelB", "object/stage/stageprop/b.xno")
                .with_file("modelC", "object/stage/stageprop/c.xno"),
        ],
    };
    let loader = MemoryLoader::new("stage").with_entry("object/stage/stageprop.pkg", package_bytes(package));
    let tables = ReferenceTables::new().with_package("stageprop", "stage", "stageprop");
    let ctx = ResolutionContext::new(&loader, &tables);
    let resolver = VariantResolver::with_rules(vec![VariantRule::new(
        "stageprop",
        &["modelA", "modelB", "modelC"],
    )]);

    let prop = object("stageprop").with_parameter("variant", ParamValue::Int(2));
    let result = resolver.resolve(&ctx, &prop);
    let instances = result.instances();
    assert_eq!(instances.len(), 1);
    assert_eq!(instances[0].model_path, "object/stage/stageprop/b.xno");
    assert_eq!(instances[0].archive_hint.as_deref(), Some("stage"));
    assert_eq!(instances[0].position, Vec3::new(10.0, 0.0, 0.0));

    for variant in [0, 4, -3] {
        let prop = object("stageprop").with_parameter("variant", ParamValue::Int(variant));
        let result = resolver.resolve(&ctx, &prop);
        match result {
            ResolveResult::Failure(message) => assert!(message.contains(&variant.to_string()), "{}", message),
            other => panic!("variant {} gave {:?}", variant, other),
        }
    }

    // no selector at all reads as variant 0
    assert!(matches!(
        resolver.resolve(&ctx, &object("stageprop")),
        ResolveResult::Failure(_)
    ));
    assert!(matches!(
        resolver.resolve(&ctx, &object("stageprop").with_parameter("variant", ParamValue::Float(2.0))),
        ResolveResult::Failure(_)
    ));
}

#[test]
fn variant_without_package_fails() {
    let loader = MemoryLoader::new("stage");
    let tables = ReferenceTables::new();
    let ctx = ResolutionContext::new(&loader, &tables);

    let pillar = object("brokenpillar").with_parameter("variant", ParamValue::Int(1));
    let result = VariantResolver::new().resolve(&ctx, &pillar);
    assert!(matches!(result, ResolveResult::Failure(message) if message.contains("brokenpillar")));
}

#[test]
fn composite_offsets_attached_part() {
    let loader = wapnet_loader(true);
    let tables = ReferenceTables::new();
    let ctx = ResolutionContext::new(&loader, &tables);

    let result = CompositeResolver::new().resolve(&ctx, &object("wapnet"));
    let instances = result.instances();
    assert_eq!(instances.len(), 2);
    assert_eq!(instances[0].model_path, "object/stage/wapnet/body.xno");
    assert_eq!(instances[0].position, Vec3::new(10.0, 0.0, 0.0));
    assert_eq!(instances[1].model_path, "object/stage/wapnet/net.xno");
    assert_eq!(instances[1].position, Vec3::new(10.0, 5.0, 0.0));
    assert_eq!(instances[1].rotation, Quat::IDENTITY);
    assert!(instances.iter().all(|instance| instance.visible));
}

#[test_log::test]
fn composite_degrades_to_zero_offset() {
    let loader = wapnet_loader(false);
    let tables = ReferenceTables::new();
    let ctx = ResolutionContext::new(&loader, &tables);

    let result = CompositeResolver::new().resolve(&ctx, &object("wapnet"));
    let instances = result.instances();
    assert_eq!(instances.len(), 2);
    assert_eq!(instances[1].position, instances[0].position);
}

#[test]
fn composite_without_package_fails() {
    let loader = MemoryLoader::new("stage");
    let tables = ReferenceTables::new();
    let ctx = ResolutionContext::new(&loader, &tables);

    assert!(matches!(
        CompositeResolver::new().resolve(&ctx, &object("bungee")),
        ResolveResult::Failure(_)
    ));
}

#[test_log::test]
fn composite_survives_malformed_anchor_model() {
    let loader = wapnet_loader(false).with_entry("object/stage/wapnet/body.xno", b"not a model".to_vec());
    let tables = ReferenceTables::new();
    let ctx = ResolutionContext::new(&loader, &tables);

    let result = CompositeResolver::new().resolve(&ctx, &object("wapnet"));
    let instances = result.instances();
    assert_eq!(instances.len(), 2);
    assert_eq!(instances[0].position, Vec3::new(10.0, 0.0, 0.0));
    assert_eq!(instances[1].model_path, "object/stage/wapnet/net.xno");
    assert_eq!(instances[1].position, Vec3::new(10.0, 0.0, 0.0));
    assert_eq!(ctx.cached_models(), 0);
}

#[test]
fn composite_with_malformed_package_fails() {
    let loader = MemoryLoader::new("stage").with_entry("object/stage/wapnet.pkg", b"PKGV garbage".to_vec());
    let tables = ReferenceTables::new();
    let ctx = ResolutionContext::new(&loader, &tables);

    assert!(matches!(
        CompositeResolver::new().resolve(&ctx, &object("wapnet")),
        ResolveResult::Failure(message) if message.contains("wapnet.pkg")
    ));
}

#[test]
fn composite_needs_both_parts() {
    let body_only = Package {
        categories: vec![PackageCategory::new("model").with_file("body", "object/stage/wapnet/body.xno")],
    };
    let textures_only = Package {
        categories: vec![PackageCategory::new("texture").with_file("net", "object/stage/wapnet/net.dds")],
    };
    let loader = MemoryLoader::new("stage")
        .with_entry("object/stage/wapnet.pkg", package_bytes(body_only))
        .with_entry("object/stage/bungee.pkg", package_bytes(textures_only));
    let tables = ReferenceTables::new();
    let ctx = ResolutionContext::new(&loader, &tables);
    let resolver = CompositeResolver::new();

    assert!(matches!(
        resolver.resolve(&ctx, &object("wapnet")),
        ResolveResult::Failure(message) if message.contains("net")
    ));
    assert!(matches!(
        resolver.resolve(&ctx, &object("bungee")),
        ResolveResult::Failure(message) if message.contains("category model")
    ));
}

#[test]
fn non_visual_always_skips() {
    let loader = MemoryLoader::new("empty");
    let tables = ReferenceTables::new();
    let ctx = ResolutionContext::new(&loader, &tables);
    let resolver = NonVisualResolver::new();

    assert_eq!(resolver.resolve(&ctx, &object("eventbox")), ResolveResult::Skip);
    let with_params = object("soundsource")
        .with_parameter("cue", ParamValue::String("wind".to_string()))
        .with_parameter("radius", ParamValue::Float(40.0));
    assert_eq!(resolver.resolve(&ctx, &with_params), ResolveResult::Skip);
}

#[test]
fn actor_parameter_looks_up_physics_table() {
    let loader = MemoryLoader::new("empty");
    let tables = ReferenceTables::new()
        .with_actor("objectphysics", &["flag", "objectName", "scale"])
        .with_physics("Rock01", "object/common/rock/rock01.xno");
    let ctx = ResolutionContext::new(&loader, &tables);
    let resolver = ActorParameterResolver::new();

    let rock = object("objectphysics")
        .with_parameter("flag", ParamValue::Int(0))
        .with_parameter("objectName", ParamValue::String("Rock01".to_string()))
        .with_parameter("scale", ParamValue::Float(1.0));
    let result = resolver.resolve(&ctx, &rock);
    let instances = result.instances();
    assert_eq!(instances.len(), 1);
    assert_eq!(instances[0].model_path, "object/common/rock/rock01.xno");
    assert_eq!(instances[0].archive_hint, None);

    let unknown = object("objectphysics")
        .with_parameter("flag", ParamValue::Int(0))
        .with_parameter("objectName", ParamValue::String("Rock99".to_string()));
    assert!(matches!(
        resolver.resolve(&ctx, &unknown),
        ResolveResult::Failure(message) if message.contains("Rock99")
    ));

    let mistyped = object("objectphysics")
        .with_parameter("flag", ParamValue::Int(0))
        .with_parameter("objectName", ParamValue::Int(3));
    assert!(matches!(resolver.resolve(&ctx, &mistyped), ResolveResult::Failure(_)));
}

#[test]
fn actor_parameter_defers_without_definition() {
    let loader = MemoryLoader::new("empty");
    let tables = ReferenceTables::new()
        .with_actor("pathobj", &["flag"])
        .with_path("Rail", "object/common/path/rail.xno");
    let ctx = ResolutionContext::new(&loader, &tables);
    let resolver = ActorParameterResolver::new();

    // no objectName in the definition
    assert_eq!(
        resolver.resolve(&ctx, &object("pathobj").with_parameter("flag", ParamValue::Int(1))),
        ResolveResult::empty()
    );
    // no definition at all
    assert_eq!(resolver.resolve(&ctx, &object("objectphysics")), ResolveResult::empty());
}

#[test]
fn enemy_paths_by_convention() {
    let resolver = EnemyResolver::new();
    assert_eq!(resolver.model_path("eCerberus"), "enemy/cerberus/en_cerberus.xno");
    assert_eq!(resolver.model_path("eBuster"), "enemy/buster/en_buster.xno");
    assert_eq!(
        resolver.model_path("eGunnerTrooper"),
        "enemy/gunner/en_gunner_trooper.xno"
    );
    assert_eq!(
        resolver.model_path("eStingerLancer"),
        "enemy/stinger/en_stinger_lancer.xno"
    );
    assert_eq!(resolver.model_path("Flyer"), "enemy/flyer/en_flyer.xno");
}

#[test]
fn enemy_needs_a_name() {
    let loader = MemoryLoader::new("empty");
    let tables = ReferenceTables::new();
    let ctx = ResolutionContext::new(&loader, &tables);
    let resolver = EnemyResolver::new();

    let result = resolver.resolve(
        &ctx,
        &object("enemy").with_parameter("name", ParamValue::String("eGunnerFly".to_string())),
    );
    let instances = result.instances();
    assert_eq!(instances.len(), 1);
    assert_eq!(instances[0].model_path, "enemy/gunner/en_gunner_fly.xno");
    assert_eq!(instances[0].archive_hint.as_deref(), Some("enemy"));

    assert!(matches!(resolver.resolve(&ctx, &object("enemy")), ResolveResult::Failure(_)));
    assert!(matches!(
        resolver.resolve(&ctx, &object("enemy").with_parameter("name", ParamValue::String(String::new()))),
        ResolveResult::Failure(_)
    ));
}

#[test]
fn enemy_with_custom_rules() {
    let loader = MemoryLoader::new("empty");
    let tables = ReferenceTables::new();
    let ctx = ResolutionContext::new(&loader, &tables);
    let resolver = EnemyResolver::with_rules(
        &["boss"],
        &[("eMephiles", "mephiles")],
        &[("eMephiles", "boss_mephiles_phase1")],
        1,
    );

    assert!(resolver.can_resolve("boss"));
    assert!(!resolver.can_resolve("enemy"));
    // the built-in aliases are gone
    assert_eq!(resolver.model_path("eGunnerFly"), "enemy/gunnerfly/en_gunnerfly.xno");

    let boss = object("boss")
        .with_parameter("phase", ParamValue::Int(1))
        .with_parameter("name", ParamValue::String("eMephiles".to_string()));
    let result = resolver.resolve(&ctx, &boss);
    assert_eq!(result.instances().len(), 1);
    assert_eq!(
        result.instances()[0].model_path,
        "enemy/mephiles/boss_mephiles_phase1.xno"
    );

    // the name is read from the configured position only
    let misplaced = object("boss").with_parameter("name", ParamValue::String("eMephiles".to_string()));
    assert!(matches!(resolver.resolve(&ctx, &misplaced), ResolveResult::Failure(_)));
}

#[test]
fn package_model_fallback() {
    let spring = Package {
        categories: vec![PackageCategory::new("model").with_file("model", "object/common/spring/spring.xno")],
    };
    let ring = Package {
        categories: vec![PackageCategory::new("texture").with_file("ring", "object/common/ring/ring.dds")],
    };
    let loader = MemoryLoader::new("common")
        .with_entry("object/common/spring.pkg", package_bytes(spring))
        .with_entry("object/common/ring.pkg", package_bytes(ring));
    let tables = ReferenceTables::new();
    let ctx = ResolutionContext::new(&loader, &tables);
    let resolver = PackageModelResolver::new();

    let result = resolver.resolve(&ctx, &object("spring"));
    assert_eq!(result.instances().len(), 1);
    assert_eq!(result.instances()[0].model_path, "object/common/spring/spring.xno");
    assert_eq!(result.instances()[0].archive_hint.as_deref(), Some("common"));

    assert_eq!(resolver.resolve(&ctx, &object("ring")), ResolveResult::empty());
    assert!(matches!(resolver.resolve(&ctx, &object("dashpanel")), ResolveResult::Failure(_)));
    assert!(matches!(resolver.resolve(&ctx, &object("no_such_type")), ResolveResult::Failure(_)));
}

#[test]
fn default_dispatch_order() {
    let registry = ResolverRegistry::with_default_resolvers();
    assert_eq!(
        registry.dispatch_order(),
        vec!["non-visual", "actor-parameter", "variant", "enemy", "composite"]
    );
    assert_eq!(registry.fallback().name(), "package-model");
    assert_eq!(registry.len(), 5);
}

#[test]
fn registry_skips_non_visual_before_fallback() {
    let loader = MemoryLoader::new("empty");
    let tables = ReferenceTables::new();
    let ctx = ResolutionContext::new(&loader, &tables);
    let registry = ResolverRegistry::with_default_resolvers();

    assert_eq!(registry.resolve(&ctx, &object("checkpoint")), ResolveResult::Skip);
    // nothing claims the type and it has no package either
    assert!(matches!(
        registry.resolve(&ctx, &object("no_such_type")),
        ResolveResult::Failure(_)
    ));
}
