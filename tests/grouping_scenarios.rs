use std::sync::Arc;

use symgroup::detectors::grouping::decompose::normalize;
use symgroup::{FallbackTier, GroupingConfig, Resolver, Symbol, SymbolKind, ViolationReporter};

fn resolver() -> Resolver {
    Resolver::new(Arc::new(GroupingConfig::default()))
}

#[test]
fn receiver_method_in_receiver_file_passes() {
    let symbol = Symbol::method("ServiceDiscovery", "Get", "pkg/service/service_discovery.go")
        .with_default_file("service*.go");
    assert!(resolver().resolve(&symbol).matched);
}

#[test]
fn constructor_groups_with_its_type_file() {
    let symbol = Symbol::new("NewSchedulerContextTimeout", SymbolKind::Function, "scheduler.go")
        .with_default_file("default.go");
    assert!(resolver().resolve(&symbol).matched);
}

#[test]
fn agent_noun_receiver_groups_with_base_noun_file() {
    let symbol = Symbol::method("Checker", "Do", "check.go");
    let resolution = resolver().resolve(&symbol);
    assert!(resolution.matched);
    assert_eq!(resolution.matched_tier, Some(FallbackTier::Full));
}

#[test]
fn unrelated_file_is_a_stable_violation() {
    let symbol = Symbol::new("Foo", SymbolKind::Function, "bar.go").with_default_file("default.go");
    let reporter = ViolationReporter::new(resolver());

    let first = reporter.report(vec![symbol.clone()]);
    let second = reporter.report(vec![symbol]);

    assert_eq!(first, second);
    assert_eq!(first.total(), 1);
    assert_eq!(first.passing(), 0);

    let violation = &first.violations()[0];
    assert_eq!(violation.total_expected, 4);
    assert_eq!(violation.canonical_locations, vec!["foo.go"]);
    assert_eq!(
        violation.message,
        r#"exported func "Foo" expected in [foo.go] (total: 4 expected filenames)"#
    );
}

#[test]
fn free_symbol_canonical_stem_is_normalized_name() {
    for name in ["Get", "LimiterFunc", "ServeHTTP", "UserID", "NewScheduler"] {
        let symbol = Symbol::new(name, SymbolKind::Function, "x.go");
        let resolution = resolver().resolve(&symbol);
        assert_eq!(
            resolution.canonical_locations,
            vec![format!("{}.go", normalize(name))],
            "canonical location for {name}"
        );
    }
}

#[test]
fn fallback_tiers_are_tried_in_order() {
    let cases = [
        ("ServiceDiscovery", "Get", "service_discovery.go", FallbackTier::Full),
        ("ServiceDiscovery", "Start", "discovery.go", FallbackTier::ReceiverParts),
        ("ServiceDiscovery", "FooClient", "client.go", FallbackTier::NameParts),
        ("Vue", "EvalAttributes", "eval_attributes.go", FallbackTier::BareName),
    ];

    for (owner, name, file, tier) in cases {
        let resolution = resolver().resolve(&Symbol::method(owner, name, file));
        assert_eq!(resolution.matched_tier, Some(tier), "{owner}.{name} in {file}");
    }
}

#[test]
fn custom_extension_applies_everywhere() {
    let config = GroupingConfig {
        extension: ".rs".to_string(),
        allowlist: vec!["types*".to_string()],
        ..GroupingConfig::default()
    };
    let resolver = Resolver::new(Arc::new(config));

    let symbol = Symbol::method("RequestBuilder", "Header", "src/request_builder.rs");
    assert!(resolver.resolve(&symbol).matched);

    let symbol = Symbol::method("RequestBuilder", "Header", "src/response.rs");
    let resolution = resolver.resolve(&symbol);
    assert!(!resolution.matched);
    assert_eq!(
        resolution.canonical_locations,
        vec!["request_builder_header.rs", "request_builder.rs", "header.rs"]
    );
}
