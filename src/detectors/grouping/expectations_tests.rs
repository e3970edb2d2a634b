use super::*;

fn generator() -> ExpectationGenerator {
    ExpectationGenerator::new(Arc::new(GroupingConfig::default()))
}

fn patterns(name: &str, owner: &str, default_file: &str) -> Vec<String> {
    generator().expectations(name, owner, default_file).into_vec()
}

#[test]
fn test_partial_stems() {
    assert_eq!(
        partial_stems("service_discovery_get"),
        vec!["service_discovery_get", "service_discovery", "service"]
    );
    assert_eq!(partial_stems("get"), vec!["get"]);
    assert!(partial_stems("").is_empty());
    assert_eq!(partial_stems("_get"), vec!["_get"]);
}

#[test]
fn test_receiver_and_method() {
    assert_eq!(
        patterns("Get", "ServiceDiscovery", "default.go"),
        vec![
            "service_discovery_get.go",
            "service_discovery*.go",
            "service*.go",
            "default.go",
            "model*.go",
            "types*.go",
        ]
    );
}

#[test]
fn test_receiver_tiers_rank_ahead_of_fallbacks() {
    let set = generator().expectations("Get", "ServiceDiscovery", "default.go");
    let exact = set.position("service_discovery_get.go").unwrap();
    let prefix = set.position("service_discovery*.go").unwrap();
    let default = set.position("default.go").unwrap();
    let allow = set.position("model*.go").unwrap();
    assert!(exact < prefix && prefix < default && default < allow);
}

#[test]
fn test_global_function() {
    assert_eq!(
        patterns("Get", "", "default.go"),
        vec!["get.go", "default.go", "model*.go", "types*.go"]
    );
}

#[test]
fn test_global_bound_function() {
    assert_eq!(
        patterns("LimiterFunc", "", "default.go"),
        vec![
            "limiter_func.go",
            "limiter*.go",
            "limit*.go",
            "default.go",
            "model*.go",
            "types*.go",
        ]
    );
}

#[test]
fn test_constructor_prefix_is_stripped() {
    let set = generator().expectations("NewScheduler", "", "default.go");
    assert_eq!(set.position("scheduler.go"), Some(0));
    assert!(set.position("scheduler.go") < set.position("default.go"));
    assert!(!set.iter().any(|p| p.starts_with("new")));
}

#[test]
fn test_lowercase_name_is_capitalized() {
    assert_eq!(
        patterns("evalAttributes", "Vue", ""),
        patterns("EvalAttributes", "Vue", "")
    );
    assert_eq!(patterns("evalAttributes", "", "")[0], "eval_attributes.go");
}

#[test]
fn test_plural_receiver_includes_singular() {
    let set = generator().expectations("Get", "Assets", "default.go");
    assert!(set.contains("assets*.go"));
    assert!(set.contains("asset*.go"));
    assert!(set.position("assets*.go") < set.position("asset*.go"));
}

#[test]
fn test_agent_noun_receiver_includes_base() {
    let set = generator().expectations("Do", "Checker", "default.go");
    assert!(set.contains("checker*.go"));
    assert!(set.contains("check*.go"));
    assert_eq!(set.position("checker_do.go"), Some(0));
}

#[test]
fn test_type_uses_owner_only() {
    assert_eq!(
        patterns("", "MyService", "svc*"),
        vec!["my_service.go", "my*.go", "svc*.go", "model*.go", "types*.go"]
    );
}

#[test]
fn test_error_name_adds_errors_file() {
    let set = generator().expectations("Error", "", "default.go");
    assert_eq!(
        set.as_slice(),
        ["error.go", "errors.go", "default.go", "model*.go", "types*.go"]
    );
}

#[test]
fn test_err_owner_adds_errors_file() {
    assert_eq!(
        patterns("", "ErrNotFound", "default.go"),
        vec![
            "err_not_found.go",
            "err_not*.go",
            "err*.go",
            "errors.go",
            "default.go",
            "model*.go",
            "types*.go",
        ]
    );
}

#[test]
fn test_degenerate_input_yields_fallbacks_only() {
    assert_eq!(patterns("", "", ""), vec!["model*.go", "types*.go"]);
    assert_eq!(
        patterns("", "", "default.go"),
        vec!["default.go", "model*.go", "types*.go"]
    );
}

#[test]
fn test_configured_extension_and_allowlist() {
    let config = GroupingConfig {
        extension: ".rs".to_string(),
        allowlist: vec!["shared*".to_string()],
        ..GroupingConfig::default()
    };
    let set = ExpectationGenerator::new(Arc::new(config)).expectations("Get", "Store", "store*");
    assert_eq!(
        set.as_slice(),
        ["store_get.rs", "store*.rs", "store*.rs", "shared*.rs"]
    );
}

#[derive(Debug)]
struct LiteralNouns;

impl NounPolicy for LiteralNouns {
    fn singularize(&self, word: &str) -> String {
        word.to_string()
    }

    fn base_noun(&self, word: &str) -> String {
        word.to_string()
    }
}

#[test]
fn test_custom_noun_policy_is_used() {
    let generator =
        ExpectationGenerator::with_policy(Arc::new(GroupingConfig::default()), Arc::new(LiteralNouns));
    let set = generator.expectations("Do", "Checker", "");
    assert!(set.contains("checker*.go"));
    assert!(!set.contains("check*.go"));
    assert_eq!(set.len(), 4);
}

#[test]
fn test_expectations_are_deterministic() {
    let first = patterns("Request", "HTTPClient", "transport*");
    let second = patterns("Request", "HTTPClient", "transport*");
    assert_eq!(first, second);
    assert_eq!(first[0], "http_client_request.go");
}
