use std::path::{Path, PathBuf};

use symgroup::io::manifest::SymbolManifest;
use symgroup::{AnalysisSession, GroupingConfig};

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("service_manifest.json")
}

#[test]
fn fixture_manifest_report() {
    let manifest = SymbolManifest::from_json_file(fixture()).unwrap();
    let session = AnalysisSession::new(GroupingConfig::default());
    let report = session.analyze(&manifest.units);

    assert_eq!(report.total(), 10);
    assert_eq!(report.passing(), 8);

    let messages: Vec<&str> = report
        .violations()
        .iter()
        .map(|v| v.message.as_str())
        .collect();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].starts_with(r#"exported type "MyService" expected in [my_service.go]"#));
    assert!(messages[1].starts_with(r#"exported type "HTTPClient" expected in [http_client.go]"#));

    let first = &report.violations()[0];
    assert_eq!(first.file, PathBuf::from("service/wrong_file.go"));
    assert_eq!((first.line, first.column), (3, 6));
}

#[test]
fn overlapping_passes_scan_each_file_once() {
    let manifest = SymbolManifest::from_json_file(fixture()).unwrap();
    let session = AnalysisSession::new(GroupingConfig::default());

    // a second pass over the same package set, as a driver might issue
    let doubled: Vec<_> = manifest
        .units
        .iter()
        .chain(manifest.units.iter())
        .cloned()
        .collect();

    let report = session.analyze(&doubled);
    assert_eq!(report.total(), 10);
    assert_eq!(session.analyze(&manifest.units).total(), 0);
}

#[test]
fn concurrent_sessions_share_nothing() {
    let manifest = SymbolManifest::from_json_file(fixture()).unwrap();

    let totals: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..3)
            .map(|_| {
                scope.spawn(|| {
                    AnalysisSession::new(GroupingConfig::default())
                        .analyze(&manifest.units)
                        .total()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(totals, vec![10, 10, 10]);
}

#[test]
fn sequential_and_parallel_reports_agree() {
    let manifest = SymbolManifest::from_json_file(fixture()).unwrap();

    let parallel = AnalysisSession::new(GroupingConfig::default()).analyze(&manifest.units);
    let sequential = AnalysisSession::new(GroupingConfig {
        parallel: false,
        ..GroupingConfig::default()
    })
    .analyze(&manifest.units);

    assert_eq!(parallel, sequential);
}
