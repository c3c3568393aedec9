use std::collections::{BTreeMap, BTreeSet};

use folio_core::cache::{
    generation_name, should_intercept, should_store, stale_generations, ResponseKind,
};

/// In-memory stand-in for the browser's cache storage: generation name to
/// the set of request paths stored under it.
#[derive(Default)]
struct Generations {
    buckets: BTreeMap<String, BTreeSet<String>>,
}

impl Generations {
    fn install(&mut self, version: &str, paths: &[&str]) -> String {
        let name = generation_name(version);
        let bucket = self.buckets.entry(name.clone()).or_default();
        for path in paths {
            bucket.insert((*path).to_string());
        }
        name
    }

    fn activate(&mut self, current: &str) {
        let existing: Vec<String> = self.buckets.keys().cloned().collect();
        for stale in stale_generations(&existing, current) {
            self.buckets.remove(stale);
        }
    }
}

#[test]
fn activation_sweeps_stale_generations() {
    let mut storage = Generations::default();
    storage.install("0.9.0", &["/", "/index.html"]);
    let current = storage.install("1.0.0", &["/", "/index.html"]);

    storage.activate(&current);

    let remaining: Vec<&String> = storage.buckets.keys().collect();
    assert_eq!(remaining, vec!["folio-v1.0.0"]);
    let bucket = &storage.buckets["folio-v1.0.0"];
    assert!(bucket.contains("/"));
    assert!(bucket.contains("/index.html"));
}

#[test]
fn activation_is_idempotent() {
    let mut storage = Generations::default();
    let current = storage.install("1.0.0", &["/"]);
    storage.activate(&current);
    storage.activate(&current);
    assert_eq!(storage.buckets.len(), 1);
}

#[test]
fn stale_sweep_spares_only_the_current_key() {
    let existing = vec![
        "folio-v0.9.0".to_string(),
        "folio-v1.0.0".to_string(),
        "unrelated-cache".to_string(),
    ];
    let stale = stale_generations(&existing, "folio-v1.0.0");
    assert_eq!(stale, vec!["folio-v0.9.0", "unrelated-cache"]);
}

#[test]
fn post_and_cross_origin_never_reach_the_cache() {
    let origin = "https://folio.dev";
    // The interception filter is the only gate in front of both the cache
    // lookup and the opportunistic store, so rejecting here proves neither
    // can happen.
    assert!(!should_intercept("POST", "https://folio.dev/contact", origin));
    assert!(!should_intercept(
        "GET",
        "https://api.thirdparty.example/submit",
        origin
    ));
}

#[test]
fn opportunistic_store_takes_only_plain_successes() {
    assert!(should_store(200, ResponseKind::Basic));
    for kind in [
        ResponseKind::Cors,
        ResponseKind::Opaque,
        ResponseKind::OpaqueRedirect,
        ResponseKind::Error,
        ResponseKind::Default,
    ] {
        assert!(!should_store(200, kind));
    }
    for status in [201, 204, 301, 304, 404, 500] {
        assert!(!should_store(status, ResponseKind::Basic));
    }
}
