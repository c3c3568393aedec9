pub const CACHE_PREFIX: &str = "folio";

/// Served in place of a failed document navigation.
pub const OFFLINE_FALLBACK_PATH: &str = "/index.html";

/// Shell assets stored at install time, before any page has been visited.
pub const PRECACHE_PATHS: [&str; 8] = [
    "/",
    "/index.html",
    "/folio.js",
    "/folio_bg.wasm",
    "/main.css",
    "/manifest.json",
    "/icons/icon-192x192.png",
    "/icons/icon-512x512.png",
];

/// Name of the cache generation holding a given release's assets.
pub fn generation_name(version: &str) -> String {
    format!("{CACHE_PREFIX}-v{version}")
}

/// Every generation except the current one; activation deletes these.
pub fn stale_generations<'a>(existing: &'a [String], current: &str) -> Vec<&'a str> {
    existing
        .iter()
        .map(String::as_str)
        .filter(|name| *name != current)
        .collect()
}

/// Only same-origin GETs go through the cache; everything else is left to
/// the network untouched.
pub fn should_intercept(method: &str, url: &str, origin: &str) -> bool {
    method == "GET" && url.starts_with(origin)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseKind {
    Basic,
    Cors,
    Opaque,
    OpaqueRedirect,
    Error,
    Default,
}

/// Only a plain 200 of the basic (same-origin, non-redirected) kind is
/// worth keeping a copy of.
pub fn should_store(status: u16, kind: ResponseKind) -> bool {
    status == 200 && kind == ResponseKind::Basic
}

/// A dead network still gets the shell for full-document navigations;
/// anything else propagates the failure.
pub fn offline_fallback(is_navigation: bool) -> Option<&'static str> {
    is_navigation.then_some(OFFLINE_FALLBACK_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_name_is_versioned() {
        assert_eq!(generation_name("1.0.0"), "folio-v1.0.0");
    }

    #[test]
    fn method_filter_rejects_non_get() {
        let origin = "https://folio.dev";
        assert!(should_intercept("GET", "https://folio.dev/", origin));
        assert!(!should_intercept("POST", "https://folio.dev/contact", origin));
        assert!(!should_intercept("HEAD", "https://folio.dev/", origin));
    }

    #[test]
    fn origin_filter_rejects_cross_origin() {
        let origin = "https://folio.dev";
        assert!(!should_intercept("GET", "https://fonts.example.com/a.woff2", origin));
        assert!(should_intercept("GET", "https://folio.dev/icons/icon-192x192.png", origin));
    }

    #[test]
    fn store_filter_requires_basic_200() {
        assert!(should_store(200, ResponseKind::Basic));
        assert!(!should_store(200, ResponseKind::Cors));
        assert!(!should_store(200, ResponseKind::Opaque));
        assert!(!should_store(304, ResponseKind::Basic));
        assert!(!should_store(404, ResponseKind::Basic));
    }

    #[test]
    fn fallback_only_for_navigations() {
        assert_eq!(offline_fallback(true), Some("/index.html"));
        assert_eq!(offline_fallback(false), None);
    }
}
