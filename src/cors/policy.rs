//! CORS policy merging.
//!
//! # Responsibilities
//! - Turn the raw CORS setting into a fully materialized policy
//! - Fill every absent field from the built-in defaults
//! - Derive allowed methods from the bound routes unless given explicitly
//!
//! # Design Decisions
//! - All fallback rules live in [`Fallback::resolve`]
//! - Sets are `BTreeSet` so rendering is deterministic
//! - Derived methods always include `OPTIONS` (browser preflight)

use std::collections::BTreeSet;

use serde::Serialize;

use crate::cors::settings::{CorsOverrides, CorsSetting, OneOrMany};
use crate::routing::Method;

/// Origins allowed when none are configured.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 1] = ["*"];

/// Request headers allowed when none are configured.
pub const DEFAULT_ALLOWED_HEADERS: [&str; 6] = [
    "Content-Type",
    "X-Amz-Date",
    "Authorization",
    "X-Api-Key",
    "X-Amz-Security-Token",
    "X-Amz-User-Agent",
];

/// A fully resolved CORS policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorsPolicy {
    pub allowed_origins: BTreeSet<String>,
    pub allowed_headers: BTreeSet<String>,
    pub allowed_methods: BTreeSet<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exposed_response_headers: Option<BTreeSet<String>>,

    /// Only ever `Some(true)`; credentials are otherwise left unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_credentials: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u64>,
}

impl CorsPolicy {
    /// Case-sensitive membership check against the allowed methods.
    pub fn allows_method(&self, method: &str) -> bool {
        self.allowed_methods.contains(method)
    }
}

/// What a field turns into when the user left it out.
enum Fallback<'a> {
    /// A fixed default set.
    Defaults(&'a [&'a str]),
    /// `OPTIONS` plus every method the route table bound.
    DerivedMethods(&'a BTreeSet<Method>),
    /// The field stays unset.
    Unset,
}

impl Fallback<'_> {
    fn resolve(self, user: Option<&OneOrMany>) -> Option<BTreeSet<String>> {
        if let Some(value) = user {
            return Some(value.as_slice().iter().cloned().collect());
        }
        match self {
            Fallback::Defaults(values) => Some(values.iter().map(|v| v.to_string()).collect()),
            Fallback::DerivedMethods(bound) => Some(
                std::iter::once(Method::Options)
                    .chain(bound.iter().copied())
                    .map(|m| m.as_str().to_string())
                    .collect(),
            ),
            Fallback::Unset => None,
        }
    }
}

/// Merge the user's CORS setting with the defaults.
///
/// Returns `None` when CORS was not requested (absent or `false`).
pub fn merge_cors(
    setting: Option<&CorsSetting>,
    bound_methods: &BTreeSet<Method>,
) -> Option<CorsPolicy> {
    let defaults = CorsOverrides::default();
    let overrides = match setting? {
        CorsSetting::Enabled(false) => return None,
        CorsSetting::Enabled(true) => &defaults,
        CorsSetting::Custom(overrides) => overrides,
    };

    let allowed_methods = Fallback::DerivedMethods(bound_methods)
        .resolve(overrides.allowed_methods.as_ref())
        .unwrap_or_default();
    if overrides.allowed_methods.is_none() {
        tracing::debug!(methods = ?allowed_methods, "CORS methods derived from routes");
    }

    Some(CorsPolicy {
        allowed_origins: Fallback::Defaults(&DEFAULT_ALLOWED_ORIGINS)
            .resolve(overrides.allowed_origins.as_ref())
            .unwrap_or_default(),
        allowed_headers: Fallback::Defaults(&DEFAULT_ALLOWED_HEADERS)
            .resolve(overrides.allowed_headers.as_ref())
            .unwrap_or_default(),
        allowed_methods,
        exposed_response_headers: Fallback::Unset
            .resolve(overrides.exposed_response_headers.as_ref()),
        allow_credentials: overrides.allow_credentials.filter(|&allow| allow),
        max_age: overrides.max_age,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn bound(methods: &[Method]) -> BTreeSet<Method> {
        methods.iter().copied().collect()
    }

    #[test]
    fn test_absent_or_disabled() {
        let methods = bound(&[Method::Get]);
        assert_eq!(merge_cors(None, &methods), None);
        assert_eq!(merge_cors(Some(&CorsSetting::Enabled(false)), &methods), None);
    }

    #[test]
    fn test_enabled_uses_defaults() {
        let methods = bound(&[Method::Get, Method::Post]);
        let policy = merge_cors(Some(&CorsSetting::Enabled(true)), &methods).unwrap();

        assert_eq!(policy.allowed_origins, set(&["*"]));
        assert_eq!(policy.allowed_headers, set(&DEFAULT_ALLOWED_HEADERS));
        assert_eq!(policy.allowed_methods, set(&["OPTIONS", "GET", "POST"]));
        assert!(!policy.allows_method("PATCH"));
        assert_eq!(policy.allow_credentials, None);
        assert_eq!(policy.exposed_response_headers, None);
        assert_eq!(policy.max_age, None);
    }

    #[test]
    fn test_enabled_without_routes_allows_preflight() {
        let policy = merge_cors(Some(&CorsSetting::Enabled(true)), &BTreeSet::new()).unwrap();
        assert_eq!(policy.allowed_methods, set(&["OPTIONS"]));
    }

    #[test]
    fn test_explicit_methods_taken_verbatim() {
        let setting = CorsSetting::Custom(CorsOverrides {
            allowed_methods: Some(OneOrMany::Many(vec!["GET".into(), "GET".into()])),
            ..Default::default()
        });
        let methods = bound(&[Method::Post, Method::Delete]);
        let policy = merge_cors(Some(&setting), &methods).unwrap();
        assert_eq!(policy.allowed_methods, set(&["GET"]));
    }

    #[test]
    fn test_single_origin_and_exposed_headers() {
        let setting = CorsSetting::Custom(CorsOverrides {
            allowed_origins: Some(OneOrMany::One("https://example.com".into())),
            exposed_response_headers: Some(OneOrMany::Many(vec!["X-A".into(), "X-B".into()])),
            ..Default::default()
        });
        let policy = merge_cors(Some(&setting), &bound(&[Method::Get])).unwrap();

        assert_eq!(policy.allowed_origins, set(&["https://example.com"]));
        assert_eq!(policy.exposed_response_headers, Some(set(&["X-A", "X-B"])));
        assert_eq!(policy.allowed_headers, set(&DEFAULT_ALLOWED_HEADERS));
        assert_eq!(policy.allowed_methods, set(&["GET", "OPTIONS"]));
    }

    #[test]
    fn test_credentials_and_max_age() {
        let setting = CorsSetting::Custom(CorsOverrides {
            allowed_headers: Some(OneOrMany::Many(vec!["Authorization".into()])),
            allow_credentials: Some(true),
            max_age: Some(300),
            ..Default::default()
        });
        let policy = merge_cors(Some(&setting), &BTreeSet::new()).unwrap();
        assert_eq!(policy.allowed_headers, set(&["Authorization"]));
        assert_eq!(policy.allow_credentials, Some(true));
        assert_eq!(policy.max_age, Some(300));

        let setting = CorsSetting::Custom(CorsOverrides {
            allow_credentials: Some(false),
            ..Default::default()
        });
        let policy = merge_cors(Some(&setting), &BTreeSet::new()).unwrap();
        assert_eq!(policy.allow_credentials, None);
    }

    #[test]
    fn test_any_route_derives_every_method() {
        let methods: BTreeSet<Method> = Method::ALL.iter().copied().collect();
        let policy = merge_cors(Some(&CorsSetting::Enabled(true)), &methods).unwrap();
        assert_eq!(
            policy.allowed_methods,
            set(&["GET", "POST", "PUT", "PATCH", "OPTIONS", "HEAD", "DELETE"])
        );
    }

    #[test]
    fn test_serialized_field_names() {
        let policy = merge_cors(Some(&CorsSetting::Enabled(true)), &BTreeSet::new()).unwrap();
        let json = serde_json::to_value(&policy).unwrap();
        assert_eq!(json["allowedOrigins"], serde_json::json!(["*"]));
        assert_eq!(json["allowedMethods"], serde_json::json!(["OPTIONS"]));
        assert!(json.get("maxAge").is_none());
    }
}
