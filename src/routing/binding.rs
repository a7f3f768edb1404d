//! Raw route bindings and their canonical shape.
//!
//! # Responsibilities
//! - Accept both declaration forms (`"GET /path"` / `"*"` and `{ method, path }`)
//! - Reduce either form to a single `{ method?, path? }` shape before validation
//!
//! # Design Decisions
//! - Only the surface syntax is checked here; semantic checks belong to the resolver
//! - Empty strings count as absent

use serde::{Deserialize, Serialize};

/// Literal that stands for the global catch-all route.
pub const CATCH_ALL: &str = "*";

/// A route binding as declared by the user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RouteBinding {
    /// `"<METHOD> <path>"` or `"*"`.
    Shorthand(String),
    /// Explicit fields; either may be missing.
    Structured {
        #[serde(default)]
        method: Option<String>,
        #[serde(default)]
        path: Option<String>,
    },
}

/// Canonical shape of a binding, borrowed from the declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRoute<'a> {
    pub method: Option<&'a str>,
    pub path: Option<&'a str>,
}

impl RouteBinding {
    /// Shorthand binding from a string.
    pub fn shorthand(route: impl Into<String>) -> Self {
        RouteBinding::Shorthand(route.into())
    }

    /// Structured binding from explicit fields.
    pub fn structured(method: Option<&str>, path: Option<&str>) -> Self {
        RouteBinding::Structured {
            method: method.map(str::to_owned),
            path: path.map(str::to_owned),
        }
    }

    /// Reduce to the canonical shape.
    ///
    /// Returns `None` when a shorthand string is neither `"*"` nor `"<METHOD> <path>"`.
    pub fn normalize(&self) -> Option<RawRoute<'_>> {
        match self {
            RouteBinding::Structured { method, path } => Some(RawRoute {
                method: non_empty(method.as_deref()),
                path: non_empty(path.as_deref()),
            }),
            RouteBinding::Shorthand(route) if route == CATCH_ALL => Some(RawRoute {
                method: None,
                path: Some(CATCH_ALL),
            }),
            RouteBinding::Shorthand(route) => {
                let (method, path) = split_method_path(route)?;
                Some(RawRoute {
                    method: Some(method),
                    path: Some(path),
                })
            }
        }
    }
}

impl std::fmt::Display for RouteBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteBinding::Shorthand(route) => write!(f, "{:?}", route),
            RouteBinding::Structured { method, path } => write!(
                f,
                "{{ method: {:?}, path: {:?} }}",
                method.as_deref().unwrap_or(""),
                path.as_deref().unwrap_or("")
            ),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Split `"<TOKEN> <rest>"`: a run of ASCII letters, one space, then a
/// non-empty remainder on a single line.
fn split_method_path(route: &str) -> Option<(&str, &str)> {
    let (method, path) = route.split_once(' ')?;
    if method.is_empty() || !method.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    if path.is_empty() || path.contains(['\n', '\r', '\u{2028}', '\u{2029}']) {
        return None;
    }
    Some((method, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorthand_split() {
        let binding = RouteBinding::shorthand("get /users/{id}");
        assert_eq!(
            binding.normalize(),
            Some(RawRoute {
                method: Some("get"),
                path: Some("/users/{id}"),
            })
        );
    }

    #[test]
    fn test_shorthand_catch_all() {
        let binding = RouteBinding::shorthand("*");
        assert_eq!(
            binding.normalize(),
            Some(RawRoute {
                method: None,
                path: Some("*"),
            })
        );
    }

    #[test]
    fn test_shorthand_malformed() {
        for route in ["/users", "GET", "GET ", "G3T /a", " /a", "GET /a\n/b", ""] {
            assert_eq!(RouteBinding::shorthand(route).normalize(), None, "{:?}", route);
        }
    }

    #[test]
    fn test_path_keeps_extra_spaces() {
        let binding = RouteBinding::shorthand("POST  /a b");
        assert_eq!(binding.normalize().unwrap().path, Some(" /a b"));
    }

    #[test]
    fn test_structured_empty_fields_are_absent() {
        let binding = RouteBinding::structured(Some(""), Some("/a"));
        assert_eq!(
            binding.normalize(),
            Some(RawRoute {
                method: None,
                path: Some("/a"),
            })
        );
    }

    #[test]
    fn test_deserialize_both_forms() {
        let short: RouteBinding = serde_json::from_str(r#""GET /a""#).unwrap();
        assert_eq!(short, RouteBinding::shorthand("GET /a"));

        let structured: RouteBinding = serde_json::from_str(r#"{"path": "/b"}"#).unwrap();
        assert_eq!(structured, RouteBinding::structured(None, Some("/b")));
    }
}
