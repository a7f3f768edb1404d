//! Shared utilities for integration tests.

use std::io::Write;

use http_api_routes::routing::{RouteBinding, Target, TargetRoutes};
use tempfile::NamedTempFile;

/// Write `content` to a temporary service file with the given extension.
///
/// The file is removed when the returned handle is dropped.
#[allow(dead_code)]
pub fn write_service_file(extension: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("service-")
        .suffix(&format!(".{}", extension))
        .tempfile()
        .expect("temp file");
    file.write_all(content.as_bytes()).expect("write service file");
    file.flush().expect("flush service file");
    file
}

/// A target declared with shorthand bindings.
#[allow(dead_code)]
pub fn declare(name: &str, routes: &[&str]) -> TargetRoutes {
    TargetRoutes::new(
        Target::new(name),
        routes.iter().map(|r| RouteBinding::shorthand(*r)).collect(),
    )
}

/// A service with `GET /foo`, `POST /some-post` and a structured `GET /bar`.
#[allow(dead_code)]
pub const SPECIFIC_ENDPOINTS: &str = r#"
service = "http-api"

[[functions]]
name = "foo"
events = [
    { http_api = "GET /foo" },
    { http_api = "POST /some-post" },
]

[[functions]]
name = "other"
events = [
    { http_api = { method = "get", path = "/bar" } },
]
"#;

/// A service with a global catch-all and a path catch-all.
#[allow(dead_code)]
pub const CATCH_ALL_ENDPOINTS: &str = r#"
service = "http-api-catch-all"

[[functions]]
name = "foo"
events = [{ http_api = "*" }]

[[functions]]
name = "other"
target_alias = { name = "live" }
events = [{ http_api = { method = "*", path = "/foo" } }]
"#;
