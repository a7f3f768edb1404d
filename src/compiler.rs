//! Route-table compiler.
//!
//! Runs the route resolver, then merges the CORS policy using the methods the
//! resolver actually bound. Either both succeed or nothing is returned.

use serde::Serialize;

use crate::config::schema::ServiceConfig;
use crate::cors::settings::CorsSetting;
use crate::cors::{merge_cors, CorsPolicy};
use crate::error::CompileResult;
use crate::routing::{resolve_routes, RouteEntry, RouteTable, Target, TargetRoutes};

/// Output of one compile pass, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledApi<'a> {
    pub routes: RouteTable<'a>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cors: Option<CorsPolicy>,
}

impl<'a> CompiledApi<'a> {
    /// No routes were declared; nothing should be rendered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Target owning the global catch-all route, rendered as the API's default route.
    pub fn catch_all(&self) -> Option<&'a Target> {
        self.routes.catch_all()
    }

    /// Every route except the global catch-all, in declaration order.
    pub fn endpoints(&self) -> impl Iterator<Item = &RouteEntry<'a>> {
        self.routes.iter().filter(|e| !e.key.is_catch_all())
    }
}

/// Compile targets and their bindings into a route table and CORS policy.
pub fn compile<'a>(
    declarations: &'a [TargetRoutes],
    cors: Option<&CorsSetting>,
) -> CompileResult<CompiledApi<'a>> {
    let resolution = resolve_routes(declarations)?;
    let cors = merge_cors(cors, &resolution.bound_methods);

    tracing::info!(
        routes = resolution.table.len(),
        catch_all = resolution.has_catch_all(),
        cors = cors.is_some(),
        "Route table compiled"
    );

    Ok(CompiledApi {
        routes: resolution.table,
        cors,
    })
}

/// Compile a loaded service configuration.
///
/// The declarations are owned by the caller so the compiled table can borrow them.
pub fn compile_service<'a>(
    config: &ServiceConfig,
    declarations: &'a [TargetRoutes],
) -> CompileResult<CompiledApi<'a>> {
    compile(declarations, config.cors())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::routing::RouteBinding;

    fn declare(name: &str, routes: &[&str]) -> TargetRoutes {
        TargetRoutes::new(
            Target::new(name),
            routes.iter().map(|r| RouteBinding::shorthand(*r)).collect(),
        )
    }

    #[test]
    fn test_compile_with_cors() {
        let declarations = vec![declare("a", &["GET /a"]), declare("b", &["POST /b"])];
        let api = compile(&declarations, Some(&CorsSetting::Enabled(true))).unwrap();

        assert_eq!(api.routes.len(), 2);
        let cors = api.cors.unwrap();
        assert!(cors.allows_method("OPTIONS"));
        assert!(cors.allows_method("GET"));
        assert!(cors.allows_method("POST"));
        assert_eq!(cors.allowed_methods.len(), 3);
    }

    #[test]
    fn test_compile_with_built_overrides() {
        use crate::cors::{CorsOverrides, OneOrMany};

        let declarations = vec![declare("a", &["GET /a"])];
        let overrides = CorsOverrides {
            allowed_origins: Some(OneOrMany::One("https://shop.example".into())),
            max_age: Some(600),
            ..Default::default()
        };
        let api = compile(&declarations, Some(&CorsSetting::Custom(overrides))).unwrap();

        let cors = api.cors.unwrap();
        assert!(cors.allowed_origins.contains("https://shop.example"));
        assert_eq!(cors.allowed_origins.len(), 1);
        assert_eq!(cors.max_age, Some(600));
        assert!(cors.allows_method("GET"));
    }

    #[test]
    fn test_compile_without_cors() {
        let declarations = vec![declare("a", &["GET /a"])];
        let api = compile(&declarations, None).unwrap();
        assert!(api.cors.is_none());
    }

    #[test]
    fn test_error_returns_nothing() {
        let declarations = vec![declare("a", &["GET /a"]), declare("b", &["GET /a"])];
        let err = compile(&declarations, Some(&CorsSetting::Enabled(true))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateRoute);
    }

    #[test]
    fn test_catch_all_is_not_an_endpoint() {
        let declarations = vec![declare("fallback", &["*"]), declare("other", &["ANY /foo"])];
        let api = compile(&declarations, None).unwrap();

        assert_eq!(api.catch_all().unwrap().name, "fallback");
        let endpoints: Vec<String> = api.endpoints().map(|e| e.key.to_string()).collect();
        assert_eq!(endpoints, vec!["ANY /foo"]);
    }

    #[test]
    fn test_no_routes() {
        let declarations = vec![declare("a", &[])];
        let api = compile(&declarations, Some(&CorsSetting::Enabled(true))).unwrap();
        assert!(api.is_empty());
        assert!(api.catch_all().is_none());
    }

    #[test]
    fn test_idempotent() {
        let declarations = vec![
            declare("a", &["GET /a", "DELETE /a"]),
            declare("b", &["ANY /b", "*"]),
        ];
        let first = compile(&declarations, Some(&CorsSetting::Enabled(true))).unwrap();
        let second = compile(&declarations, Some(&CorsSetting::Enabled(true))).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
