//! Route resolution: raw bindings in, frozen route table out.
//!
//! # Responsibilities
//! - Normalize each binding to a route key
//! - Reject malformed, incomplete and unsupported bindings
//! - Detect the three collision shapes: exact duplicate, `ANY` after an
//!   explicit method, explicit method after `ANY`
//!
//! # Design Decisions
//! - Fail fast: the first invalid binding aborts the pass and the partial table is dropped
//! - Declaration order is preserved across targets

use crate::error::{CompileError, CompileResult};
use crate::routing::binding::{RouteBinding, CATCH_ALL};
use crate::routing::method::{Method, RouteMethod};
use crate::routing::table::{Resolution, RouteKey, RouteTableBuilder};
use crate::routing::target::{Target, TargetRoutes};

/// Pseudo-method spellings that stand for `ANY` on a concrete path.
const ANY_METHODS: [&str; 2] = ["*", "ANY"];

/// Resolve every binding of every target, in order.
pub fn resolve_routes(declarations: &[TargetRoutes]) -> CompileResult<Resolution<'_>> {
    let mut builder = RouteTableBuilder::new();
    for declared in declarations {
        for binding in &declared.bindings {
            let key = bind(&mut builder, &declared.target, binding)?;
            tracing::debug!(
                route_key = %key,
                target = %declared.target.name,
                "Route bound"
            );
        }
    }
    Ok(builder.finish())
}

/// Validate one binding and add it to the table under construction.
pub fn bind<'a>(
    builder: &mut RouteTableBuilder<'a>,
    target: &'a Target,
    binding: &RouteBinding,
) -> CompileResult<RouteKey> {
    let key = route_key(builder, target, binding)?;
    if builder.contains(&key) {
        return Err(CompileError::DuplicateRoute {
            target: target.name.clone(),
            route_key: key.to_string(),
        });
    }
    builder.insert(key.clone(), target);
    Ok(key)
}

fn route_key(
    builder: &RouteTableBuilder<'_>,
    target: &Target,
    binding: &RouteBinding,
) -> CompileResult<RouteKey> {
    let raw = binding
        .normalize()
        .ok_or_else(|| CompileError::MalformedRouteSyntax {
            target: target.name.clone(),
            route: binding.to_string(),
        })?;

    let path = raw.path.ok_or_else(|| CompileError::MissingPath {
        target: target.name.clone(),
        binding: binding.to_string(),
    })?;

    if path == CATCH_ALL {
        return match raw.method {
            None | Some(CATCH_ALL) => Ok(RouteKey::CatchAll),
            Some(method) => Err(CompileError::InvalidCatchAllMethod {
                target: target.name.clone(),
                method: method.to_string(),
            }),
        };
    }

    let method = raw
        .method
        .ok_or_else(|| CompileError::MissingMethod {
            target: target.name.clone(),
            path: path.to_string(),
        })?
        .to_ascii_uppercase();

    if ANY_METHODS.contains(&method.as_str()) {
        let key = RouteKey::route(RouteMethod::Any, path);
        let shadowed = Method::ALL
            .iter()
            .any(|&m| builder.contains(&RouteKey::route(RouteMethod::Exact(m), path)));
        if shadowed {
            return Err(shadowed_route(target, &key, path));
        }
        return Ok(key);
    }

    let method: Method = method
        .parse()
        .map_err(|_| CompileError::UnsupportedMethod {
            target: target.name.clone(),
            method,
            path: path.to_string(),
        })?;
    let key = RouteKey::route(RouteMethod::Exact(method), path);
    if builder.contains(&RouteKey::route(RouteMethod::Any, path)) {
        return Err(shadowed_route(target, &key, path));
    }
    Ok(key)
}

fn shadowed_route(target: &Target, key: &RouteKey, path: &str) -> CompileError {
    CompileError::ShadowedRoute {
        target: target.name.clone(),
        route_key: key.to_string(),
        path: path.to_string(),
    }
}
