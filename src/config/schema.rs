//! Configuration schema definitions.
//!
//! This module defines the service description the compiler reads: the
//! functions (targets) with their events, and the HTTP API settings.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::{RouteBinding, Target, TargetAlias, TargetRoutes};

pub use crate::cors::settings::{CorsOverrides, CorsSetting, OneOrMany};

/// Root configuration of a service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Service name, used for logging only.
    pub service: String,

    /// HTTP API settings shared by all routes.
    #[serde(alias = "httpApi")]
    pub http_api: HttpApiConfig,

    /// Functions in declaration order; each one is a route target.
    pub functions: Vec<FunctionConfig>,
}

/// HTTP API settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct HttpApiConfig {
    /// CORS request: absent, `true`/`false`, or a table of overrides.
    pub cors: Option<CorsSetting>,
}

/// A function declaration (route target).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FunctionConfig {
    /// Logical function name.
    pub name: String,

    /// Alias the routes should invoke instead of the bare function.
    #[serde(default, alias = "targetAlias", skip_serializing_if = "Option::is_none")]
    pub target_alias: Option<TargetAlias>,

    /// Events attached to the function.
    #[serde(default)]
    pub events: Vec<EventConfig>,
}

/// One event of a function. Only `http_api` events produce routes;
/// other event kinds are accepted and ignored.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct EventConfig {
    #[serde(alias = "httpApi", skip_serializing_if = "Option::is_none")]
    pub http_api: Option<RouteBinding>,
}

impl FunctionConfig {
    /// The route target this function stands for.
    pub fn target(&self) -> Target {
        Target {
            name: self.name.clone(),
            alias: self.target_alias.clone(),
        }
    }

    /// Route bindings declared through `http_api` events, in order.
    pub fn http_api_bindings(&self) -> impl Iterator<Item = &RouteBinding> {
        self.events.iter().filter_map(|e| e.http_api.as_ref())
    }
}

impl ServiceConfig {
    /// Targets with their route bindings, in declaration order.
    pub fn route_declarations(&self) -> Vec<TargetRoutes> {
        self.functions
            .iter()
            .map(|f| TargetRoutes::new(f.target(), f.http_api_bindings().cloned().collect()))
            .collect()
    }

    /// CORS setting of the HTTP API, if any was given.
    pub fn cors(&self) -> Option<&CorsSetting> {
        self.http_api.cors.as_ref()
    }
}
