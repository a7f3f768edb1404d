//! Backend targets that routes resolve to.

use serde::{Deserialize, Serialize};

use crate::routing::binding::RouteBinding;

/// A named backend, optionally pinned to an alias such as a published version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Target {
    /// Logical name of the backend.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<TargetAlias>,
}

/// Alias sub-reference of a target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct TargetAlias {
    /// Alias name (e.g. "live").
    pub name: String,

    /// Logical id of the alias resource, when the renderer needs to depend on it.
    #[serde(default, alias = "logicalId", skip_serializing_if = "Option::is_none")]
    pub logical_id: Option<String>,
}

impl Target {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    /// Pin this target to an alias.
    pub fn with_alias(mut self, alias: TargetAlias) -> Self {
        self.alias = Some(alias);
        self
    }
}

impl TargetAlias {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            logical_id: None,
        }
    }
}

/// One target together with the raw bindings declared for it.
#[derive(Debug, Clone)]
pub struct TargetRoutes {
    pub target: Target,
    pub bindings: Vec<RouteBinding>,
}

impl TargetRoutes {
    pub fn new(target: Target, bindings: Vec<RouteBinding>) -> Self {
        Self { target, bindings }
    }
}
