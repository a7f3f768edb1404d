//! Route keys and the compiled route table.
//!
//! # Design Decisions
//! - Iteration follows insertion (declaration) order, lookups go through a hash index
//! - The table is only mutable through [`RouteTableBuilder`]; a finished table is frozen
//! - Targets are borrowed from the caller, never copied or mutated

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::routing::binding::CATCH_ALL;
use crate::routing::method::{Method, RouteMethod};
use crate::routing::target::Target;

/// Canonical identity of a route: `"<METHOD> <path>"` or `"*"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RouteKey {
    /// Global catch-all, matches every request.
    CatchAll,
    Route { method: RouteMethod, path: String },
}

impl RouteKey {
    pub fn route(method: RouteMethod, path: impl Into<String>) -> Self {
        RouteKey::Route {
            method,
            path: path.into(),
        }
    }

    /// Method this key was registered under; the catch-all reports `ANY`.
    pub fn method(&self) -> RouteMethod {
        match self {
            RouteKey::CatchAll => RouteMethod::Any,
            RouteKey::Route { method, .. } => *method,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            RouteKey::CatchAll => CATCH_ALL,
            RouteKey::Route { path, .. } => path,
        }
    }

    pub fn is_catch_all(&self) -> bool {
        matches!(self, RouteKey::CatchAll)
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteKey::CatchAll => f.write_str(CATCH_ALL),
            RouteKey::Route { method, path } => write!(f, "{} {}", method, path),
        }
    }
}

impl Serialize for RouteKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One resolved route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry<'a> {
    pub key: RouteKey,
    pub target: &'a Target,
}

/// Ordered mapping from route key to target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable<'a> {
    entries: Vec<RouteEntry<'a>>,
    index: HashMap<RouteKey, usize>,
}

impl<'a> RouteTable<'a> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &RouteKey) -> bool {
        self.index.contains_key(key)
    }

    /// Look up the target bound to a key.
    pub fn get(&self, key: &RouteKey) -> Option<&'a Target> {
        self.index.get(key).map(|&i| self.entries[i].target)
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry<'a>> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &RouteKey> {
        self.entries.iter().map(|e| &e.key)
    }

    /// Target of the global catch-all, if one was registered.
    pub fn catch_all(&self) -> Option<&'a Target> {
        self.get(&RouteKey::CatchAll)
    }
}

impl Serialize for RouteTable<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.key, entry.target)?;
        }
        map.end()
    }
}

/// Incrementally builds a [`RouteTable`] during one resolution pass.
///
/// Also tracks which concrete methods ended up bound, for CORS derivation.
#[derive(Debug, Default)]
pub struct RouteTableBuilder<'a> {
    table: RouteTable<'a>,
    bound_methods: BTreeSet<Method>,
}

impl<'a> RouteTableBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &RouteKey) -> bool {
        self.table.contains(key)
    }

    /// Insert a route. The caller has already ruled out conflicts.
    pub(crate) fn insert(&mut self, key: RouteKey, target: &'a Target) {
        debug_assert!(!self.table.contains(&key));
        self.bound_methods.extend(key.method().methods().iter().copied());
        self.table.index.insert(key.clone(), self.table.entries.len());
        self.table.entries.push(RouteEntry { key, target });
    }

    /// Freeze the table.
    pub fn finish(self) -> Resolution<'a> {
        Resolution {
            table: self.table,
            bound_methods: self.bound_methods,
        }
    }
}

/// Result of a successful resolution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub table: RouteTable<'a>,
    /// Every concrete method reachable through the table, `ANY` expanded.
    pub bound_methods: BTreeSet<Method>,
}

impl Resolution<'_> {
    pub fn has_catch_all(&self) -> bool {
        self.table.contains(&RouteKey::CatchAll)
    }
}
