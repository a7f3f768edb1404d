//! HTTP methods accepted in route bindings.
//!
//! # Design Decisions
//! - Closed set of seven methods; anything else is rejected at compile time
//! - `ANY` is not a method but a pseudo-method covering the whole set
//! - Parsing is case-insensitive, canonical form is upper case

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// A concrete HTTP method that may be bound to a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Options,
    Head,
    Delete,
}

impl Method {
    /// Every supported method, in declaration order.
    pub const ALL: [Method; 7] = [
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Patch,
        Method::Options,
        Method::Head,
        Method::Delete,
    ];

    /// Canonical upper-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Options => "OPTIONS",
            Method::Head => "HEAD",
            Method::Delete => "DELETE",
        }
    }

    /// This method as a one-element slice.
    pub fn as_slice(&self) -> &'static [Method] {
        match self {
            Method::Get => &[Method::Get],
            Method::Post => &[Method::Post],
            Method::Put => &[Method::Put],
            Method::Patch => &[Method::Patch],
            Method::Options => &[Method::Options],
            Method::Head => &[Method::Head],
            Method::Delete => &[Method::Delete],
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Method {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Returned when a method name is outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMethod(pub String);

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        Method::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == upper)
            .ok_or(UnknownMethod(upper))
    }
}

/// The method half of a route key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RouteMethod {
    /// Matches every supported method not otherwise claimed.
    Any,
    Exact(Method),
}

impl RouteMethod {
    /// The concrete methods this route method stands for.
    pub fn methods(&self) -> &'static [Method] {
        match self {
            RouteMethod::Any => &Method::ALL,
            RouteMethod::Exact(m) => m.as_slice(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteMethod::Any => "ANY",
            RouteMethod::Exact(m) => m.as_str(),
        }
    }
}

impl fmt::Display for RouteMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
