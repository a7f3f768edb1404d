//! Compile errors.
//!
//! Every error is a configuration error: the declared routes are invalid and the
//! only remedy is to fix them and compile again. Messages name the offending
//! target and value so callers can surface them as-is.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Stable, machine-readable classification of a [`CompileError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    MalformedRouteSyntax,
    MissingPath,
    MissingMethod,
    InvalidCatchAllMethod,
    UnsupportedMethod,
    DuplicateRoute,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MalformedRouteSyntax => "MalformedRouteSyntax",
            ErrorKind::MissingPath => "MissingPath",
            ErrorKind::MissingMethod => "MissingMethod",
            ErrorKind::InvalidCatchAllMethod => "InvalidCatchAllMethod",
            ErrorKind::UnsupportedMethod => "UnsupportedMethod",
            ErrorKind::DuplicateRoute => "DuplicateRoute",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while compiling the route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("invalid \"<method> <path>\" route {route} in target {target}")]
    MalformedRouteSyntax { target: String, route: String },

    #[error("missing \"path\" in route {binding} of target {target}")]
    MissingPath { target: String, binding: String },

    #[error("missing \"method\" for path {path:?} in target {target}")]
    MissingMethod { target: String, path: String },

    /// The global catch-all takes no method other than `*`.
    #[error("method {method:?} cannot be combined with catch-all path \"*\" in target {target}")]
    InvalidCatchAllMethod { target: String, method: String },

    #[error("unsupported method {method:?} for path {path:?} in target {target}")]
    UnsupportedMethod {
        target: String,
        method: String,
        path: String,
    },

    /// The same route key was declared twice.
    #[error("duplicate route '{route_key}' in target {target}")]
    DuplicateRoute { target: String, route_key: String },

    /// `ANY` and an explicit method were both bound to one path.
    #[error("duplicate method for {path:?} path: '{route_key}' overlaps an existing route, in target {target}")]
    ShadowedRoute {
        target: String,
        route_key: String,
        path: String,
    },
}

impl CompileError {
    /// Machine-readable kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CompileError::MalformedRouteSyntax { .. } => ErrorKind::MalformedRouteSyntax,
            CompileError::MissingPath { .. } => ErrorKind::MissingPath,
            CompileError::MissingMethod { .. } => ErrorKind::MissingMethod,
            CompileError::InvalidCatchAllMethod { .. } => ErrorKind::InvalidCatchAllMethod,
            CompileError::UnsupportedMethod { .. } => ErrorKind::UnsupportedMethod,
            CompileError::DuplicateRoute { .. } | CompileError::ShadowedRoute { .. } => {
                ErrorKind::DuplicateRoute
            }
        }
    }

    /// Name of the target whose binding was rejected.
    pub fn target(&self) -> &str {
        match self {
            CompileError::MalformedRouteSyntax { target, .. }
            | CompileError::MissingPath { target, .. }
            | CompileError::MissingMethod { target, .. }
            | CompileError::InvalidCatchAllMethod { target, .. }
            | CompileError::UnsupportedMethod { target, .. }
            | CompileError::DuplicateRoute { target, .. }
            | CompileError::ShadowedRoute { target, .. } => target,
        }
    }
}

pub type CompileResult<T> = Result<T, CompileError>;
