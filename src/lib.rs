//! HTTP API route-table compiler library.

pub mod compiler;
pub mod config;
pub mod cors;
pub mod error;
pub mod observability;
pub mod routing;

pub use compiler::{compile, compile_service, CompiledApi};
pub use config::schema::ServiceConfig;
pub use cors::CorsPolicy;
pub use error::{CompileError, ErrorKind};
pub use routing::{RouteBinding, RouteKey, RouteTable, Target, TargetRoutes};
