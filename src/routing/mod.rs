//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! TargetRoutes[] (targets + raw bindings, declaration order)
//!     → binding.rs (string / object → { method?, path? })
//!     → resolver.rs (validate, build route key, detect conflicts)
//!     → table.rs (RouteTableBuilder → frozen RouteTable)
//!     → Return: Resolution { table, bound_methods } or CompileError
//! ```
//!
//! # Design Decisions
//! - Routes compiled once, immutable afterwards
//! - Paths are opaque strings; only the literal `*` has meaning
//! - Deterministic: same input always yields the same table
//! - `ANY` and explicit methods never share a path

pub mod binding;
pub mod method;
pub mod resolver;
pub mod table;
pub mod target;

pub use binding::RouteBinding;
pub use method::{Method, RouteMethod};
pub use resolver::resolve_routes;
pub use table::{Resolution, RouteEntry, RouteKey, RouteTable, RouteTableBuilder};
pub use target::{Target, TargetAlias, TargetRoutes};
