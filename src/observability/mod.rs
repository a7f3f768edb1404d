//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! compiler, resolver, CORS merger, watcher
//!     → tracing events (structured fields: route_key, target, counts)
//!     → logging.rs subscriber (pretty / compact / JSON on stderr)
//! ```
//!
//! # Design Decisions
//! - Library code only emits events; the binary installs the subscriber
//! - Per-route events at debug, per-pass summary at info

pub mod logging;
