//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! service file (TOML/JSON)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!     → route_declarations() + cors() feed the compiler
//!
//! In watch mode:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → result sent to the compile loop
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All top-level sections have defaults to allow minimal files
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError, Format};
pub use schema::{CorsOverrides, CorsSetting, FunctionConfig, OneOrMany, ServiceConfig};
