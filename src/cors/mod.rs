//! CORS subsystem.
//!
//! # Data Flow
//! ```text
//! CorsSetting (absent | bool | overrides)  +  bound methods (from routing)
//!     → policy.rs (per-field fallback, method derivation)
//!     → Option<CorsPolicy> (handed to the renderer)
//! ```

pub mod policy;
pub mod settings;

pub use policy::{merge_cors, CorsPolicy, DEFAULT_ALLOWED_HEADERS, DEFAULT_ALLOWED_ORIGINS};
pub use settings::{CorsOverrides, CorsSetting, OneOrMany};
