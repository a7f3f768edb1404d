//! CORS settings as written by the user.
//!
//! These are the inputs to [`merge_cors`](super::merge_cors). They carry no
//! loader dependency, so a caller can build them directly or deserialize
//! them from any Serde format.

use serde::{Deserialize, Serialize};

/// Raw CORS setting as written by the user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CorsSetting {
    /// `true` enables the built-in policy, `false` disables CORS.
    Enabled(bool),
    Custom(CorsOverrides),
}

/// Per-field CORS overrides. Absent fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CorsOverrides {
    #[serde(alias = "allowedOrigins", skip_serializing_if = "Option::is_none")]
    pub allowed_origins: Option<OneOrMany>,

    #[serde(alias = "allowedHeaders", skip_serializing_if = "Option::is_none")]
    pub allowed_headers: Option<OneOrMany>,

    /// Explicit methods; disables derivation from the bound routes.
    #[serde(alias = "allowedMethods", skip_serializing_if = "Option::is_none")]
    pub allowed_methods: Option<OneOrMany>,

    #[serde(alias = "allowCredentials", skip_serializing_if = "Option::is_none")]
    pub allow_credentials: Option<bool>,

    #[serde(alias = "exposedResponseHeaders", skip_serializing_if = "Option::is_none")]
    pub exposed_response_headers: Option<OneOrMany>,

    /// Preflight cache duration in seconds.
    #[serde(alias = "maxAge", skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u64>,
}

/// A single string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    /// The values as a slice, whichever form was used.
    pub fn as_slice(&self) -> &[String] {
        match self {
            OneOrMany::One(value) => std::slice::from_ref(value),
            OneOrMany::Many(values) => values,
        }
    }
}
