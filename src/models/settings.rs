//! Application Configuration
//!
//! Credentials are resolved once from the process environment at startup. Their
//! presence gates whole features: without an analysis key the critique flow is
//! unavailable, and without the full persistence triple the login/history
//! features are disabled rather than failing.

use serde::{Deserialize, Serialize};

/// Environment variable holding the analysis service credential.
pub const ANALYSIS_API_KEY_VAR: &str = "API_KEY";
/// Accepted alias for the analysis service credential.
pub const ANALYSIS_API_KEY_ALIAS_VAR: &str = "GEMINI_API_KEY";
/// Environment variables holding the persistence provider triple.
pub const PERSISTENCE_API_KEY_VAR: &str = "FIREBASE_API_KEY";
pub const PERSISTENCE_AUTH_DOMAIN_VAR: &str = "FIREBASE_AUTH_DOMAIN";
pub const PERSISTENCE_PROJECT_ID_VAR: &str = "FIREBASE_PROJECT_ID";

/// Resolved application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Credential for the analysis service; absence disables the critique flow.
    pub analysis_api_key: Option<String>,
    /// Persistence provider credentials; absence disables login and history.
    pub persistence: Option<PersistenceConfig>,
}

/// Credential triple for the persistence provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistenceConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
}

impl AppConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let analysis_api_key =
            get(ANALYSIS_API_KEY_VAR).or_else(|| get(ANALYSIS_API_KEY_ALIAS_VAR));

        let persistence = match (
            get(PERSISTENCE_API_KEY_VAR),
            get(PERSISTENCE_AUTH_DOMAIN_VAR),
            get(PERSISTENCE_PROJECT_ID_VAR),
        ) {
            (Some(api_key), Some(auth_domain), Some(project_id)) => Some(PersistenceConfig {
                api_key,
                auth_domain,
                project_id,
            }),
            _ => None,
        };

        Self {
            analysis_api_key,
            persistence,
        }
    }

    /// Whether the analysis service credential is present.
    pub fn analysis_enabled(&self) -> bool {
        self.analysis_api_key.is_some()
    }

    /// Whether login and history features are available.
    pub fn history_enabled(&self) -> bool {
        self.persistence.is_some()
    }
}
