//! Environment access for base path resolution.

use std::collections::HashMap;

/// Default name of the explicit base path override variable.
pub const DEFAULT_BASE_OVERRIDE_VAR: &str = "DOCS_BASE";

/// Default name of the flag set by the automated build environment.
pub const DEFAULT_CI_FLAG_VAR: &str = "GITHUB_ACTIONS";

/// Default name of the `owner/name` repository identifier variable.
pub const DEFAULT_REPOSITORY_VAR: &str = "GITHUB_REPOSITORY";

/// A read-only source of environment variables.
pub trait EnvSource {
    /// Look up a variable. Unset and non-unicode values are both `None`.
    fn var(&self, key: &str) -> Option<String>;

    /// Look up a variable, treating empty or whitespace-only values as unset.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|v| !v.trim().is_empty())
    }

    /// Whether a boolean-like flag is switched on.
    ///
    /// Any non-empty value counts except `0`, `false`, `no` and `off`.
    fn flag(&self, key: &str) -> bool {
        match self.non_empty(key) {
            Some(v) => !matches!(
                v.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            ),
            None => false,
        }
    }
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for HashMap<&str, &str> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).map(|v| v.to_string())
    }
}

/// Names of the variables consulted while resolving the base path.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct EnvNames {
    /// Explicit override, used verbatim when non-empty
    pub base_override: String,
    /// Flag indicating an automated build
    pub ci_flag: String,
    /// Repository identifier of the form `owner/name`
    pub repository: String,
}

impl Default for EnvNames {
    fn default() -> Self {
        Self {
            base_override: DEFAULT_BASE_OVERRIDE_VAR.to_string(),
            ci_flag: DEFAULT_CI_FLAG_VAR.to_string(),
            repository: DEFAULT_REPOSITORY_VAR.to_string(),
        }
    }
}
