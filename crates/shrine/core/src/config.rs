use serde::{Deserialize, Serialize};

/// Engine settings read from `config.toml` in the data directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Namespace given to recipes loaded from files (`<namespace>:<file stem>`).
    pub namespace: String,

    /// Recipe directory, relative to the data directory.
    pub recipes_dir: String,

    /// Register the built-in recipes when no recipe file loads.
    pub use_builtin_defaults: bool,
}

impl EngineConfig {
    pub const DEFAULT_NAMESPACE: &'static str = "kamigami";
    pub const DEFAULT_RECIPES_DIR: &'static str = "recipes";

    pub fn new() -> Self {
        Self {
            namespace: Self::DEFAULT_NAMESPACE.to_string(),
            recipes_dir: Self::DEFAULT_RECIPES_DIR.to_string(),
            use_builtin_defaults: true,
        }
    }

    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Self::new()
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
