//! Demo configuration resolution
//!
//! Resolution priority for the working root:
//! 1. $FILEOPS_ROOT (must exist)
//! 2. Current directory "." (default)
//!
//! $FILEOPS_JSON (`1`, `true`, `yes`) switches the demo report to JSON.

use std::path::PathBuf;

/// Environment variable naming the demo working directory
pub const ROOT_ENV: &str = "FILEOPS_ROOT";

/// Environment variable enabling JSON output
pub const JSON_ENV: &str = "FILEOPS_JSON";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("root '{0}' does not exist")]
    RootNotFound(String),

    #[error("root '{0}' is not a directory")]
    RootNotDirectory(String),
}

/// Result type for configuration
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Resolved demo settings
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Directory the demo files are created in
    pub root: PathBuf,

    /// Print the report as JSON instead of text
    pub json_output: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            json_output: false,
        }
    }
}

impl DemoConfig {
    /// Resolve from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(root) = lookup(ROOT_ENV).filter(|value| !value.is_empty()) {
            let root_path = PathBuf::from(&root);
            if !root_path.exists() {
                return Err(ConfigError::RootNotFound(root));
            }
            if !root_path.is_dir() {
                return Err(ConfigError::RootNotDirectory(root));
            }
            config.root = root_path;
        }

        config.json_output = lookup(JSON_ENV).map(|value| is_truthy(&value)).unwrap_or(false);

        Ok(config)
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}
