//! Runtime settings injected into gateway components
//!
//! Components never read the process environment themselves; they receive
//! an explicit settings struct at construction time, which keeps tests
//! deterministic. `from_env` exists for composition roots that still want
//! the conventional environment-variable resolution.

use std::env;
use std::path::PathBuf;

/// Environment variable naming the configurations root directory.
pub const CONFIGURATIONS_DIR_ENV: &str = "RL_CONFIGURATIONS_DIR";

/// Deployment default for the configurations root.
const DEFAULT_CONFIGURATIONS_DIR: &str = "/rl_configurations";

/// Explicit configuration handed to gateway components at construction.
#[derive(Debug, Clone)]
pub struct GatewaySettings {
    /// Root directory holding unprocessed configuration files and the
    /// `processing`/`done`/`error` lifecycle subdirectories.
    pub configurations_dir: PathBuf,
}

impl GatewaySettings {
    /// Settings rooted at the given directory.
    pub fn new(configurations_dir: impl Into<PathBuf>) -> Self {
        Self {
            configurations_dir: configurations_dir.into(),
        }
    }

    /// Resolve settings from the process environment, falling back to the
    /// deployment default when the variable is unset.
    pub fn from_env() -> Self {
        let dir = env::var(CONFIGURATIONS_DIR_ENV)
            .unwrap_or_else(|_| DEFAULT_CONFIGURATIONS_DIR.to_string());
        Self::new(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_keep_the_injected_root() {
        let settings = GatewaySettings::new("/tmp/configs");
        assert_eq!(settings.configurations_dir, PathBuf::from("/tmp/configs"));
    }
}
