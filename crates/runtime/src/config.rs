//! Runtime configuration structures and loaders.
use std::env;
use std::path::{Path, PathBuf};

use pursuit_core::PursuitConfig;

use crate::error::{Result, RuntimeError};

/// Everything needed to start a [`crate::PursuitSession`].
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub pursuit: PursuitConfig,
    /// Capacity of each event bus topic.
    pub event_buffer_size: usize,
    /// File the pursuit tunables were loaded from, if any.
    pub config_path: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            pursuit: PursuitConfig::default(),
            event_buffer_size: Self::DEFAULT_EVENT_BUFFER_SIZE,
            config_path: None,
        }
    }
}

impl RuntimeConfig {
    pub const DEFAULT_EVENT_BUFFER_SIZE: usize = 100;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `PURSUIT_CONFIG` - Path to a TOML file of pursuit tunables (default: built-in values)
    /// - `PURSUIT_EVENT_BUFFER` - Per-topic event buffer size (default: 100)
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = env::var_os("PURSUIT_CONFIG").map(PathBuf::from) {
            config.pursuit = ConfigLoader::load(&path)?;
            config.config_path = Some(path);
        }

        if let Ok(raw) = env::var("PURSUIT_EVENT_BUFFER") {
            let size = raw.parse::<usize>().map_err(|_| RuntimeError::InvalidEnv {
                key: "PURSUIT_EVENT_BUFFER",
                value: raw.clone(),
            })?;
            config.event_buffer_size = size.max(1);
        }

        Ok(config)
    }
}

/// Loader for pursuit tunables from TOML files.
///
/// Missing keys fall back to their defaults, so a file only needs to name the
/// values it changes.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> Result<PursuitConfig> {
        let content = std::fs::read_to_string(path).map_err(|source| RuntimeError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|err| match err {
            RuntimeError::ParseConfig { source, .. } => RuntimeError::ParseConfig {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        tracing::debug!(path = %path.display(), "loaded pursuit config");
        Ok(config)
    }

    /// Parses and validates a TOML document.
    pub fn parse(content: &str) -> Result<PursuitConfig> {
        let config: PursuitConfig =
            toml::from_str(content).map_err(|source| RuntimeError::ParseConfig {
                path: PathBuf::new(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = ConfigLoader::parse(
            r#"
            bribe_cost_per_star = 12
            night_penalty = 2.5
            "#,
        )
        .unwrap();

        assert_eq!(config.bribe_cost_per_star, 12);
        assert_eq!(config.night_penalty, 2.5);
        assert_eq!(config.decay_seconds_per_star, 90.0);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = ConfigLoader::parse("severity_steps = [0, 1, 1, 6, 10, 15]")
            .unwrap_err();

        assert!(matches!(err, RuntimeError::InvalidConfig(_)));
    }

    #[test]
    fn load_reports_the_failing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pursuit.toml");
        std::fs::write(&path, "search_duration = \"soon\"").unwrap();

        match ConfigLoader::load(&path) {
            Err(RuntimeError::ParseConfig { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("unexpected result: {other:?}"),
        }

        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            ConfigLoader::load(&missing),
            Err(RuntimeError::ReadConfig { .. })
        ));
    }
}
