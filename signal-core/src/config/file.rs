use log::info;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use super::{parse_signal_actions, ConfigError, ReloadableConfig, SignalActions, SignalConfig};

/// Signal configuration backed by a JSON file.
///
/// The file is read once on [`FileSignalConfig::load`] and again on every
/// [`ReloadableConfig::reload`]. Readers always get a complete snapshot.
#[derive(Debug)]
pub struct FileSignalConfig {
    path: PathBuf,
    current: RwLock<Arc<SignalActions>>,
}

impl FileSignalConfig {
    /// Loads the configuration file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a JSON object of signal → action list.
    ///
    /// # Returns
    ///
    /// * `Ok(FileSignalConfig)` on success.
    /// * `Err(ConfigError)` if the file is missing or malformed.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let actions = read_signal_file(&path)?;
        info!(
            "Loaded {} signal(s) from {}",
            actions.len(),
            path.display()
        );
        Ok(Self {
            path,
            current: RwLock::new(Arc::new(actions)),
        })
    }

    /// Returns the path the configuration is read from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SignalConfig for FileSignalConfig {
    fn signal_actions(&self) -> Arc<SignalActions> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }
}

impl ReloadableConfig for FileSignalConfig {
    fn reload(&self) -> Result<usize, ConfigError> {
        let actions = read_signal_file(&self.path)?;
        let count = actions.len();
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(actions);
        info!("Reloaded {} signal(s) from {}", count, self.path.display());
        Ok(count)
    }
}

fn read_signal_file(path: &Path) -> Result<SignalActions, ConfigError> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_signal_actions(&json, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_file() {
        let file = write_config(r#"{"1": ["setUp", "performCalc"]}"#);
        let config = FileSignalConfig::load(file.path()).unwrap();

        assert_eq!(config.path(), file.path());
        assert_eq!(config.signal_actions()["1"], vec!["setUp", "performCalc"]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileSignalConfig::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_reload_swaps_snapshot() {
        let file = write_config(r#"{"1": ["setUp"]}"#);
        let config = FileSignalConfig::load(file.path()).unwrap();
        let before = config.signal_actions();

        std::fs::write(file.path(), r#"{"1": ["reverse"], "2": ["doAlgo"]}"#).unwrap();
        assert_eq!(config.reload().unwrap(), 2);

        // Snapshots taken before the reload are unaffected.
        assert_eq!(before["1"], vec!["setUp"]);
        assert_eq!(config.signal_actions()["1"], vec!["reverse"]);
    }

    #[test]
    fn test_failed_reload_keeps_previous_snapshot() {
        let file = write_config(r#"{"1": ["setUp"]}"#);
        let config = FileSignalConfig::load(file.path()).unwrap();

        std::fs::write(file.path(), "not json").unwrap();
        assert!(matches!(config.reload(), Err(ConfigError::Parse { .. })));
        assert_eq!(config.signal_actions()["1"], vec!["setUp"]);
    }
}
