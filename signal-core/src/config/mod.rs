//! Signal configuration: which actions run for which signal.
//!
//! The map is owned by a provider and handed to the dispatcher as an
//! immutable snapshot (`Arc<SignalActions>`) once per signal, so a reload in
//! the middle of a dispatch never changes the list being walked.

pub mod file;

pub use file::FileSignalConfig;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use trading::SignalError;

use crate::action::ActionDescriptor;

/// Signal key (decimal string) to ordered action descriptors.
pub type SignalActions = HashMap<String, Vec<String>>;

/// Supplies the current signal configuration.
pub trait SignalConfig: Send + Sync {
    /// Returns a snapshot of the signal → actions map.
    fn signal_actions(&self) -> Arc<SignalActions>;
}

/// A configuration whose source can be re-read at runtime.
pub trait ReloadableConfig: Send + Sync {
    /// Re-reads the source and swaps in the new snapshot.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of configured signals after the reload.
    /// * `Err(ConfigError)` - The source could not be read; the previous
    ///   snapshot stays active.
    fn reload(&self) -> Result<usize, ConfigError>;
}

/// Errors raised while loading a signal configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read signal configuration {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse signal configuration {origin}: {source}")]
    Parse {
        origin: String,
        source: serde_json::Error,
    },

    #[error("Signal key '{0}' is not a canonical integer")]
    InvalidSignalKey(String),
}

/// Parses a JSON signal map and checks that every key is an integer.
pub fn parse_signal_actions(json: &str, origin: &str) -> Result<SignalActions, ConfigError> {
    let actions: SignalActions =
        serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            origin: origin.to_string(),
            source,
        })?;

    // Keys must match `signal.to_string()` exactly or no signal can reach them.
    if let Some(key) = actions
        .keys()
        .find(|key| key.parse::<i32>().map_or(true, |n| n.to_string() != **key))
    {
        return Err(ConfigError::InvalidSignalKey(key.clone()));
    }

    Ok(actions)
}

/// Lists every descriptor in `actions` that would fail at dispatch time.
///
/// Loading does not reject these; the dispatcher reports them when the signal
/// fires. This is meant for startup warnings.
pub fn invalid_descriptors(actions: &SignalActions) -> Vec<(String, SignalError)> {
    let mut invalid: Vec<(String, SignalError)> = actions
        .iter()
        .flat_map(|(signal, descriptors)| {
            descriptors.iter().filter_map(move |descriptor| {
                ActionDescriptor::parse(descriptor)
                    .err()
                    .map(|err| (signal.clone(), err))
            })
        })
        .collect();
    invalid.sort_by_key(|(signal, _)| signal.parse::<i32>().ok());
    invalid
}

/// A fixed, in-memory configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticSignalConfig {
    actions: Arc<SignalActions>,
}

impl StaticSignalConfig {
    pub fn new(actions: SignalActions) -> Self {
        Self {
            actions: Arc::new(actions),
        }
    }

    /// Builds a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        parse_signal_actions(json, "<inline>").map(Self::new)
    }
}

impl<K, V> FromIterator<(K, V)> for StaticSignalConfig
where
    K: Into<String>,
    V: IntoIterator,
    V::Item: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(signal, actions)| {
                    (signal.into(), actions.into_iter().map(Into::into).collect())
                })
                .collect(),
        )
    }
}

impl SignalConfig for StaticSignalConfig {
    fn signal_actions(&self) -> Arc<SignalActions> {
        Arc::clone(&self.actions)
    }
}
