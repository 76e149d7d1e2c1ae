//! YAML configuration parsing for keymaps
//!
//! Parses keymap.yaml files into raw bindings. Normalization happens when the
//! config is turned into a [`KeyMap`].

use std::path::Path;

use serde::Deserialize;

use super::diagnostics::DiagnosticSink;
use super::keymap::KeyMap;
use super::types::RawBinding;

/// Root structure of a keymap YAML file
///
/// A file without a `bindings` entry supplies no mapping at all, which is
/// distinct from an empty list.
#[derive(Debug, Default, Deserialize)]
pub struct KeymapConfig {
    #[serde(default)]
    pub bindings: Option<Vec<RawBinding>>,
}

impl KeymapConfig {
    /// Normalize the declared bindings into a keymap
    pub fn into_keymap(&self, sink: &dyn DiagnosticSink) -> Result<KeyMap, KeymapError> {
        KeyMap::create(self.bindings.as_deref(), sink)
    }
}

/// Load a keymap config from a YAML file
pub fn load_keymap_file(path: &Path) -> Result<KeymapConfig, KeymapError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| KeymapError::Io(format!("{}: {}", path.display(), e)))?;

    parse_keymap_yaml(&content)
}

/// Parse a keymap config from a YAML string
pub fn parse_keymap_yaml(yaml: &str) -> Result<KeymapConfig, KeymapError> {
    // A document with only comments declares nothing
    let is_blank = yaml
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#'));
    if is_blank {
        return Ok(KeymapConfig::default());
    }

    serde_yaml::from_str(yaml).map_err(|e| KeymapError::Parse(e.to_string()))
}

/// Load the user's keymap from the config directory
///
/// Returns `None` when there is no keymap file or it cannot be used.
pub fn load_user_keymap(sink: &dyn DiagnosticSink) -> Option<KeyMap> {
    let Some(path) = crate::config_paths::keymap_file() else {
        tracing::debug!("No config directory available, skipping user keymap");
        return None;
    };

    if !path.exists() {
        tracing::debug!("Keymap file not found at {}", path.display());
        return None;
    }

    match load_keymap_file(&path).and_then(|config| config.into_keymap(sink)) {
        Ok(keymap) => {
            tracing::info!(
                "Loaded {} bindings from {}",
                keymap.len(),
                path.display()
            );
            Some(keymap)
        }
        Err(e) => {
            tracing::warn!("Failed to load keymap at {}: {}", path.display(), e);
            None
        }
    }
}

/// Errors that can occur when building keymaps
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeymapError {
    /// No binding list was supplied at all
    MissingBindings,
    Io(String),
    Parse(String),
}

impl std::fmt::Display for KeymapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeymapError::MissingBindings => {
                write!(f, "A binding list must be supplied to build a keymap")
            }
            KeymapError::Io(e) => write!(f, "IO error: {}", e),
            KeymapError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for KeymapError {}
