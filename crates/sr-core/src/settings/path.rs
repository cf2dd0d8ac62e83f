//! Dotted-path access to settings, e.g. `options.delay` or `configs.view_offset.top`.

use serde_json::Value;
use thiserror::Error;

use super::model::Settings;

#[derive(Debug, Error)]
pub enum SettingsPathError {
    #[error("unknown settings path: {0}")]
    UnknownPath(String),

    #[error("invalid value for {path}: {source}")]
    InvalidValue {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("settings serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Settings {
    pub fn get_path(&self, path: &str) -> Result<Value, SettingsPathError> {
        let tree = serde_json::to_value(self)?;
        let mut node = &tree;
        for segment in path.split('.') {
            node = node
                .get(segment)
                .ok_or_else(|| SettingsPathError::UnknownPath(path.to_string()))?;
        }
        Ok(node.clone())
    }

    /// Replaces the value at `path`. Only existing keys can be set and the
    /// result must still deserialize into a `Settings`.
    pub fn set_path(&mut self, path: &str, value: Value) -> Result<(), SettingsPathError> {
        let mut tree = serde_json::to_value(&*self)?;
        let mut node = &mut tree;
        for segment in path.split('.') {
            node = node
                .get_mut(segment)
                .ok_or_else(|| SettingsPathError::UnknownPath(path.to_string()))?;
        }
        *node = value;

        *self = serde_json::from_value(tree).map_err(|source| SettingsPathError::InvalidValue {
            path: path.to_string(),
            source,
        })?;
        Ok(())
    }
}
