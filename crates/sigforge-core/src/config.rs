//! Persistence for the signature form between CLI commands.
//!
//! `init` writes a [`SignatureForm`] to `signature.json`; `render` and `gallery`
//! load it back. The file uses the same camelCase keys as the web form, and
//! missing keys take their defaults.

use std::path::Path;

use crate::error::{Result, SignatureError};
use crate::form::SignatureForm;

/// Form file name used when no path is given.
pub const DEFAULT_FORM_FILE: &str = "signature.json";

impl SignatureForm {
    /// Load a form from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| SignatureError::ConfigNotFound {
            path: path.to_path_buf(),
            source: e,
        })?;
        let form: SignatureForm =
            serde_json::from_str(&contents).map_err(|e| SignatureError::ConfigParse {
                path: path.to_path_buf(),
                source: e,
            })?;
        tracing::info!(path = %path.display(), "loaded signature form");
        Ok(form)
    }

    /// Save the form as pretty-printed JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| SignatureError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json)?;
        tracing::info!(path = %path.display(), "saved signature form");
        Ok(())
    }
}
