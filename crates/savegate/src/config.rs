//! Dialog configuration.
//!
//! [`DialogConfig`] holds every caller-tunable aspect of the dialog. It can be
//! built in code or loaded from TOML; every field has a default, so an empty
//! document is a valid configuration.
//!
//! ```toml
//! title = "Save Scenes"
//! exclusive = false
//! theme = "dark"
//!
//! [min_size]
//! width = 480.0
//! height = 320.0
//! ```

use std::path::Path;

use savegate_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::Size;
use crate::theme::ThemeMode;

/// Caller-tunable settings for a [`SaveConfirmationDialog`](crate::SaveConfirmationDialog).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DialogConfig {
    /// Window title.
    pub title: String,
    /// Text of the label above the item list. Empty hides the label row.
    pub prompt: String,
    /// Caption of the primary button.
    pub save_label: String,
    /// Caption of the cancel button.
    pub cancel_label: String,
    /// Caption of the discard button.
    pub dont_save_label: String,
    /// Absolute minimum window size.
    pub min_size: Size,
    /// Minimum height of the item list.
    pub list_min_height: f32,
    /// Whether the dialog captures all input to its owner window while open.
    ///
    /// A non-exclusive dialog cancels itself when the owner regains focus.
    pub exclusive: bool,
    /// Whether clicking below the last row clears the selection.
    pub deselect_on_empty_click: bool,
    /// Initial theme.
    pub theme: ThemeMode,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            title: "Save Content".to_string(),
            prompt: "Select resources to save.".to_string(),
            save_label: "Save & Close".to_string(),
            cancel_label: "Cancel".to_string(),
            dont_save_label: "Don't Save".to_string(),
            min_size: Size::new(400.0, 300.0),
            list_min_height: 200.0,
            exclusive: true,
            deselect_on_empty_click: true,
            theme: ThemeMode::Light,
        }
    }
}

impl DialogConfig {
    /// Parse and validate a configuration from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loaded dialog config");
        Ok(config)
    }

    /// Check that sizes are finite and non-negative and captions are present.
    pub fn validate(&self) -> Result<()> {
        check_extent("min_size.width", self.min_size.width)?;
        check_extent("min_size.height", self.min_size.height)?;
        check_extent("list_min_height", self.list_min_height)?;

        for (field, caption) in [
            ("save_label", &self.save_label),
            ("cancel_label", &self.cancel_label),
            ("dont_save_label", &self.dont_save_label),
        ] {
            if caption.trim().is_empty() {
                return Err(Error::invalid_config(field, "button caption must not be empty"));
            }
        }
        Ok(())
    }
}

fn check_extent(field: &'static str, value: f32) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::invalid_config(
            field,
            format!("expected a finite, non-negative size, got {value}"),
        ));
    }
    Ok(())
}
