//! Gallery configuration.
//!
//! Handles loading and validating the optional `gallery.toml` at the gallery
//! root. Without the file every value takes its stock default, which matches
//! the layout the front-end expects:
//!
//! ```text
//! gallery/
//! ├── gallery.toml      # optional
//! ├── images/           # case directories
//! └── data.json         # generated manifest
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "Hi-C Gallery"
//! tagline = "Explore Hi-C contact maps by category → case → annotated views."
//! images_dir = "images"          # relative to the gallery root
//! output = "data.json"           # relative to the gallery root
//! image_extensions = ["png"]     # matched case-insensitively
//! caption_extension = "txt"      # caption sidecar extension
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the gallery root when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "gallery.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Gallery configuration loaded from `gallery.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Manifest `title`.
    pub title: String,
    /// Manifest `tagline`.
    pub tagline: String,
    /// Directory holding the case folders, relative to the gallery root.
    pub images_dir: String,
    /// Manifest path, relative to the gallery root.
    pub output: String,
    /// Extensions accepted for images and covers (no leading dot).
    pub image_extensions: Vec<String>,
    /// Extension of caption sidecars (no leading dot).
    pub caption_extension: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            title: "Hi-C Gallery".to_string(),
            tagline: "Explore Hi-C contact maps by category \u{2192} case \u{2192} annotated views."
                .to_string(),
            images_dir: "images".to_string(),
            output: "data.json".to_string(),
            image_extensions: vec!["png".to_string()],
            caption_extension: "txt".to_string(),
        }
    }
}

impl GalleryConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.images_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "images_dir must not be empty".into(),
            ));
        }
        if self.output.trim().is_empty() {
            return Err(ConfigError::Validation("output must not be empty".into()));
        }
        if self.image_extensions.is_empty() {
            return Err(ConfigError::Validation(
                "image_extensions must not be empty".into(),
            ));
        }
        for ext in self
            .image_extensions
            .iter()
            .chain(std::iter::once(&self.caption_extension))
        {
            if ext.is_empty() || ext.contains('.') {
                return Err(ConfigError::Validation(format!(
                    "extension {ext:?} must be non-empty and have no dot"
                )));
            }
        }
        if self
            .image_extensions
            .iter()
            .any(|e| e.eq_ignore_ascii_case(&self.caption_extension))
        {
            return Err(ConfigError::Validation(format!(
                "caption_extension {:?} is also an image extension",
                self.caption_extension
            )));
        }
        Ok(())
    }

    /// Absolute-or-relative path of the images directory under `root`.
    pub fn images_path(&self, root: &Path) -> PathBuf {
        root.join(&self.images_dir)
    }

    pub fn output_path(&self, root: &Path) -> PathBuf {
        root.join(&self.output)
    }
}

/// Parse and validate a config from TOML text.
pub fn parse_config(content: &str) -> Result<GalleryConfig, ConfigError> {
    let config: GalleryConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load the gallery config.
///
/// With an explicit path the file must exist. Otherwise `gallery.toml` in
/// `root` is used if present, and stock defaults if not.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<GalleryConfig, ConfigError> {
    let path = match explicit {
        Some(path) if !path.exists() => return Err(ConfigError::NotFound(path.to_path_buf())),
        Some(path) => path.to_path_buf(),
        None => {
            let path = root.join(CONFIG_FILE_NAME);
            if !path.exists() {
                return Ok(GalleryConfig::default());
            }
            path
        }
    };
    let content = fs::read_to_string(&path)?;
    parse_config(&content)
}

/// Returns a fully-commented stock `gallery.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Hi-C Gallery Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# Manifest title and tagline shown by the front-end.
title = "Hi-C Gallery"
tagline = "Explore Hi-C contact maps by category → case → annotated views."

# Directory holding the case folders, relative to the gallery root.
images_dir = "images"

# Where the manifest is written, relative to the gallery root.
output = "data.json"

# Extensions accepted for images and cover files (case-insensitive).
image_extensions = ["png"]

# Extension of the caption sidecar next to each image.
caption_extension = "txt"
"##
}
