//! The full scan → validate → aggregate pass behind both CLI modes.

use crate::aggregate::build_manifest;
use crate::config::{self, ConfigError, GalleryConfig};
use crate::manifest::{Manifest, ManifestError};
use crate::naming::NamingRules;
use crate::scan::{self, ScanError};
use crate::validate::{Problem, validate_tree};
use std::path::{Path, PathBuf};

/// A gallery root with its resolved configuration.
#[derive(Debug, Clone)]
pub struct Gallery {
    root: PathBuf,
    config: GalleryConfig,
    rules: NamingRules,
}

/// Outcome of a build: the manifest plus every problem found on the way.
#[derive(Debug)]
pub struct BuildReport {
    pub manifest: Manifest,
    pub problems: Vec<Problem>,
}

impl Gallery {
    pub fn new(root: impl Into<PathBuf>, config: GalleryConfig) -> Self {
        let rules = NamingRules::from_config(&config);
        Self {
            root: root.into(),
            config,
            rules,
        }
    }

    /// Load `gallery.toml` (or `config_path`) and bind it to `root`.
    pub fn open(root: &Path, config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = config::load_config(root, config_path)?;
        Ok(Self::new(root, config))
    }

    pub fn images_path(&self) -> PathBuf {
        self.config.images_path(&self.root)
    }

    pub fn output_path(&self) -> PathBuf {
        self.config.output_path(&self.root)
    }

    /// Validate only. Never writes anything.
    pub fn check(&self) -> Result<Vec<Problem>, ScanError> {
        let tree = scan::scan(&self.root, &self.config)?;
        Ok(validate_tree(&tree, &self.rules))
    }

    /// Validate and build the manifest in memory.
    pub fn build(&self) -> Result<BuildReport, ScanError> {
        let tree = scan::scan(&self.root, &self.config)?;
        let problems = validate_tree(&tree, &self.rules);
        let manifest = build_manifest(&tree, &self.rules, &self.config)?;
        Ok(BuildReport { manifest, problems })
    }

    /// Write a manifest to the configured output path.
    pub fn write(&self, manifest: &Manifest) -> Result<PathBuf, ManifestError> {
        let path = self.output_path();
        manifest.write(&path)?;
        Ok(path)
    }
}
