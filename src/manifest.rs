//! The `data.json` manifest consumed by the gallery front-end.
//!
//! ```json
//! {
//!   "title": "Hi-C Gallery",
//!   "tagline": "...",
//!   "categories": [
//!     {
//!       "slug": "inversions",
//!       "name": "Inversions",
//!       "description": "",
//!       "coverImage": "images/sp1_au1/cover_inversion.png",
//!       "cases": [
//!         {
//!           "slug": "sp1_au1",
//!           "name": "sp1 — au1",
//!           "description": "",
//!           "coverImage": "images/sp1_au1/cover_inversion.png",
//!           "images": [
//!             { "src": "images/sp1_au1/inversion_sp1_au1_01.png", "alt": "sp1_au1 01", "caption": "..." }
//!           ]
//!         }
//!       ]
//!     },
//!     { "slug": "translocations", ... },
//!     { "slug": "duplications", ... }
//!   ]
//! }
//! ```
//!
//! `categories` is a fixed-size array, so the three categories and their order
//! are part of the type. Descriptions are always empty; they are reserved for
//! manual curation on the front-end side.

use crate::naming::VariantKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub title: String,
    pub tagline: String,
    pub categories: [Category; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub cover_image: Option<String>,
    pub cases: Vec<Case>,
}

impl Category {
    /// Empty category for a variant kind: `inversions` / `Inversions`.
    pub fn empty(kind: VariantKind) -> Self {
        let slug = kind.category_slug();
        Self {
            slug: slug.to_string(),
            name: capitalize(slug),
            description: String::new(),
            cover_image: None,
            cases: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub cover_image: Option<String>,
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
    pub caption: String,
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl Manifest {
    /// Pretty-printed JSON (2-space indent, non-ASCII kept literal, trailing newline).
    pub fn to_json(&self) -> Result<String, ManifestError> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Write the manifest, replacing any previous file.
    pub fn write(&self, path: &Path) -> Result<(), ManifestError> {
        let json = self.to_json()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ManifestError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, json).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn case_count(&self) -> usize {
        self.categories.iter().map(|c| c.cases.len()).sum()
    }

    pub fn image_count(&self) -> usize {
        self.categories
            .iter()
            .flat_map(|c| &c.cases)
            .map(|c| c.images.len())
            .sum()
    }
}
