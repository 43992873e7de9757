//! Filesystem scanning.
//!
//! Stage 1 of the build. Lists the case directories under the images
//! directory and the file names inside each one. Nothing is parsed here; the
//! result is a plain, deterministically ordered snapshot that validation and
//! aggregation both read.
//!
//! ## What is scanned
//!
//! ```text
//! <root>/images/            # must exist, fatal otherwise
//! ├── sp1_au1/              # case directory → CaseDir
//! │   ├── *.png, *.txt      # files → CaseDir::files
//! │   └── extra/            # nested directories are ignored
//! ├── .DS_Store             # hidden entries are ignored
//! └── README.md             # loose files are ignored
//! ```
//!
//! Symlinked case directories and files are followed.
//!
//! Directories are ordered by name case-insensitively (exact name breaks
//! ties) and files by exact name, so two scans of the same tree are identical.

use crate::config::GalleryConfig;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Images directory not found: {0}")]
    MissingImagesDir(PathBuf),
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// One directory directly under the images directory.
#[derive(Debug, Clone)]
pub struct CaseDir {
    /// Directory name, verbatim (the case slug).
    pub name: String,
    /// Filesystem path.
    pub path: PathBuf,
    /// Path relative to the gallery root, forward-slash separated.
    pub rel_dir: String,
    /// Names of the regular files inside, sorted.
    pub files: Vec<String>,
}

impl CaseDir {
    pub fn has_file(&self, name: &str) -> bool {
        self.files.binary_search_by(|f| f.as_str().cmp(name)).is_ok()
    }

    /// Root-relative `src` of a file in this directory.
    pub fn rel_file(&self, name: &str) -> String {
        format!("{}/{}", self.rel_dir, name)
    }

    pub fn read_file(&self, name: &str) -> Result<String, ScanError> {
        let path = self.path.join(name);
        fs::read_to_string(&path).map_err(|source| ScanError::Io { path, source })
    }
}

/// Snapshot of the images directory.
#[derive(Debug, Clone)]
pub struct ScannedTree {
    pub case_dirs: Vec<CaseDir>,
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Normalize a configured relative directory to forward slashes, no trailing slash.
fn normalize_rel(dir: &str) -> String {
    dir.replace('\\', "/").trim_end_matches('/').to_string()
}

/// Scan `<root>/<images_dir>`.
///
/// Fails with [`ScanError::MissingImagesDir`] if the images directory does
/// not exist; that is the only structural condition that aborts a run.
pub fn scan(root: &Path, config: &GalleryConfig) -> Result<ScannedTree, ScanError> {
    let images_dir = config.images_path(root);
    if !images_dir.is_dir() {
        return Err(ScanError::MissingImagesDir(images_dir));
    }
    let rel_images = normalize_rel(&config.images_dir);

    let mut case_dirs = Vec::new();
    for entry in WalkDir::new(&images_dir)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
    {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_hidden(&name) || !entry.file_type().is_dir() {
            continue;
        }
        let files = list_files(entry.path())?;
        case_dirs.push(CaseDir {
            rel_dir: format!("{rel_images}/{name}"),
            name,
            path: entry.into_path(),
            files,
        });
    }

    case_dirs.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });

    Ok(ScannedTree { case_dirs })
}

fn list_files(dir: &Path) -> Result<Vec<String>, ScanError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
    {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_hidden(&name) || !entry.file_type().is_file() {
            continue;
        }
        files.push(name);
    }
    files.sort();
    Ok(files)
}
