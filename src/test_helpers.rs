//! Shared test utilities for the hic-gallery test suite.
//!
//! Provides tree builders, lookup helpers, bulk extractors, and a shape
//! assertion for the built [`Manifest`].
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let manifest = build_fixture_manifest(tmp.path());
//!
//! let case = find_case(&manifest, "inversions", "Dmel_Smith");
//! assert_eq!(image_alts(case), vec!["Dmel_Smith 01", "Dmel_Smith 02"]);
//!
//! assert_gallery_shape(&manifest, &[
//!     ("inversions", &["Dmel_Smith"]),
//!     ("translocations", &[]),
//!     ("duplications", &["Dmel_Smith"]),
//! ]);
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::aggregate::build_manifest;
use crate::config::GalleryConfig;
use crate::manifest::{Case, Category, Manifest};
use crate::naming::NamingRules;
use crate::scan::scan;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/gallery/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/gallery");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Create `<root>/images/<name>/` holding placeholder files. Returns the directory.
pub fn make_case(root: &Path, name: &str, files: &[&str]) -> PathBuf {
    let dir = root.join("images").join(name);
    fs::create_dir_all(&dir).unwrap();
    for file in files {
        fs::write(dir.join(file), "fake image").unwrap();
    }
    dir
}

/// Scan and build with the default config.
pub fn build_fixture_manifest(root: &Path) -> Manifest {
    let config = GalleryConfig::default();
    let tree = scan(root, &config).unwrap();
    build_manifest(&tree, &NamingRules::from_config(&config), &config).unwrap()
}

// =========================================================================
// Manifest lookups — panics with a clear message on miss
// =========================================================================

/// Find a category by slug. Panics if not found.
pub fn find_category<'a>(manifest: &'a Manifest, slug: &str) -> &'a Category {
    manifest
        .categories
        .iter()
        .find(|c| c.slug == slug)
        .unwrap_or_else(|| {
            panic!(
                "category '{slug}' not found. Available: {:?}",
                category_slugs(manifest)
            )
        })
}

/// Find a case by slug within a category. Panics if not found.
pub fn find_case<'a>(manifest: &'a Manifest, category: &str, slug: &str) -> &'a Case {
    let cat = find_category(manifest, category);
    cat.cases.iter().find(|c| c.slug == slug).unwrap_or_else(|| {
        panic!(
            "case '{slug}' not found in category '{category}'. Available: {:?}",
            case_slugs(cat)
        )
    })
}

// =========================================================================
// Bulk extractors
// =========================================================================

pub fn category_slugs(manifest: &Manifest) -> Vec<&str> {
    manifest.categories.iter().map(|c| c.slug.as_str()).collect()
}

pub fn case_slugs(category: &Category) -> Vec<&str> {
    category.cases.iter().map(|c| c.slug.as_str()).collect()
}

pub fn image_srcs(case: &Case) -> Vec<&str> {
    case.images.iter().map(|i| i.src.as_str()).collect()
}

pub fn image_alts(case: &Case) -> Vec<&str> {
    case.images.iter().map(|i| i.alt.as_str()).collect()
}

pub fn image_captions(case: &Case) -> Vec<&str> {
    case.images.iter().map(|i| i.caption.as_str()).collect()
}

/// Assert the full category → case tree.
///
/// Each entry is `(category slug, case slugs)`. Use `&[]` for empty categories.
pub fn assert_gallery_shape(manifest: &Manifest, expected: &[(&str, &[&str])]) {
    let expected_slugs: Vec<&str> = expected.iter().map(|(s, _)| *s).collect();
    assert_eq!(
        category_slugs(manifest),
        expected_slugs,
        "category order mismatch"
    );

    for (slug, cases) in expected {
        assert_eq!(
            case_slugs(find_category(manifest, slug)),
            cases.to_vec(),
            "cases of '{slug}' mismatch"
        );
    }
}
