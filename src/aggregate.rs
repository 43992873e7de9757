//! Grouping of scanned images into categories and cases.
//!
//! Stage 2 of the build. Each case directory is partitioned by variant type
//! and every non-empty partition becomes one [`Case`] in the matching
//! category. A directory holding inversion and duplication images therefore
//! shows up twice, with the same slug and name, once per category.
//!
//! ## Covers
//!
//! Per case, the first available wins:
//!
//! 1. `cover_<type>.<ext>` in the directory
//! 2. `cover.<ext>` in the directory
//! 3. the case's first image
//!
//! A category's cover is its first case's cover.
//!
//! ## Ordering
//!
//! - Categories: inversions, translocations, duplications (fixed).
//! - Cases: slug, case-insensitive.
//! - Images: index ascending, then file name case-insensitive.
//!
//! Only grammar-valid images are included. Near-misses and foreign files
//! never reach the manifest; problems with included images (missing caption,
//! folder mismatch) are reported by [`crate::validate`] and do not drop them.

use crate::config::GalleryConfig;
use crate::manifest::{Case, Category, Image, Manifest};
use crate::naming::{EntryKind, ImageName, NamingRules, VariantKind, human_case_name};
use crate::scan::{CaseDir, ScanError, ScannedTree};
use std::collections::BTreeMap;

/// One slot per category, so a fourth category cannot be produced.
struct CategorySlots {
    inversions: Category,
    translocations: Category,
    duplications: Category,
}

impl CategorySlots {
    fn new() -> Self {
        Self {
            inversions: Category::empty(VariantKind::Inversion),
            translocations: Category::empty(VariantKind::Translocation),
            duplications: Category::empty(VariantKind::Duplication),
        }
    }

    fn get_mut(&mut self, kind: VariantKind) -> &mut Category {
        match kind {
            VariantKind::Inversion => &mut self.inversions,
            VariantKind::Translocation => &mut self.translocations,
            VariantKind::Duplication => &mut self.duplications,
        }
    }

    fn into_array(self) -> [Category; 3] {
        [self.inversions, self.translocations, self.duplications]
    }
}

/// Build the manifest from a scan.
///
/// Only fails on I/O errors while reading caption sidecars.
pub fn build_manifest(
    tree: &ScannedTree,
    rules: &NamingRules,
    config: &GalleryConfig,
) -> Result<Manifest, ScanError> {
    let mut slots = CategorySlots::new();
    for dir in &tree.case_dirs {
        for (kind, case) in build_cases(dir, rules)? {
            slots.get_mut(kind).cases.push(case);
        }
    }

    Ok(Manifest {
        title: config.title.clone(),
        tagline: config.tagline.clone(),
        categories: slots.into_array().map(finish_category),
    })
}

/// Sort cases and fill in the category cover.
fn finish_category(mut category: Category) -> Category {
    category.cases.sort_by(|a, b| {
        a.slug
            .to_lowercase()
            .cmp(&b.slug.to_lowercase())
            .then_with(|| a.slug.cmp(&b.slug))
    });
    if category.cover_image.is_none() {
        category.cover_image = category.cases.first().and_then(|c| c.cover_image.clone());
    }
    category
}

/// Image ordering: index, then file name case-insensitively, then exact name.
fn sort_images(images: &mut [(ImageName, &str)]) {
    images.sort_by(|(a, file_a), (b, file_b)| {
        a.index
            .cmp(&b.index)
            .then_with(|| file_a.to_lowercase().cmp(&file_b.to_lowercase()))
            .then_with(|| file_a.cmp(file_b))
    });
}

/// One case per variant type present in the directory.
fn build_cases(dir: &CaseDir, rules: &NamingRules) -> Result<Vec<(VariantKind, Case)>, ScanError> {
    let mut partitions: BTreeMap<VariantKind, Vec<(ImageName, &str)>> = BTreeMap::new();
    let mut typed_covers: BTreeMap<VariantKind, &str> = BTreeMap::new();
    let mut generic_cover: Option<&str> = None;

    // `dir.files` is sorted, so the first cover of each name wins.
    for file in &dir.files {
        match rules.classify(file) {
            EntryKind::Image(image) => partitions
                .entry(image.kind)
                .or_default()
                .push((image, file.as_str())),
            EntryKind::Cover(Some(kind)) => {
                typed_covers.entry(kind).or_insert(file.as_str());
            }
            EntryKind::Cover(None) => {
                generic_cover.get_or_insert(file.as_str());
            }
            _ => {}
        }
    }

    let name = human_case_name(&dir.name);
    let mut cases = Vec::with_capacity(partitions.len());
    for (kind, mut entries) in partitions {
        sort_images(&mut entries);
        let images = entries
            .iter()
            .map(|(image, file)| -> Result<Image, ScanError> {
                Ok(Image {
                    src: dir.rel_file(file),
                    alt: image.alt(),
                    caption: read_caption(dir, rules, file)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let cover_image = typed_covers
            .get(&kind)
            .copied()
            .or(generic_cover)
            .map(|file| dir.rel_file(file))
            .or_else(|| images.first().map(|i| i.src.clone()));

        cases.push((
            kind,
            Case {
                slug: dir.name.clone(),
                name: name.clone(),
                description: String::new(),
                cover_image,
                images,
            },
        ));
    }
    Ok(cases)
}

/// Trimmed sidecar text, or empty when there is no sidecar.
fn read_caption(dir: &CaseDir, rules: &NamingRules, image_file: &str) -> Result<String, ScanError> {
    let caption = rules.caption_name(image_file);
    if !dir.has_file(&caption) {
        return Ok(String::new());
    }
    Ok(dir.read_file(&caption)?.trim().to_string())
}
