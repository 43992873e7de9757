//! Structural validation of case directories.
//!
//! Validation never stops a build. It produces a list of [`Problem`]s that
//! the CLI either prints as warnings (build) or treats as failure (`--check`).
//! Every problem in the tree is collected; nothing short-circuits except a bad
//! folder name, which suppresses the file checks of that one directory.
//!
//! ## Rules
//!
//! | Check | Scope |
//! |-------|-------|
//! | Folder name is `(case_)?<speciesID>_<authorID>` | directory |
//! | Image name follows the grammar (near-misses reported) | file |
//! | Image's `<speciesID>_<authorID>` equals the folder's | file |
//! | Index unique per (directory, type) | file |
//! | Caption sidecar exists | file |
//! | Directory contains at least one image | directory |
//!
//! Two images of different types may share an index: `inversion_sp1_au1_01.png`
//! and `duplication_sp1_au1_01.png` live in different cases.

use crate::naming::{CaseDirName, EntryKind, NamingRules, VariantKind};
use crate::scan::{CaseDir, ScannedTree};
use std::collections::HashMap;
use thiserror::Error;

/// A human-readable structural problem found in the images directory.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    #[error(
        "Bad case folder name: {folder} (expected <speciesID>_<authorID> or case_<speciesID>_<authorID>)"
    )]
    BadFolderName { folder: String },
    #[error("[{folder}] Bad file name: {file} (expected <type>_<speciesID>_<authorID>_XX.<ext>)")]
    BadFileName { folder: String, file: String },
    #[error("[{folder}] Folder and file disagree: {file}")]
    FolderFileMismatch { folder: String, file: String },
    #[error("[{folder}] Duplicate {kind} index {index} in {file} (already used by {first})")]
    DuplicateIndex {
        folder: String,
        kind: VariantKind,
        index: String,
        file: String,
        first: String,
    },
    #[error("[{folder}] Missing caption {caption} for {file}")]
    MissingCaption {
        folder: String,
        file: String,
        caption: String,
    },
    #[error("[{folder}] No valid images found.")]
    NoValidImages { folder: String },
}

/// Validate every case directory of a scan, in scan order.
pub fn validate_tree(tree: &ScannedTree, rules: &NamingRules) -> Vec<Problem> {
    tree.case_dirs
        .iter()
        .flat_map(|dir| validate_case(dir, rules))
        .collect()
}

/// Validate one case directory. An empty list means the directory is valid.
pub fn validate_case(dir: &CaseDir, rules: &NamingRules) -> Vec<Problem> {
    let folder = dir.name.clone();
    let Some(dir_name) = CaseDirName::parse(&dir.name) else {
        return vec![Problem::BadFolderName { folder }];
    };
    let expected_pair = dir_name.pair();

    let mut problems = Vec::new();
    let mut seen: HashMap<(VariantKind, u8), &str> = HashMap::new();
    let mut image_count = 0usize;

    for file in &dir.files {
        let image = match rules.classify(file) {
            EntryKind::Image(image) => image,
            EntryKind::NearMiss => {
                problems.push(Problem::BadFileName {
                    folder: folder.clone(),
                    file: file.clone(),
                });
                continue;
            }
            _ => continue,
        };
        image_count += 1;

        if image.pair() != expected_pair {
            problems.push(Problem::FolderFileMismatch {
                folder: folder.clone(),
                file: file.clone(),
            });
        }

        if let Some(first) = seen.get(&(image.kind, image.index)) {
            problems.push(Problem::DuplicateIndex {
                folder: folder.clone(),
                kind: image.kind,
                index: image.index_text.clone(),
                file: file.clone(),
                first: first.to_string(),
            });
        } else {
            seen.insert((image.kind, image.index), file);
        }

        let caption = rules.caption_name(file);
        if !dir.has_file(&caption) {
            problems.push(Problem::MissingCaption {
                folder: folder.clone(),
                file: file.clone(),
                caption,
            });
        }
    }

    if image_count == 0 {
        problems.push(Problem::NoValidImages { folder });
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GalleryConfig;
    use crate::scan::scan;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    fn problems_for(tmp: &TempDir) -> Vec<Problem> {
        let tree = scan(tmp.path(), &GalleryConfig::default()).unwrap();
        validate_tree(&tree, &NamingRules::default())
    }

    #[test]
    fn valid_case_has_no_problems() {
        let tmp = TempDir::new().unwrap();
        make_case(
            tmp.path(),
            "sp1_au1",
            &[
                "inversion_sp1_au1_01.png",
                "inversion_sp1_au1_01.txt",
                "cover.png",
                "notes.md",
            ],
        );
        assert!(problems_for(&tmp).is_empty());
    }

    #[test]
    fn bad_folder_name_suppresses_file_checks() {
        let tmp = TempDir::new().unwrap();
        make_case(
            tmp.path(),
            "not-a-case",
            &["inversion_x_y_1.png", "inversion_x_y_01.png"],
        );
        let problems = problems_for(&tmp);
        assert_eq!(
            problems,
            vec![Problem::BadFolderName {
                folder: "not-a-case".to_string()
            }]
        );
    }

    #[test]
    fn folder_and_file_disagree() {
        let tmp = TempDir::new().unwrap();
        make_case(
            tmp.path(),
            "case_sp1_au1",
            &["inversion_sp1_au2_01.png", "inversion_sp1_au2_01.txt"],
        );
        let problems = problems_for(&tmp);
        assert_eq!(problems.len(), 1);
        assert!(matches!(problems[0], Problem::FolderFileMismatch { .. }));
        assert_eq!(
            problems[0].to_string(),
            "[case_sp1_au1] Folder and file disagree: inversion_sp1_au2_01.png"
        );
    }

    #[test]
    fn duplicate_index_within_type_is_problem() {
        let tmp = TempDir::new().unwrap();
        make_case(
            tmp.path(),
            "sp1_au1",
            &[
                "inversion_sp1_au1_01.PNG",
                "inversion_sp1_au1_01.png",
                "inversion_sp1_au1_01.txt",
            ],
        );
        let problems = problems_for(&tmp);
        assert_eq!(problems.len(), 1);
        match &problems[0] {
            Problem::DuplicateIndex {
                kind,
                index,
                file,
                first,
                ..
            } => {
                assert_eq!(*kind, VariantKind::Inversion);
                assert_eq!(index, "01");
                assert_eq!(file, "inversion_sp1_au1_01.png");
                assert_eq!(first, "inversion_sp1_au1_01.PNG");
            }
            other => panic!("unexpected problem: {other}"),
        }
    }

    #[test]
    fn same_index_across_types_is_fine() {
        let tmp = TempDir::new().unwrap();
        make_case(
            tmp.path(),
            "sp1_au1",
            &[
                "duplication_sp1_au1_01.png",
                "duplication_sp1_au1_01.txt",
                "inversion_sp1_au1_01.png",
                "inversion_sp1_au1_01.txt",
            ],
        );
        assert!(problems_for(&tmp).is_empty());
    }

    #[test]
    fn missing_caption_reported() {
        let tmp = TempDir::new().unwrap();
        make_case(tmp.path(), "sp1_au1", &["inversion_sp1_au1_01.png"]);
        let problems = problems_for(&tmp);
        assert_eq!(
            problems,
            vec![Problem::MissingCaption {
                folder: "sp1_au1".to_string(),
                file: "inversion_sp1_au1_01.png".to_string(),
                caption: "inversion_sp1_au1_01.txt".to_string(),
            }]
        );
    }

    #[test]
    fn near_miss_reported_foreign_ignored() {
        let tmp = TempDir::new().unwrap();
        make_case(
            tmp.path(),
            "sp1_au1",
            &[
                "inversion_sp1_au1_01.png",
                "inversion_sp1_au1_01.txt",
                "inversion_sp1_au1_2.png",
                "README.md",
            ],
        );
        let problems = problems_for(&tmp);
        assert_eq!(
            problems,
            vec![Problem::BadFileName {
                folder: "sp1_au1".to_string(),
                file: "inversion_sp1_au1_2.png".to_string(),
            }]
        );
    }

    #[test]
    fn empty_case_has_no_valid_images() {
        let tmp = TempDir::new().unwrap();
        make_case(tmp.path(), "sp1_au1", &["cover.png"]);
        assert_eq!(
            problems_for(&tmp),
            vec![Problem::NoValidImages {
                folder: "sp1_au1".to_string()
            }]
        );
    }

    #[test]
    fn all_problems_collected_across_directories() {
        let tmp = TempDir::new().unwrap();
        make_case(tmp.path(), "bad", &[]);
        make_case(
            tmp.path(),
            "sp1_au1",
            &["inversion_sp1_au1_01.png", "inversion_sp9_au1_02.png"],
        );
        let problems = problems_for(&tmp);
        // bad folder, one mismatch, two missing captions
        assert_eq!(problems.len(), 4);
        assert!(matches!(problems[0], Problem::BadFolderName { .. }));
    }
}
