//! CLI output formatting.
//!
//! # Information-First Display
//!
//! The build summary is an inventory of what the front-end will show:
//! categories, their cases by display name, and the images of each case by
//! alt text. Filesystem paths are secondary context on indented `Source:` and
//! `Cover:` lines.
//!
//! ```text
//! Inversions (2 cases)
//!     001 Dmel — Smith (2 images)
//!         Source: images/Dmel_Smith/
//!         Cover: images/Dmel_Smith/cover_inversion.png
//!         001 Dmel_Smith 01
//!         002 Dmel_Smith 02
//!     002 Scer (1 image)
//!         Source: images/Scer/
//!         Cover: images/Scer/inversion_Scer_x_01.png
//!         001 Scer_x 01
//! Translocations (0 cases)
//! Duplications (0 cases)
//!
//! Generated 2 cases, 3 images
//! ```
//!
//! Problems are listed one per line, `  - <problem>`, under a header that
//! depends on the mode (warning in a build, failure in `--check`).
//!
//! # Architecture
//!
//! Each report has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes it out. Format functions
//! are pure: no I/O, no side effects.

use crate::manifest::{Case, Manifest};
use crate::validate::Problem;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `1 image`, `2 images`.
fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

/// Directory part of a root-relative path: `images/sp1_au1/x.png` → `images/sp1_au1/`.
fn source_dir(src: &str) -> &str {
    src.rfind('/').map(|i| &src[..=i]).unwrap_or(src)
}

fn case_lines(position: usize, case: &Case) -> Vec<String> {
    let mut lines = vec![format!(
        "{}{} {} ({})",
        indent(1),
        format_index(position),
        case.name,
        count(case.images.len(), "image")
    )];
    if let Some(first) = case.images.first() {
        lines.push(format!("{}Source: {}", indent(2), source_dir(&first.src)));
    }
    if let Some(cover) = &case.cover_image {
        lines.push(format!("{}Cover: {}", indent(2), cover));
    }
    for (i, image) in case.images.iter().enumerate() {
        lines.push(format!("{}{} {}", indent(2), format_index(i + 1), image.alt));
    }
    lines
}

/// Format the per-category / per-case summary printed after a build.
pub fn format_build_summary(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();
    for category in &manifest.categories {
        lines.push(format!(
            "{} ({})",
            category.name,
            count(category.cases.len(), "case")
        ));
        for (i, case) in category.cases.iter().enumerate() {
            lines.extend(case_lines(i + 1, case));
        }
    }
    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {}",
        count(manifest.case_count(), "case"),
        count(manifest.image_count(), "image")
    ));
    lines
}

pub fn print_build_summary(manifest: &Manifest) {
    for line in format_build_summary(manifest) {
        println!("{}", line);
    }
}

fn problem_lines(problems: &[Problem]) -> impl Iterator<Item = String> + '_ {
    problems.iter().map(|p| format!("  - {p}"))
}

/// Format build-mode warnings. Empty when there is nothing to warn about.
pub fn format_warnings(problems: &[Problem]) -> Vec<String> {
    if problems.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![format!("WARNING: {}", count(problems.len(), "problem"))];
    lines.extend(problem_lines(problems));
    lines
}

/// Print build-mode warnings to stderr.
pub fn print_warnings(problems: &[Problem]) {
    for line in format_warnings(problems) {
        eprintln!("{}", line);
    }
}

/// Format the `--check` verdict.
pub fn format_check_report(problems: &[Problem]) -> Vec<String> {
    if problems.is_empty() {
        return vec!["==> All good: content is valid".to_string()];
    }
    let mut lines = vec![format!(
        "Validation failed: {}",
        count(problems.len(), "problem")
    )];
    lines.extend(problem_lines(problems));
    lines
}

pub fn print_check_report(problems: &[Problem]) {
    for line in format_check_report(problems) {
        println!("{}", line);
    }
}
