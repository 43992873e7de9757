//! # hic-gallery
//!
//! Builds the `data.json` manifest of a static Hi-C contact map gallery.
//! The filesystem is the data source: case directories hold annotated images
//! whose names carry the variant type, species, author and position.
//!
//! # Architecture: One Pass
//!
//! ```text
//! images/  →  scan  →  validate  →  aggregate  →  data.json
//!             (files)  (problems)   (categories → cases → images)
//! ```
//!
//! Every run rescans the whole tree and rewrites the manifest from scratch.
//! All listings are sorted, so unchanged input produces byte-identical output.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Lists case directories and their files |
//! | [`naming`] | File name grammar: case folders, images, covers, captions, near-misses |
//! | [`validate`] | Structural problems, collected for the whole tree |
//! | [`aggregate`] | Groups images into the three categories, resolves covers, orders |
//! | [`manifest`] | Output types and JSON rendering |
//! | [`pipeline`] | [`pipeline::Gallery`]: a root plus its config, runs the pass |
//! | [`config`] | Optional `gallery.toml` loading and validation |
//! | [`output`] | CLI output formatting for build and check modes |
//!
//! # Design Decisions
//!
//! ## Validation Never Blocks a Build
//!
//! A build prints problems as warnings and still writes the manifest; only
//! grammar-valid images are included, so the front-end never sees a near-miss.
//! `--check` runs the same validation and turns any problem into a non-zero
//! exit, which makes it suitable as a pre-commit or CI gate.
//!
//! ## One Case per Type
//!
//! A case directory may mix variant types. Each type present becomes its own
//! case in its own category, sharing the directory's slug and display name.
//! Index uniqueness is therefore checked per (directory, type).
//!
//! ## Fixed Categories
//!
//! Inversions, translocations and duplications are the only categories and
//! always appear in that order, even when empty. The manifest stores them in
//! a three-element array rather than a map keyed by slug.

pub mod aggregate;
pub mod config;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod pipeline;
pub mod scan;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_helpers;
