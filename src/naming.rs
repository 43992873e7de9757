//! File name grammar for the images directory.
//!
//! Everything the gallery knows about an image comes from its name. Case
//! folders and image files follow a fixed convention:
//!
//! ```text
//! images/
//! ├── sp1_au1/                          # <speciesID>_<authorID>
//! │   ├── inversion_sp1_au1_01.png      # <type>_<speciesID>_<authorID>_<XX>.<ext>
//! │   ├── inversion_sp1_au1_01.txt      # caption sidecar (same basename)
//! │   ├── duplication_sp1_au1_01.png    # same index, different type: fine
//! │   ├── cover_inversion.png           # type-specific cover
//! │   └── cover.png                     # generic cover
//! └── case_sp2_au7/                     # optional `case_` prefix
//!     └── translocation_sp2_au7_01.png
//! ```
//!
//! ## Classification
//!
//! [`NamingRules::classify`] sorts every file into one [`EntryKind`]:
//!
//! | Kind | Example | Fate |
//! |------|---------|------|
//! | `Image` | `inversion_sp1_au1_01.png` | gallery image |
//! | `Cover` | `cover.png`, `cover_duplication.png` | cover candidate |
//! | `Caption` | `inversion_sp1_au1_01.txt` | read as sidecar |
//! | `NearMiss` | `inversion_sp1_au1_1.png`, `Inversion_sp1_au1_01.png` | reported as bad file name |
//! | `Foreign` | `notes.md` | ignored |
//!
//! The `<type>` token is matched case-sensitively (lowercase only); the
//! extension is matched case-insensitively. The index is exactly two ASCII
//! digits and must be positive, so `00`, `1` and `001` never form an image.

use crate::config::GalleryConfig;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static CASE_DIR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:case_)?([A-Za-z0-9]+)_([A-Za-z0-9]+)$").unwrap());

static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(inversion|translocation|duplication)_([A-Za-z0-9]+)_([A-Za-z0-9]+)_([0-9]{2})\.([^.]+)$",
    )
    .unwrap()
});

static COVER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^cover(?:_(inversion|translocation|duplication))?\.([^.]+)$").unwrap()
});

/// The three structural-variant kinds, in manifest order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VariantKind {
    Inversion,
    Translocation,
    Duplication,
}

impl VariantKind {
    /// Fixed category order of the manifest.
    pub const ALL: [VariantKind; 3] = [
        VariantKind::Inversion,
        VariantKind::Translocation,
        VariantKind::Duplication,
    ];

    /// Token used in file names (`inversion`).
    pub fn token(self) -> &'static str {
        match self {
            VariantKind::Inversion => "inversion",
            VariantKind::Translocation => "translocation",
            VariantKind::Duplication => "duplication",
        }
    }

    /// Slug of the category this kind belongs to (`inversions`).
    pub fn category_slug(self) -> &'static str {
        match self {
            VariantKind::Inversion => "inversions",
            VariantKind::Translocation => "translocations",
            VariantKind::Duplication => "duplications",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.token() == token)
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A parsed case folder name: `(case_)?<speciesID>_<authorID>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseDirName {
    pub species: String,
    pub author: String,
}

impl CaseDirName {
    pub fn parse(name: &str) -> Option<Self> {
        let caps = CASE_DIR_RE.captures(name)?;
        Some(Self {
            species: caps[1].to_string(),
            author: caps[2].to_string(),
        })
    }

    /// The `<speciesID>_<authorID>` pair every image in the folder must carry.
    pub fn pair(&self) -> String {
        format!("{}_{}", self.species, self.author)
    }
}

/// Fields extracted from a valid image file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageName {
    pub kind: VariantKind,
    pub species: String,
    pub author: String,
    /// Numeric index, always in `1..=99`.
    pub index: u8,
    /// Index exactly as written (`"01"`), used for display.
    pub index_text: String,
}

impl ImageName {
    pub fn pair(&self) -> String {
        format!("{}_{}", self.species, self.author)
    }

    /// Alt text: `sp1_au1 01`.
    pub fn alt(&self) -> String {
        format!("{} {}", self.pair(), self.index_text)
    }
}

/// What a file inside a case directory is, according to its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Image(ImageName),
    /// `cover_<type>.<ext>` (`Some`) or `cover.<ext>` (`None`).
    Cover(Option<VariantKind>),
    Caption,
    /// Looks like an image entry but does not follow the grammar.
    NearMiss,
    Foreign,
}

/// Display name of a case: `sp1 — au1` for `case_sp1_au1`.
///
/// Strips an optional `case_` prefix and splits on the first underscore.
/// Without an author segment the stripped name is returned whole.
pub fn human_case_name(folder: &str) -> String {
    let base = folder.strip_prefix("case_").unwrap_or(folder);
    match base.split_once('_') {
        Some((species, author)) if !author.is_empty() => format!("{species} \u{2014} {author}"),
        _ => base.to_string(),
    }
}

/// Split `name.ext` into stem and extension. Dotfiles have no extension.
fn split_extension(name: &str) -> (&str, Option<&str>) {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (name, None),
    }
}

/// File name classifier parameterized by the configured extensions.
#[derive(Debug, Clone)]
pub struct NamingRules {
    image_extensions: Vec<String>,
    caption_extension: String,
}

impl NamingRules {
    pub fn new<I, S>(image_extensions: I, caption_extension: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            image_extensions: image_extensions
                .into_iter()
                .map(|e| e.as_ref().to_ascii_lowercase())
                .collect(),
            caption_extension: caption_extension.to_string(),
        }
    }

    pub fn from_config(config: &GalleryConfig) -> Self {
        Self::new(&config.image_extensions, &config.caption_extension)
    }

    pub fn is_image_extension(&self, ext: &str) -> bool {
        self.image_extensions
            .iter()
            .any(|e| e.eq_ignore_ascii_case(ext))
    }

    /// Sidecar file name for an image: `inversion_sp1_au1_01.png` → `inversion_sp1_au1_01.txt`.
    pub fn caption_name(&self, image_file: &str) -> String {
        let (stem, _) = split_extension(image_file);
        format!("{stem}.{}", self.caption_extension)
    }

    pub fn classify(&self, file_name: &str) -> EntryKind {
        if let Some(image) = self.parse_image(file_name) {
            return EntryKind::Image(image);
        }
        if let Some(caps) = COVER_RE.captures(file_name)
            && self.is_image_extension(&caps[2])
        {
            return EntryKind::Cover(caps.get(1).and_then(|m| VariantKind::from_token(m.as_str())));
        }

        let (stem, ext) = split_extension(file_name);
        match ext {
            Some(ext) if ext.eq_ignore_ascii_case(&self.caption_extension) => EntryKind::Caption,
            Some(ext) if self.is_image_extension(ext) => EntryKind::NearMiss,
            _ if has_type_prefix(stem) => EntryKind::NearMiss,
            _ => EntryKind::Foreign,
        }
    }

    /// Parse a valid image file name, or `None` for anything else.
    pub fn parse_image(&self, file_name: &str) -> Option<ImageName> {
        let caps = IMAGE_RE.captures(file_name)?;
        if !self.is_image_extension(&caps[5]) {
            return None;
        }
        let index: u8 = caps[4].parse().ok()?;
        if index == 0 {
            return None;
        }
        Some(ImageName {
            kind: VariantKind::from_token(&caps[1])?,
            species: caps[2].to_string(),
            author: caps[3].to_string(),
            index,
            index_text: caps[4].to_string(),
        })
    }
}

impl Default for NamingRules {
    fn default() -> Self {
        Self::from_config(&GalleryConfig::default())
    }
}

/// `Inversion_...`, `duplication_x`: stems that start like an image entry.
fn has_type_prefix(stem: &str) -> bool {
    let lower = stem.to_ascii_lowercase();
    VariantKind::ALL
        .iter()
        .any(|k| lower.starts_with(&format!("{}_", k.token())))
}
