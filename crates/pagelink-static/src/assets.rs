//! Theme asset staging.
//!
//! Copies `themes/<theme>/assets/<category>/` into `assets/<category>/`,
//! flattening nested folders. Every destination directory is created even
//! when the theme ships nothing for it.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

/// A kind of asset a theme can ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetCategory {
    Css,
    Js,
    Icons,
    Images,
    Fonts,
}

impl AssetCategory {
    /// All categories, in staging order.
    pub const ALL: [AssetCategory; 5] = [
        AssetCategory::Css,
        AssetCategory::Js,
        AssetCategory::Icons,
        AssetCategory::Images,
        AssetCategory::Fonts,
    ];

    /// Directory name on both the source and destination side.
    pub fn dir_name(self) -> &'static str {
        match self {
            AssetCategory::Css => "css",
            AssetCategory::Js => "js",
            AssetCategory::Icons => "icons",
            AssetCategory::Images => "images",
            AssetCategory::Fonts => "fonts",
        }
    }

    /// Glob a file name must match to be staged.
    pub fn file_pattern(self) -> &'static str {
        match self {
            AssetCategory::Css => "*.css",
            AssetCategory::Js => "*.js",
            AssetCategory::Icons | AssetCategory::Images | AssetCategory::Fonts => "*",
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// A file copied into the output tree.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedFile {
    pub category: AssetCategory,
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Result of a staging run.
#[derive(Debug, Default)]
pub struct StageReport {
    /// Copied files in copy order
    pub files: Vec<StagedFile>,
}

impl StageReport {
    /// Number of files copied for `category`.
    pub fn count(&self, category: AssetCategory) -> usize {
        self.files.iter().filter(|f| f.category == category).count()
    }

    /// Total number of files copied.
    pub fn total(&self) -> usize {
        self.files.len()
    }
}

/// Copies a theme's assets into the fixed output layout.
pub struct AssetStager {
    source_root: PathBuf,
    dest_root: PathBuf,
}

impl AssetStager {
    /// Stage assets of `theme` under `themes_dir` into `dest_root`.
    pub fn new(themes_dir: &Path, theme: &str, dest_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: themes_dir.join(theme).join("assets"),
            dest_root: dest_root.into(),
        }
    }

    /// Source directory for a category.
    pub fn source_dir(&self, category: AssetCategory) -> PathBuf {
        self.source_root.join(category.dir_name())
    }

    /// Destination directory for a category.
    pub fn dest_dir(&self, category: AssetCategory) -> PathBuf {
        self.dest_root.join(category.dir_name())
    }

    /// Create the destination tree and copy every category.
    ///
    /// Stops at the first failure. Files already copied stay in place.
    pub fn stage(&self) -> Result<StageReport, AssetError> {
        for category in AssetCategory::ALL {
            let dir = self.dest_dir(category);
            fs::create_dir_all(&dir).map_err(|source| AssetError::CreateDir { path: dir, source })?;
        }

        let mut report = StageReport::default();

        for category in AssetCategory::ALL {
            let dest_dir = self.dest_dir(category);

            for source in self.discover(category)? {
                let destination = match source.file_name() {
                    Some(name) => dest_dir.join(name),
                    None => continue,
                };

                fs::copy(&source, &destination).map_err(|e| AssetError::Copy {
                    from: source.clone(),
                    to: destination.clone(),
                    source: e,
                })?;

                tracing::debug!("Copied {} -> {}", source.display(), destination.display());

                report.files.push(StagedFile {
                    category,
                    source,
                    destination,
                });
            }
        }

        Ok(report)
    }

    /// List the files a category would stage, in copy order.
    ///
    /// Subdirectories are searched too. A missing source directory yields
    /// nothing.
    pub fn discover(&self, category: AssetCategory) -> Result<Vec<PathBuf>, AssetError> {
        let pattern = Pattern::new(category.file_pattern()).map_err(|source| AssetError::Pattern {
            pattern: category.file_pattern().to_string(),
            source,
        })?;

        let source_dir = self.source_dir(category);
        if !source_dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(&source_dir)
            .min_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|source| AssetError::Discovery {
                path: source_dir.clone(),
                source,
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            if pattern.matches_path(Path::new(entry.file_name())) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}

/// Errors that can occur while staging assets.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Invalid asset pattern {pattern}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Failed to list assets in {}: {source}", path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to create {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
