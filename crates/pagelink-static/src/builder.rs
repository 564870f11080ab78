//! Site build pipeline.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

use pagelink_config::{load_site_config, ConfigError, SiteConfig};

use crate::assets::{AssetError, AssetStager, StageReport};
use crate::templates::{TemplateError, TemplateRenderer};

/// Configuration for building a site.
///
/// Relative paths resolve against `root`.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Working directory of the build
    pub root: PathBuf,

    /// Site description document
    pub config_file: PathBuf,

    /// Directory holding one folder per theme
    pub themes_dir: PathBuf,

    /// Rendered page
    pub output_file: PathBuf,

    /// Staged asset tree
    pub assets_dir: PathBuf,

    /// Theme to use instead of the one in the config file
    pub theme: Option<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            config_file: PathBuf::from("config.yml"),
            themes_dir: PathBuf::from("themes"),
            output_file: PathBuf::from("index.html"),
            assets_dir: PathBuf::from("assets"),
            theme: None,
        }
    }
}

impl BuildConfig {
    /// Build config rooted at `root` with the default layout.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

/// A step of the build pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    LoadConfig,
    DefaultTheme,
    Render,
    Stage,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::LoadConfig => "load config",
            Step::DefaultTheme => "default theme",
            Step::Render => "render",
            Step::Stage => "stage assets",
        };
        f.write_str(name)
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Theme the page was built with
    pub theme: String,

    /// Number of links on the page
    pub links: usize,

    /// Number of social icons on the page
    pub socials: usize,

    /// Staged assets
    pub assets: StageReport,

    /// Rendered page
    pub output_file: PathBuf,

    /// Total build time in milliseconds
    pub duration_ms: u64,
}

/// Errors that can occur during build. Each names the step that failed.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("load config failed: {0}")]
    Config(#[from] ConfigError),

    #[error("render failed: {0}")]
    Template(#[from] TemplateError),

    #[error("stage assets failed: {0}")]
    Assets(#[from] AssetError),
}

impl BuildError {
    /// The step that failed.
    pub fn step(&self) -> Step {
        match self {
            BuildError::Config(_) => Step::LoadConfig,
            BuildError::Template(_) => Step::Render,
            BuildError::Assets(_) => Step::Stage,
        }
    }
}

/// Pipeline state. Each variant carries what the next step needs.
enum State {
    LoadConfig,
    DefaultTheme(SiteConfig),
    Render(SiteConfig),
    Stage(SiteConfig, PathBuf),
    Done(BuildResult),
}

/// Builds the page and stages its theme assets.
pub struct SiteBuilder {
    config: BuildConfig,
}

impl SiteBuilder {
    /// Create a new site builder.
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Run the pipeline to completion or to the first failure.
    ///
    /// Output from a failed run is left on disk as-is.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();
        let themes_dir = self.config.resolve(&self.config.themes_dir);
        let mut state = State::LoadConfig;

        loop {
            state = match state {
                State::LoadConfig => {
                    let path = self.config.resolve(&self.config.config_file);
                    tracing::debug!("Loading {}", path.display());
                    let site = load_site_config(&path)?;
                    tracing::info!("Loaded config from {}", path.display());
                    State::DefaultTheme(site)
                }
                State::DefaultTheme(mut site) => {
                    if let Some(theme) = &self.config.theme {
                        site.theme = theme.clone();
                    }
                    site.apply_defaults();
                    tracing::info!("Using theme '{}'", site.theme);
                    State::Render(site)
                }
                State::Render(site) => {
                    let output = self.config.resolve(&self.config.output_file);
                    let renderer = TemplateRenderer::new(&themes_dir, &site.theme);
                    tracing::debug!("Rendering {}", renderer.template_path().display());
                    renderer.render_to_file(&site, &output)?;
                    tracing::info!("Rendered {}", output.display());
                    State::Stage(site, output)
                }
                State::Stage(site, output_file) => {
                    let assets_dir = self.config.resolve(&self.config.assets_dir);
                    let assets = AssetStager::new(&themes_dir, &site.theme, &assets_dir).stage()?;
                    tracing::info!(
                        "Staged {} asset files into {}",
                        assets.total(),
                        assets_dir.display()
                    );
                    State::Done(BuildResult {
                        links: site.links.len(),
                        socials: site.socials.len(),
                        theme: site.theme,
                        assets,
                        output_file,
                        duration_ms: start.elapsed().as_millis() as u64,
                    })
                }
                State::Done(result) => return Ok(result),
            };
        }
    }
}
