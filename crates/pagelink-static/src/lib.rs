//! Static page generator for pagelink.
//!
//! Renders a theme's single template against the site description and stages
//! the theme's assets next to it.

pub mod assets;
pub mod builder;
pub mod templates;

pub use assets::{AssetCategory, AssetError, AssetStager, StageReport, StagedFile};
pub use builder::{BuildConfig, BuildError, BuildResult, SiteBuilder, Step};
pub use templates::{TemplateError, TemplateRenderer, TEMPLATE_NAME};
