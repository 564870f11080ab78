//! The site description decoded from `config.yml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::font::font_url;

/// Theme used when the config names none.
pub const DEFAULT_THEME: &str = "custom";

/// Everything needed to render one link-in-bio page.
///
/// Field names serialize in camelCase, matching the YAML keys; themes bind to
/// those names.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Display name
    pub name: String,

    /// Short biography shown under the name
    pub bio: String,

    /// Profile picture path
    pub picture: String,

    /// Logo path
    pub logo: String,

    /// Font file used for titles
    pub font_title_file: String,

    /// Font file used for body text
    pub font_body_file: String,

    /// Hero scale token, interpreted by the theme
    pub hero_scale: String,

    /// Page-level metadata
    pub meta: Meta,

    /// Links in display order
    pub links: Vec<Link>,

    /// Color palette
    pub colors: Colors,

    /// Social icons in display order
    pub socials: Vec<Social>,

    /// Theme directory name under `themes/`
    pub theme: String,

    /// Explicit font stylesheet URL, empty when unset
    pub font_url: String,

    /// Font family to request from Google Fonts
    pub font_name: String,

    /// Weights specifier, e.g. `400;700`
    pub font_weights: String,
}

/// Page metadata.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Meta {
    pub title: String,
    pub description: String,
    pub lang: String,
    pub author: String,
    pub site_url: String,
}

/// A single link button with its styling overrides.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Link {
    pub name: String,
    pub url: String,
    pub background: String,
    pub text: String,
    pub border: String,
    pub hover_background: String,
    pub hover_text: String,
}

/// CSS color and gradient values. Not validated.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Colors {
    pub background: String,
    pub background_gradient: String,
    pub text: String,
    pub link_background: String,
    pub link_text: String,
    pub link_border: String,
    pub social_icon: String,
    pub button_text: String,
    pub bio: String,
    pub hover_background: String,
    pub hover_text: String,
    pub header_gradient: String,
    pub hero_background: String,
    pub main_background: String,
    pub section_border: String,
    pub section_text: String,
}

/// A social profile icon.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Social {
    pub name: String,
    pub url: String,
    pub icon: String,
}

impl SiteConfig {
    /// Decode a site description from YAML text.
    pub fn from_yaml_str(source: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(source)
    }

    /// Fill in the theme when the document leaves it empty.
    pub fn apply_defaults(&mut self) {
        if self.theme.trim().is_empty() {
            self.theme = DEFAULT_THEME.to_string();
        }
    }

    /// The font stylesheet URL for this site, if any.
    pub fn font_url(&self) -> Option<String> {
        font_url(
            Some(self.font_url.as_str()),
            Some(self.font_name.as_str()),
            Some(self.font_weights.as_str()),
        )
    }
}

/// Read and decode the site description at `path`.
pub fn load_site_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    SiteConfig::from_yaml_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Errors that can occur when loading the site description.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
