//! Site description model for pagelink.
//!
//! This crate decodes `config.yml` into a [`SiteConfig`] and derives the
//! optional web-font URL a theme loads.

pub mod font;
pub mod site;

pub use font::{font_url, DEFAULT_FONT_WEIGHTS, GOOGLE_FONTS_CSS2};
pub use site::{
    load_site_config, Colors, ConfigError, Link, Meta, SiteConfig, Social, DEFAULT_THEME,
};
