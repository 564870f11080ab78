//! Theme template rendering.

use std::fs;
use std::path::{Path, PathBuf};

use minijinja::{context, path_loader, Environment, UndefinedBehavior, Value};
use pagelink_config::SiteConfig;

/// File name of the single template every theme provides.
pub const TEMPLATE_NAME: &str = "index.html";

/// Renders a theme's `index.html` against a site config.
///
/// Templates are loaded from `themes/<theme>/`, so a theme may split its
/// markup with `include` or `extends`. Undefined variables are errors.
pub struct TemplateRenderer {
    env: Environment<'static>,
    theme_dir: PathBuf,
}

impl TemplateRenderer {
    /// Create a renderer for `theme` inside `themes_dir`.
    pub fn new(themes_dir: &Path, theme: &str) -> Self {
        let theme_dir = themes_dir.join(theme);

        let mut env = Environment::new();
        env.set_loader(path_loader(theme_dir.clone()));
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        Self { env, theme_dir }
    }

    /// Path of the template this renderer reads.
    pub fn template_path(&self) -> PathBuf {
        self.theme_dir.join(TEMPLATE_NAME)
    }

    /// Render the page to a string.
    ///
    /// The context holds `config`, `backgroundGradient` (emitted unescaped)
    /// and `fontUrl` (empty when no font is configured).
    pub fn render_to_string(&self, config: &SiteConfig) -> Result<String, TemplateError> {
        let tmpl = self
            .env
            .get_template(TEMPLATE_NAME)
            .map_err(|source| TemplateError::Load {
                path: self.template_path(),
                source,
            })?;

        // Operator-authored CSS, trusted as-is.
        let background_gradient =
            Value::from_safe_string(config.colors.background_gradient.clone());

        tmpl.render(context! {
            config => config,
            backgroundGradient => background_gradient,
            fontUrl => config.font_url().unwrap_or_default(),
        })
        .map_err(|source| TemplateError::Render {
            path: self.template_path(),
            source,
        })
    }

    /// Render the page and write it to `output`, replacing any existing file.
    pub fn render_to_file(&self, config: &SiteConfig, output: &Path) -> Result<(), TemplateError> {
        let html = self.render_to_string(config)?;

        fs::write(output, html).map_err(|source| TemplateError::Write {
            path: output.to_path_buf(),
            source,
        })?;

        tracing::debug!("Wrote {}", output.display());
        Ok(())
    }
}

/// Errors that can occur while rendering the page.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Failed to load template {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: minijinja::Error,
    },

    #[error("Failed to render template {}: {source}", path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: minijinja::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagelink_config::{Link, Social};
    use pretty_assertions::assert_eq;
    use tempfile::{tempdir, TempDir};

    fn theme(template: &str) -> TempDir {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("t");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(TEMPLATE_NAME), template).unwrap();
        temp
    }

    fn link(name: &str) -> Link {
        Link {
            name: name.to_string(),
            url: format!("https://{}.example", name.to_lowercase()),
            ..Default::default()
        }
    }

    #[test]
    fn renders_config_fields() {
        let temp = theme("<h1>{{ config.name }}</h1><p>{{ config.meta.title }}</p>");
        let config = SiteConfig {
            name: "Ada".to_string(),
            meta: pagelink_config::Meta {
                title: "Links".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        let html = TemplateRenderer::new(temp.path(), "t")
            .render_to_string(&config)
            .unwrap();

        assert_eq!(html, "<h1>Ada</h1><p>Links</p>");
    }

    #[test]
    fn preserves_link_and_social_order() {
        let temp = theme(
            "{% for l in config.links %}[{{ l.name }}]{% endfor %}\
             {% for s in config.socials %}<{{ s.name }}>{% endfor %}",
        );
        let config = SiteConfig {
            links: vec![link("Charlie"), link("Alpha"), link("Bravo")],
            socials: ["Mastodon", "GitHub", "Bluesky"]
                .iter()
                .map(|n| Social {
                    name: n.to_string(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        };

        let html = TemplateRenderer::new(temp.path(), "t")
            .render_to_string(&config)
            .unwrap();

        assert_eq!(
            html,
            "[Charlie][Alpha][Bravo]<Mastodon><GitHub><Bluesky>"
        );
    }

    #[test]
    fn escapes_text_but_not_gradient() {
        let temp = theme("{{ config.bio }}|{{ backgroundGradient }}");
        let mut config = SiteConfig {
            bio: "<b>bold</b>".to_string(),
            ..Default::default()
        };
        config.colors.background_gradient = "linear-gradient(\"a\" > b)".to_string();

        let html = TemplateRenderer::new(temp.path(), "t")
            .render_to_string(&config)
            .unwrap();

        let (bio, gradient) = html.split_once('|').unwrap();
        assert!(bio.starts_with("&lt;b&gt;bold"));
        assert!(!bio.contains("<b>"));
        assert_eq!(gradient, "linear-gradient(\"a\" > b)");
    }

    #[test]
    fn exposes_font_url() {
        let temp = theme("{% if fontUrl %}font:{{ fontUrl }}{% else %}none{% endif %}");
        let renderer = TemplateRenderer::new(temp.path(), "t");

        let plain = renderer.render_to_string(&SiteConfig::default()).unwrap();
        assert_eq!(plain, "none");

        let config = SiteConfig {
            font_name: "Open Sans".to_string(),
            ..Default::default()
        };
        let html = renderer.render_to_string(&config).unwrap();
        assert!(html.starts_with("font:"));
        assert!(html.contains("Open+Sans"));
    }

    #[test]
    fn absent_font_renders_empty() {
        let temp = theme("[{{ fontUrl }}][{{ config.fontUrl }}][{{ config.fontName }}]");

        let html = TemplateRenderer::new(temp.path(), "t")
            .render_to_string(&SiteConfig::default())
            .unwrap();

        assert_eq!(html, "[][][]");
    }

    #[test]
    fn supports_includes_within_theme() {
        let temp = theme("{% include \"header.html\" %}!");
        fs::write(temp.path().join("t/header.html"), "hi {{ config.name }}").unwrap();
        let config = SiteConfig {
            name: "Ada".to_string(),
            ..Default::default()
        };

        let html = TemplateRenderer::new(temp.path(), "t")
            .render_to_string(&config)
            .unwrap();

        assert_eq!(html, "hi Ada!");
    }

    #[test]
    fn is_deterministic() {
        let temp = theme("{{ config.name }}{% for l in config.links %}{{ l.url }}{% endfor %}");
        let config = SiteConfig {
            name: "Ada".to_string(),
            links: vec![link("One"), link("Two")],
            ..Default::default()
        };
        let renderer = TemplateRenderer::new(temp.path(), "t");

        let first = renderer.render_to_string(&config).unwrap();
        let second = renderer.render_to_string(&config).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn errors_on_missing_template() {
        let temp = tempdir().unwrap();

        let result =
            TemplateRenderer::new(temp.path(), "missing").render_to_string(&SiteConfig::default());

        assert!(matches!(result, Err(TemplateError::Load { .. })));
    }

    #[test]
    fn errors_on_syntax_error() {
        let temp = theme("{% for l in config.links %}never closed");

        let result =
            TemplateRenderer::new(temp.path(), "t").render_to_string(&SiteConfig::default());

        assert!(matches!(result, Err(TemplateError::Load { .. })));
    }

    #[test]
    fn errors_on_undefined_field() {
        let temp = theme("{{ config.nickname }}");

        let result =
            TemplateRenderer::new(temp.path(), "t").render_to_string(&SiteConfig::default());

        assert!(matches!(result, Err(TemplateError::Render { .. })));
    }

    #[test]
    fn writes_output_file() {
        let temp = theme("<p>{{ config.name }}</p>");
        let output = temp.path().join("index.html");
        fs::write(&output, "stale content that is longer").unwrap();
        let config = SiteConfig {
            name: "Ada".to_string(),
            ..Default::default()
        };

        TemplateRenderer::new(temp.path(), "t")
            .render_to_file(&config, &output)
            .unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "<p>Ada</p>");
    }
}
