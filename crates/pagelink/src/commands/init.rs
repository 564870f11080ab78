//! Scaffold a starter site.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use pagelink_config::DEFAULT_THEME;

/// Run the init command.
pub fn run(root: &Path, config_file: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing pagelink...");

    let theme_dir = root.join("themes").join(DEFAULT_THEME);
    let css_dir = theme_dir.join("assets").join("css");
    fs::create_dir_all(&css_dir).context("Failed to create theme directory")?;

    write_starter(&root.join(config_file), DEFAULT_CONFIG, yes)?;
    write_starter(&theme_dir.join("index.html"), DEFAULT_TEMPLATE, yes)?;
    write_starter(&css_dir.join("style.css"), DEFAULT_CSS, yes)?;

    tracing::info!("Initialization complete!");
    tracing::info!("Edit {} and run 'pagelink build'.", config_file.display());

    Ok(())
}

/// Write `content` to `path` unless it exists and `overwrite` is off.
fn write_starter(path: &Path, content: &str, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        tracing::warn!("{} already exists. Use --yes to overwrite.", path.display());
        return Ok(());
    }

    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Created {}", path.display());

    Ok(())
}

const DEFAULT_CONFIG: &str = r##"# Pagelink site description

name: Your Name
bio: A short line about what you do.
picture: assets/images/avatar.png
heroScale: md

meta:
  title: Your Name | Links
  description: All my links in one place.
  lang: en
  author: Your Name
  siteUrl: https://example.com

# Load a Google Font by family, or set fontUrl to any stylesheet.
fontName: Inter
# fontWeights: "400;700"
# fontUrl: https://example.com/fonts.css

colors:
  background: "#0f172a"
  backgroundGradient: "linear-gradient(160deg, #0f172a 0%, #1e293b 100%)"
  text: "#f8fafc"
  bio: "#cbd5e1"
  linkBackground: "#1e293b"
  linkText: "#f8fafc"
  linkBorder: "#334155"
  hoverBackground: "#f8fafc"
  hoverText: "#0f172a"
  socialIcon: "#f8fafc"
  buttonText: "#f8fafc"

links:
  - name: Website
    url: https://example.com
  - name: Blog
    url: https://example.com/blog
  - name: Newsletter
    url: https://example.com/newsletter
    background: "#f59e0b"
    text: "#0f172a"

socials:
  - name: GitHub
    url: https://github.com/
    icon: github.svg
  - name: Mastodon
    url: https://mastodon.social/
    icon: mastodon.svg

theme: custom
"##;

const DEFAULT_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="{{ config.meta.lang or "en" }}">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ config.meta.title or config.name }}</title>
  <meta name="description" content="{{ config.meta.description }}">
  <meta name="author" content="{{ config.meta.author }}">
  {% if config.meta.siteUrl %}<link rel="canonical" href="{{ config.meta.siteUrl }}">{% endif %}
  {% if fontUrl %}<link rel="stylesheet" href="{{ fontUrl }}">{% endif %}
  <link rel="stylesheet" href="assets/css/style.css">
  <style>
    :root {
      --background: {{ config.colors.background }};
      --text: {{ config.colors.text }};
      --bio: {{ config.colors.bio }};
      --link-background: {{ config.colors.linkBackground }};
      --link-text: {{ config.colors.linkText }};
      --link-border: {{ config.colors.linkBorder }};
      --hover-background: {{ config.colors.hoverBackground }};
      --hover-text: {{ config.colors.hoverText }};
      --social-icon: {{ config.colors.socialIcon }};
    }
    {% if backgroundGradient %}body { background: {{ backgroundGradient }}; }{% endif %}
    {% if config.fontName %}body { font-family: {{ config.fontName }}, system-ui, sans-serif; }{% endif %}
  </style>
</head>
<body>
  <main class="page hero-{{ config.heroScale or "md" }}">
    <header class="hero">
      {% if config.picture %}<img class="avatar" src="{{ config.picture }}" alt="{{ config.name }}">{% endif %}
      <h1>{{ config.name }}</h1>
      <p class="bio">{{ config.bio }}</p>
    </header>
    <nav class="links">
      {% for link in config.links %}
      <a class="link" href="{{ link.url }}" style="{% if link.background %}--link-background: {{ link.background }};{% endif %}{% if link.text %}--link-text: {{ link.text }};{% endif %}{% if link.border %}--link-border: {{ link.border }};{% endif %}{% if link.hoverBackground %}--hover-background: {{ link.hoverBackground }};{% endif %}{% if link.hoverText %}--hover-text: {{ link.hoverText }};{% endif %}">{{ link.name }}</a>
      {% endfor %}
    </nav>
    <footer class="socials">
      {% for social in config.socials %}
      <a class="social" href="{{ social.url }}" aria-label="{{ social.name }}"><img src="assets/icons/{{ social.icon }}" alt="{{ social.name }}"></a>
      {% endfor %}
    </footer>
  </main>
</body>
</html>
"##;

const DEFAULT_CSS: &str = r#"* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  min-height: 100vh;
  background: var(--background);
  color: var(--text);
  font-family: system-ui, -apple-system, sans-serif;
  line-height: 1.5;
}

.page {
  max-width: 36rem;
  margin: 0 auto;
  padding: 3rem 1.25rem;
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.hero {
  text-align: center;
}

.avatar {
  width: 6rem;
  height: 6rem;
  border-radius: 50%;
  object-fit: cover;
  margin-bottom: 1rem;
}

.hero-lg .avatar {
  width: 8rem;
  height: 8rem;
}

.bio {
  color: var(--bio);
}

.links {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.link {
  display: block;
  padding: 0.875rem 1rem;
  text-align: center;
  text-decoration: none;
  background: var(--link-background);
  color: var(--link-text);
  border: 1px solid var(--link-border);
  border-radius: 0.75rem;
  transition: background 0.15s, color 0.15s;
}

.link:hover {
  background: var(--hover-background);
  color: var(--hover-text);
}

.socials {
  display: flex;
  justify-content: center;
  gap: 1rem;
}

.social img {
  width: 1.75rem;
  height: 1.75rem;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use pagelink_static::{BuildConfig, SiteBuilder};
    use tempfile::tempdir;

    #[test]
    fn scaffolded_site_builds() {
        let temp = tempdir().unwrap();

        run(temp.path(), Path::new("config.yml"), false).unwrap();
        let result = SiteBuilder::new(BuildConfig::with_root(temp.path()))
            .build()
            .unwrap();

        assert_eq!(result.theme, "custom");
        assert_eq!(result.links, 3);
        let html = fs::read_to_string(temp.path().join("index.html")).unwrap();
        assert!(html.contains("<h1>Your Name</h1>"));
        assert!(html.contains("Newsletter"));
        assert!(html.contains("family=Inter:wght@400;700"));
        assert!(temp.path().join("assets/css/style.css").exists());
    }

    #[test]
    fn keeps_existing_files_without_yes() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("config.yml"), "name: Mine\n").unwrap();

        run(temp.path(), Path::new("config.yml"), false).unwrap();
        assert_eq!(
            fs::read_to_string(temp.path().join("config.yml")).unwrap(),
            "name: Mine\n"
        );

        run(temp.path(), Path::new("config.yml"), true).unwrap();
        assert_eq!(
            fs::read_to_string(temp.path().join("config.yml")).unwrap(),
            DEFAULT_CONFIG
        );
    }
}
