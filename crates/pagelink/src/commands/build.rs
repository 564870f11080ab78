//! Site build command.

use std::path::PathBuf;

use anyhow::Result;
use pagelink_static::{BuildConfig, SiteBuilder};

/// Run the build command.
pub fn run(root: PathBuf, config_file: PathBuf, theme: Option<String>) -> Result<()> {
    tracing::info!("Generating site...");

    let config = BuildConfig {
        root,
        config_file,
        theme,
        ..Default::default()
    };

    let result = SiteBuilder::new(config).build()?;

    tracing::info!(
        "Built {} links and {} socials with theme '{}' in {}ms",
        result.links,
        result.socials,
        result.theme,
        result.duration_ms
    );
    tracing::info!("Output: {}", result.output_file.display());
    tracing::info!("Site generated successfully!");

    Ok(())
}
