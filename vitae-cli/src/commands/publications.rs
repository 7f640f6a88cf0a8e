//! List parsed publications, optionally as JSON for machine consumption.

use anyhow::{Context, Result};
use std::path::Path;
use vitae_core::{merge_publications, Bibliography, Config, MetadataOverlay};

pub fn list_publications(config_path: &Path, json: bool) -> Result<()> {
    let config = Config::from_file(config_path).context("Failed to load configuration")?;

    let bibliography = Bibliography::load(&config.bibliography_path());
    let overlay = MetadataOverlay::load(config.metadata_path().as_deref());
    let (publications, _) = merge_publications(
        &bibliography,
        &overlay,
        Some(config.site.sur_name.as_str()),
    );

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&publications)
                .context("Failed to serialize publications")?
        );
    } else {
        for publication in &publications {
            println!(
                "{}  {} ({})",
                publication.year, publication.title, publication.venue
            );
        }
    }

    Ok(())
}
