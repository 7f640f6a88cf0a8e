//! Build command implementation.

use anyhow::{Context, Result};
use askama::Template;
use chrono::Datelike;
use include_dir::{include_dir, Dir};
use std::fs;
use std::path::Path;
use vitae_core::{
    assemble_cv, merge_publications, Bibliography, Config, CvRecord, Diagnostic, MetadataOverlay,
};
use vitae_render::{CvTemplate, IndexTemplate, NavLink, PageTemplate, PublicationsTemplate};
use walkdir::WalkDir;

// Embed the default stylesheet at compile time so it's available after
// cargo install, when the project has no static/ directory of its own.
static DEFAULT_ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// Build the static site into the configured output directory.
pub fn build_site(config_path: &Path) -> Result<()> {
    tracing::info!("Loading config from {:?}", config_path);
    let config = Config::from_file(config_path).context("Failed to load configuration")?;

    tracing::info!("Building site: {}", config.site.title);

    let output_dir = config.output_dir();
    fs::create_dir_all(&output_dir).context("Failed to create output directory")?;

    let mut bibliography = Bibliography::load(&config.bibliography_path());
    tracing::info!("Parsed {} bibliography entries", bibliography.len());

    let overlay = MetadataOverlay::load(config.metadata_path().as_deref());
    let (publications, has_equal_contrib) = merge_publications(
        &bibliography,
        &overlay,
        Some(config.site.sur_name.as_str()),
    );

    let mut diagnostics: Vec<Diagnostic> = bibliography.take_diagnostics();
    let nav = nav_links(&config);
    let year = chrono::Utc::now().year();

    // Landing page
    let index = IndexTemplate {
        site_title: config.site.title.clone(),
        site_author: config.site.full_name(),
        year,
        nav: nav.clone(),
        name: config.site.full_name(),
        description: config.site.description.clone(),
        intro: config.site.intro.clone(),
    };
    write_page(&output_dir, "index.html", &render(index, "index")?)?;

    // Publications page
    let pubs_page = PublicationsTemplate {
        site_title: config.site.title.clone(),
        site_author: config.site.full_name(),
        year,
        nav: nav.clone(),
        publications,
        has_equal_contrib,
    };
    write_page(&output_dir, "publications.html", &render(pubs_page, "publications")?)?;

    // CV page, assembled from the CV record when available
    let cv_content = match config.cv_path().and_then(|p| CvRecord::load(&p)) {
        Some(cv) => {
            let assembly = assemble_cv(&cv, &bibliography);
            diagnostics.extend(assembly.diagnostics.iter().cloned());
            assembly.html()
        }
        None => "<p class=\"placeholder\">CV data not found.</p>".to_string(),
    };
    let cv_page = CvTemplate {
        site_title: config.site.title.clone(),
        site_author: config.site.full_name(),
        year,
        nav: nav.clone(),
        name: config.site.full_name(),
        content: cv_content,
    };
    write_page(&output_dir, "cv.html", &render(cv_page, "cv")?)?;

    // Generic informational pages
    for page in &config.pages {
        let template = PageTemplate {
            site_title: config.site.title.clone(),
            site_author: config.site.full_name(),
            year,
            nav: nav.clone(),
            title: page.title.clone(),
            body: page.body.clone(),
        };
        write_page(
            &output_dir,
            &format!("{}.html", page.slug),
            &render(template, "page")?,
        )?;
    }

    copy_assets(&config)?;

    for diag in &diagnostics {
        tracing::warn!("{}: {}", diag.code, diag.message);
    }

    tracing::info!("✓ Built {} pages", 3 + config.pages.len());
    tracing::info!("✓ Output written to {:?}", output_dir);

    Ok(())
}

fn render<T: Template>(template: T, name: &str) -> Result<String> {
    template
        .render()
        .with_context(|| format!("Failed to render {} template", name))
}

fn write_page(output_dir: &Path, file_name: &str, html: &str) -> Result<()> {
    let output_path = output_dir.join(file_name);
    fs::write(&output_path, html).with_context(|| format!("Failed to write {:?}", output_path))?;
    tracing::debug!("Rendered: {}", file_name);
    Ok(())
}

/// Header navigation: fixed pages first, configured pages after.
fn nav_links(config: &Config) -> Vec<NavLink> {
    let mut nav = vec![
        NavLink::new("index.html", "Home"),
        NavLink::new("publications.html", "Publications"),
        NavLink::new("cv.html", "CV"),
    ];
    for page in &config.pages {
        nav.push(NavLink::new(
            format!("{}.html", page.slug),
            page.title.clone(),
        ));
    }
    nav
}

/// Copy static assets and the PDF directory into the output.
fn copy_assets(config: &Config) -> Result<()> {
    let output_dir = config.output_dir();

    let static_dest = output_dir.join("static");
    match config.static_dir() {
        Some(static_dir) if static_dir.exists() => {
            copy_dir(&static_dir, &static_dest)?;
            tracing::info!("Copied assets from {:?}", static_dir);
        }
        _ => {
            extract_default_assets(&static_dest)?;
            tracing::info!("Copied assets from embedded defaults");
        }
    }

    if let Some(pdfs_dir) = config.pdfs_dir() {
        if pdfs_dir.exists() {
            copy_dir(&pdfs_dir, &output_dir.join("pdfs"))?;
            tracing::info!("Copied PDFs from {:?}", pdfs_dir);
        } else {
            tracing::warn!("Configured pdfs path {:?} does not exist", pdfs_dir);
        }
    }

    Ok(())
}

fn copy_dir(src: &Path, dest: &Path) -> Result<()> {
    for entry in WalkDir::new(src)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let relative = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dest.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &target)
            .with_context(|| format!("Failed to copy {:?} to {:?}", entry.path(), target))?;
    }
    Ok(())
}

fn extract_default_assets(dest: &Path) -> Result<()> {
    for file in DEFAULT_ASSETS.files() {
        let target = dest.join(file.path());
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, file.contents())
            .with_context(|| format!("Failed to write embedded asset to {:?}", target))?;
    }
    Ok(())
}
