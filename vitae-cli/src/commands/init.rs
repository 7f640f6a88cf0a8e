//! Init command implementation.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = include_str!("../../../vitae.yml.example");

const SAMPLE_BIB: &str = r#"@inproceedings{yourname2024sample,
  author = {Yourname, First and Collaborator, Second},
  title = {A Sample Conference Paper},
  booktitle = {Proceedings of the Sample Conference},
  year = {2024},
}
"#;

const SAMPLE_CV: &str = r#"{
  "given-name": "First",
  "sur-name": "Yourname",
  "summary": "One-paragraph professional summary.",
  "degrees": [
    {"degree": "B.S.", "discipline": "Computer Science", "school": "Some University", "year": 2022}
  ],
  "employment": [
    {
      "title": "Research Assistant",
      "affiliation": "Some Lab",
      "location": "Somewhere",
      "start-month": "September",
      "start-year": 2022,
      "description": "What you did there."
    }
  ],
  "bibliography": {
    "conference-papers": ["yourname2024sample"]
  },
  "awards": [
    {"title": "Some Award", "year": 2023}
  ],
  "skills": ["Writing", "Research"]
}
"#;

/// Initialize a new vitae project
pub fn init_project(path: Option<&Path>) -> Result<()> {
    let root = path.unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(root).with_context(|| format!("Failed to create {:?}", root))?;

    write_if_absent(&root.join("vitae.yml"), DEFAULT_CONFIG)?;
    write_if_absent(&root.join("publications.bib"), SAMPLE_BIB)?;

    let cv_dir = root.join("cv");
    fs::create_dir_all(&cv_dir).with_context(|| format!("Failed to create {:?}", cv_dir))?;
    write_if_absent(&cv_dir.join("cv.json"), SAMPLE_CV)?;

    println!("✓ vitae initialized in {:?}", root);
    println!("  - Edit vitae.yml to customize site metadata");
    println!("  - Add entries to publications.bib and cv/cv.json");
    println!("  - Run `vitae build` to render the site");
    Ok(())
}

fn write_if_absent(path: &Path, contents: &str) -> Result<()> {
    if path.exists() {
        println!("{:?} already exists, leaving it alone", path);
        return Ok(());
    }

    fs::write(path, contents).with_context(|| format!("Failed to write {:?}", path))?;
    println!("Created {:?}", path);
    Ok(())
}
