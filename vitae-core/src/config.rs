//! Configuration parsing and management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

/// Main configuration struct matching the vitae.yml schema.
///
/// All state the pipeline needs comes through here; there is no ambient
/// process-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    pub paths: PathsConfig,

    /// Generic informational pages rendered from title + body.
    #[serde(default)]
    pub pages: Vec<PageConfig>,

    // Internal: path to config file (for relative path resolution)
    #[serde(skip)]
    config_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub title: String,
    pub given_name: String,
    pub sur_name: String,
    pub description: String,
    pub url: String,

    #[serde(default)]
    pub intro: Option<String>,
}

impl SiteConfig {
    /// Full display name of the site owner.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.sur_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    pub bibliography: PathBuf,
    pub output: PathBuf,

    #[serde(default)]
    pub metadata: Option<PathBuf>,

    #[serde(default)]
    pub cv: Option<PathBuf>,

    #[serde(default, rename = "static")]
    pub static_dir: Option<PathBuf>,

    #[serde(default)]
    pub pdfs: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub slug: String,
    pub title: String,
    pub body: String,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&contents)?;

        // Store config file path for relative path resolution
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Bibliography source file, resolved relative to the config file
    pub fn bibliography_path(&self) -> PathBuf {
        self.resolve_path(&self.paths.bibliography)
    }

    /// Output directory, resolved relative to the config file
    pub fn output_dir(&self) -> PathBuf {
        self.resolve_path(&self.paths.output)
    }

    /// Metadata overlay file, if configured
    pub fn metadata_path(&self) -> Option<PathBuf> {
        self.paths.metadata.as_ref().map(|p| self.resolve_path(p))
    }

    /// CV record file, if configured
    pub fn cv_path(&self) -> Option<PathBuf> {
        self.paths.cv.as_ref().map(|p| self.resolve_path(p))
    }

    /// Static asset directory, if configured
    pub fn static_dir(&self) -> Option<PathBuf> {
        self.paths
            .static_dir
            .as_ref()
            .map(|p| self.resolve_path(p))
    }

    /// Directory of downloadable PDFs, if configured
    pub fn pdfs_dir(&self) -> Option<PathBuf> {
        self.paths.pdfs.as_ref().map(|p| self.resolve_path(p))
    }

    /// Resolve a path relative to the config file location
    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else if let Some(config_path) = &self.config_path {
            if let Some(parent) = config_path.parent() {
                parent.join(path)
            } else {
                path.to_path_buf()
            }
        } else {
            path.to_path_buf()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"
site:
  title: "Rita Roe"
  given_name: "Rita"
  sur_name: "Roe"
  description: "Personal academic site"
  url: "https://example.com"
paths:
  bibliography: "publications.bib"
  output: "docs"
  metadata: "publications_meta.json"
  cv: "cv/cv.json"
  static: "static"
pages:
  - slug: research
    title: Research
    body: "Research interests go here."
"#;

    #[test]
    fn test_parse_and_resolve_paths() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("vitae.yml");
        fs::write(&config_path, SAMPLE).unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.site.full_name(), "Rita Roe");
        assert_eq!(
            config.bibliography_path(),
            dir.path().join("publications.bib")
        );
        assert_eq!(config.output_dir(), dir.path().join("docs"));
        assert_eq!(config.cv_path(), Some(dir.path().join("cv/cv.json")));
        assert_eq!(config.pdfs_dir(), None);
        assert_eq!(config.pages.len(), 1);
        assert_eq!(config.pages[0].slug, "research");
    }

    #[test]
    fn test_optional_paths_default_to_none() {
        let minimal = r#"
site:
  title: "T"
  given_name: "G"
  sur_name: "S"
  description: "D"
  url: "https://example.com"
paths:
  bibliography: "refs.bib"
  output: "docs"
"#;
        let config: Config = serde_yaml::from_str(minimal).unwrap();
        assert!(config.metadata_path().is_none());
        assert!(config.cv_path().is_none());
        assert!(config.static_dir().is_none());
        assert!(config.pages.is_empty());
    }
}
