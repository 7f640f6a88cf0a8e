//! Publication list assembly: citation records merged with the optional
//! per-key metadata overlay.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::authors::format_authors;
use crate::bibliography::Bibliography;
use crate::format::venue;

/// Supplemental per-key publication data not present in the bibliography
/// source. Every field is optional; keys absent from the overlay simply
/// have no supplemental data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PublicationMeta {
    #[serde(default, rename = "abstract")]
    pub abstract_text: Option<String>,

    #[serde(default)]
    pub paper_url: Option<String>,

    #[serde(default)]
    pub slides_url: Option<String>,

    #[serde(default)]
    pub code_url: Option<String>,

    #[serde(default)]
    pub figure: Option<String>,

    /// Venues this work was also presented at.
    #[serde(default)]
    pub also_at: Vec<String>,

    /// Zero-based author positions marking equal contribution.
    #[serde(default)]
    pub equal_contribution: HashSet<usize>,
}

/// The metadata overlay: citation key to supplemental data.
#[derive(Debug, Clone, Default)]
pub struct MetadataOverlay {
    entries: HashMap<String, PublicationMeta>,
}

impl MetadataOverlay {
    /// Load the overlay from a JSON file. A missing path or unreadable or
    /// malformed file yields an empty overlay.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        let contents = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(err) => {
                warn!("Failed to read metadata overlay {:?}: {}", path, err);
                return Self::default();
            }
        };

        match serde_json::from_str::<HashMap<String, PublicationMeta>>(&contents) {
            Ok(entries) => Self { entries },
            Err(err) => {
                warn!("Failed to parse metadata overlay {:?}: {}", path, err);
                Self::default()
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&PublicationMeta> {
        self.entries.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    fn from_entries(entries: HashMap<String, PublicationMeta>) -> Self {
        Self { entries }
    }
}

/// A citation record merged with its overlay data, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct Publication {
    pub key: String,
    pub title: String,
    /// HTML-bearing author string (highlight and equal-contribution spans).
    pub authors: String,
    pub venue: String,
    pub year: String,
    /// Lower-case entry type tag.
    #[serde(rename = "type")]
    pub entry_type: String,
    pub abstract_text: String,
    pub paper_url: Option<String>,
    pub slides_url: Option<String>,
    pub code_url: Option<String>,
    pub figure: Option<String>,
    pub also_at: Vec<String>,
}

/// Merge all citation records with the overlay into display-ready
/// publications, sorted by year descending (stable in bibliography order
/// for equal years).
///
/// Returns the list and whether any entry carries an equal-contribution
/// marker, so callers can conditionally render a legend.
pub fn merge_publications(
    bibliography: &Bibliography,
    overlay: &MetadataOverlay,
    highlight: Option<&str>,
) -> (Vec<Publication>, bool) {
    let mut publications = Vec::with_capacity(bibliography.len());
    let mut has_equal_contrib = false;

    for record in bibliography.iter() {
        let meta = overlay.get(&record.key);
        let equal_contribution = meta
            .map(|m| &m.equal_contribution)
            .filter(|set| !set.is_empty());

        if equal_contribution.is_some() {
            has_equal_contrib = true;
        }

        let authors = format_authors(
            record.field_or_empty("author"),
            highlight,
            equal_contribution,
        );

        let paper_url = meta
            .and_then(|m| m.paper_url.clone())
            .or_else(|| record.field("url").map(str::to_string));

        publications.push(Publication {
            key: record.key.clone(),
            title: record.field_or_empty("title").to_string(),
            authors,
            venue: venue(record),
            year: record.field_or_empty("year").to_string(),
            entry_type: record.entry_type.as_str().to_string(),
            abstract_text: meta
                .and_then(|m| m.abstract_text.clone())
                .unwrap_or_default(),
            paper_url,
            slides_url: meta.and_then(|m| m.slides_url.clone()),
            code_url: meta.and_then(|m| m.code_url.clone()),
            figure: meta.and_then(|m| m.figure.clone()),
            also_at: meta.map(|m| m.also_at.clone()).unwrap_or_default(),
        });
    }

    // Stable sort keeps bibliography order for equal years.
    publications.sort_by(|a, b| b.year.cmp(&a.year));

    (publications, has_equal_contrib)
}
