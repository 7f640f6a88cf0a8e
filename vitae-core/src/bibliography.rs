//! Bibliography parsing: `@type{key, field = {value}, ...}` blocks into
//! citation records.
//!
//! The parser recognizes the bracketed-value subset of the citation-database
//! format: only `field = {value}` pairs are picked up, numeric and
//! quoted-string values are ignored. Missing or unparseable source text
//! yields an empty bibliography rather than an error.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::{fs, mem};
use tracing::warn;

use crate::models::Diagnostic;

/// Classification of a citation record, driving venue formatting.
///
/// The set is open: types without dedicated formatting rules are kept
/// verbatim (lower-cased) in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryType {
    InProceedings,
    Article,
    MastersThesis,
    Other(String),
}

impl EntryType {
    /// Parse an entry type from a source-text marker (case-insensitive).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "inproceedings" => Self::InProceedings,
            "article" => Self::Article,
            "mastersthesis" => Self::MastersThesis,
            other => Self::Other(other.to_string()),
        }
    }

    /// Canonical lower-case tag for this entry type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::InProceedings => "inproceedings",
            Self::Article => "article",
            Self::MastersThesis => "mastersthesis",
            Self::Other(s) => s.as_str(),
        }
    }
}

/// One parsed bibliography entry: key, type, and cleaned field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitationRecord {
    pub key: String,
    pub entry_type: EntryType,
    /// Lowercase field name to cleaned value. Unknown field names are kept
    /// verbatim for optional use.
    pub fields: HashMap<String, String>,
}

impl CitationRecord {
    /// Get a field value, treating empty strings as absent.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Get a field value or the empty string.
    pub fn field_or_empty(&self, name: &str) -> &str {
        self.field(name).unwrap_or("")
    }
}

static ENTRY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)@(\w+)\{([^,]+),([^@]*)").expect("valid entry regex"));

static FIELD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)\s*=\s*\{([^}]*)\}").expect("valid field regex"));

/// Insertion-ordered collection of citation records keyed by citation key.
///
/// Duplicate keys overwrite earlier records (last write wins) while keeping
/// the first-seen position; a diagnostic is recorded since duplicate keys
/// usually indicate a data-quality problem in the source file.
#[derive(Debug, Clone, Default)]
pub struct Bibliography {
    entries: HashMap<String, CitationRecord>,
    order: Vec<String>,
    diagnostics: Vec<Diagnostic>,
}

impl Bibliography {
    /// Parse bibliography source text into records.
    pub fn parse(source: &str) -> Self {
        let mut bib = Bibliography::default();

        for caps in ENTRY_RE.captures_iter(source) {
            let entry_type = EntryType::from_str(&caps[1]);
            let key = caps[2].trim().to_string();
            if key.is_empty() {
                continue;
            }

            let mut fields = HashMap::new();
            for field in FIELD_RE.captures_iter(&caps[3]) {
                let name = field[1].to_lowercase();
                let value = clean_field_value(&field[2]);
                fields.insert(name, value);
            }

            let record = CitationRecord {
                key: key.clone(),
                entry_type,
                fields,
            };

            if bib.entries.insert(key.clone(), record).is_some() {
                bib.diagnostics.push(
                    Diagnostic::warning(
                        "bibliography.duplicate_key",
                        format!("Duplicate citation key '{}' (last occurrence wins)", key),
                    )
                    .with_key(&key),
                );
            } else {
                bib.order.push(key);
            }
        }

        bib
    }

    /// Load and parse a bibliography file.
    ///
    /// A missing or unreadable file is treated as "no publications yet" and
    /// yields an empty bibliography with a diagnostic.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents),
            Err(err) => {
                warn!("Failed to read bibliography {:?}: {}", path, err);
                let mut bib = Bibliography::default();
                bib.diagnostics.push(
                    Diagnostic::warning(
                        "bibliography.load_failed",
                        format!("Failed to read bibliography: {}", err),
                    )
                    .with_source_path(&path.to_string_lossy()),
                );
                bib
            }
        }
    }

    /// Lookup a record by citation key.
    pub fn get(&self, key: &str) -> Option<&CitationRecord> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate records in source order (first occurrence of each key).
    pub fn iter(&self) -> impl Iterator<Item = &CitationRecord> {
        self.order.iter().filter_map(|key| self.entries.get(key))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Take accumulated diagnostics (clearing the internal buffer).
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        mem::take(&mut self.diagnostics)
    }
}

/// Clean a raw field value: unescape `\#`, collapse line breaks to spaces,
/// and trim surrounding whitespace.
fn clean_field_value(raw: &str) -> String {
    raw.trim()
        .replace("\\#", "#")
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
        .trim()
        .to_string()
}
