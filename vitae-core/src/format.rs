//! Venue derivation and single-entry HTML fragments.

use crate::authors::format_authors;
use crate::bibliography::{CitationRecord, EntryType};
use std::fmt::Write;

/// Derive the venue string for a citation record.
///
/// One pure function shared by the entry formatter and the publication
/// merger so the type-dependent branching lives in exactly one place:
///
/// - conference paper: booktitle, plus `, vol. V` and `, pp. P` when present
/// - journal article: journal, plus `, vol. V` when present
/// - thesis: `<type or "Master's Thesis">, <school>`
/// - anything else: journal if present, else booktitle, else empty
pub fn venue(record: &CitationRecord) -> String {
    match &record.entry_type {
        EntryType::InProceedings => {
            let mut v = record.field_or_empty("booktitle").to_string();
            if let Some(volume) = record.field("volume") {
                let _ = write!(v, ", vol. {}", volume);
            }
            if let Some(pages) = record.field("pages") {
                let _ = write!(v, ", pp. {}", pages);
            }
            v
        }
        EntryType::Article => {
            let mut v = record.field_or_empty("journal").to_string();
            if let Some(volume) = record.field("volume") {
                let _ = write!(v, ", vol. {}", volume);
            }
            v
        }
        EntryType::MastersThesis => {
            let thesis_type = record.field("type").unwrap_or("Master's Thesis");
            format!("{}, {}", thesis_type, record.field_or_empty("school"))
        }
        EntryType::Other(_) => record
            .field("journal")
            .or_else(|| record.field("booktitle"))
            .unwrap_or("")
            .to_string(),
    }
}

/// Render one citation record as an HTML fragment: authors, title
/// (bold, hyperlinked to the `url` field when present), venue (italic),
/// and year.
pub fn format_entry(record: &CitationRecord, highlight: Option<&str>) -> String {
    let authors = format_authors(record.field_or_empty("author"), highlight, None);
    let title = record.field_or_empty("title");
    let year = record.field_or_empty("year");

    let title_html = match record.field("url") {
        Some(url) => format!("<a href=\"{}\" target=\"_blank\">{}</a>", url, title),
        None => title.to_string(),
    };

    format!(
        "<p class=\"pub-entry\">{}. <strong>{}</strong>. <em>{}</em>, {}.</p>",
        authors,
        title_html,
        venue(record),
        year
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn record(entry_type: EntryType, fields: &[(&str, &str)]) -> CitationRecord {
        CitationRecord {
            key: "test".to_string(),
            entry_type,
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        }
    }

    #[test]
    fn test_conference_venue_with_volume_and_pages() {
        let rec = record(
            EntryType::InProceedings,
            &[("booktitle", "ICML"), ("volume", "2"), ("pages", "1-9")],
        );
        insta::assert_snapshot!(venue(&rec), @"ICML, vol. 2, pp. 1-9");
    }

    #[test]
    fn test_conference_venue_without_optional_fields() {
        let rec = record(EntryType::InProceedings, &[("booktitle", "NeurIPS")]);
        assert_eq!(venue(&rec), "NeurIPS");
    }

    #[test]
    fn test_journal_venue_with_volume() {
        let rec = record(
            EntryType::Article,
            &[("journal", "Nature"), ("volume", "12")],
        );
        assert_eq!(venue(&rec), "Nature, vol. 12");
    }

    #[test]
    fn test_thesis_venue_defaults_type() {
        let rec = record(EntryType::MastersThesis, &[("school", "MIT")]);
        insta::assert_snapshot!(venue(&rec), @"Master's Thesis, MIT");
    }

    #[test]
    fn test_thesis_venue_with_explicit_type() {
        let rec = record(
            EntryType::MastersThesis,
            &[("type", "Bachelor's Thesis"), ("school", "ETH")],
        );
        assert_eq!(venue(&rec), "Bachelor's Thesis, ETH");
    }

    #[test]
    fn test_other_venue_prefers_journal_then_booktitle() {
        let with_journal = record(
            EntryType::Other("misc".to_string()),
            &[("journal", "arXiv"), ("booktitle", "Ignored")],
        );
        assert_eq!(venue(&with_journal), "arXiv");

        let with_booktitle = record(
            EntryType::Other("misc".to_string()),
            &[("booktitle", "Workshop")],
        );
        assert_eq!(venue(&with_booktitle), "Workshop");

        let with_neither = record(EntryType::Other("misc".to_string()), &[]);
        assert_eq!(venue(&with_neither), "");
    }

    #[test]
    fn test_format_entry_plain_title() {
        let rec = record(
            EntryType::Article,
            &[
                ("author", "Doe, John"),
                ("title", "A Study"),
                ("journal", "Nature"),
                ("year", "2020"),
            ],
        );
        assert_eq!(
            format_entry(&rec, None),
            "<p class=\"pub-entry\">John Doe. <strong>A Study</strong>. \
             <em>Nature</em>, 2020.</p>"
        );
    }

    #[test]
    fn test_format_entry_linked_title() {
        let rec = record(
            EntryType::Article,
            &[
                ("author", "Doe, John"),
                ("title", "A Study"),
                ("journal", "Nature"),
                ("year", "2020"),
                ("url", "https://example.com/paper"),
            ],
        );
        let html = format_entry(&rec, None);
        assert!(html.contains(
            "<strong><a href=\"https://example.com/paper\" target=\"_blank\">A Study</a></strong>"
        ));
    }

    #[test]
    fn test_format_entry_highlights_owner() {
        let rec = record(
            EntryType::Article,
            &[("author", "Doe, John and Roe, Rita"), ("title", "T")],
        );
        let html = format_entry(&rec, Some("Roe"));
        assert!(html.contains("<span class=\"highlight\">Rita Roe</span>"));
    }
}
