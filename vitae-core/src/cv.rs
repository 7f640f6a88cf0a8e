//! CV record loading and HTML section assembly.

use serde::Deserialize;
use std::fmt::Write;
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::bibliography::Bibliography;
use crate::format::format_entry;
use crate::models::Diagnostic;

/// Structured résumé data, distinct from the bibliography but referencing
/// citation keys by category.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CvRecord {
    pub given_name: String,
    pub sur_name: String,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub degrees: Vec<Degree>,

    #[serde(default)]
    pub employment: Vec<Employment>,

    #[serde(default)]
    pub bibliography: Option<CvBibliography>,

    #[serde(default)]
    pub awards: Vec<Award>,

    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Degree {
    pub degree: String,
    pub discipline: String,
    pub school: String,
    pub year: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Employment {
    pub title: String,
    pub affiliation: String,
    pub location: String,
    pub start_month: String,
    pub start_year: u32,

    #[serde(default)]
    pub end_month: Option<String>,

    #[serde(default)]
    pub end_year: Option<u32>,

    pub description: String,
}

impl Employment {
    /// `"<month> <year>"` for the start; end falls back to `"Present"` when
    /// no end year is recorded.
    pub fn date_range(&self) -> (String, String) {
        let start = format!("{} {}", self.start_month, self.start_year);
        let end = match self.end_year {
            Some(year) => format!("{} {}", self.end_month.as_deref().unwrap_or(""), year)
                .trim_start()
                .to_string(),
            None => "Present".to_string(),
        };
        (start, end)
    }
}

/// Citation keys grouped by publication category.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CvBibliography {
    #[serde(default)]
    pub conference_papers: Vec<String>,

    #[serde(default)]
    pub journal_articles: Vec<String>,

    #[serde(default)]
    pub theses: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Award {
    pub title: String,

    #[serde(default)]
    pub year: Option<u32>,

    #[serde(default)]
    pub years: Option<Vec<u32>>,
}

impl Award {
    /// Displayed year string: `year` if present, else comma-joined `years`,
    /// else empty.
    pub fn year_string(&self) -> String {
        if let Some(year) = self.year {
            year.to_string()
        } else if let Some(years) = &self.years {
            years
                .iter()
                .map(|y| y.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        } else {
            String::new()
        }
    }
}

impl CvRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.sur_name)
    }

    /// Load a CV record from a JSON file. Missing or malformed files yield
    /// `None`; callers render a placeholder instead.
    pub fn load(path: &Path) -> Option<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(err) => {
                warn!("Failed to read CV record {:?}: {}", path, err);
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(cv) => Some(cv),
            Err(err) => {
                warn!("Failed to parse CV record {:?}: {}", path, err);
                None
            }
        }
    }
}

/// Assembled CV output: ordered section fragments plus diagnostics for
/// citation keys that could not be resolved.
#[derive(Debug, Clone, Default)]
pub struct CvAssembly {
    pub sections: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CvAssembly {
    pub fn html(&self) -> String {
        self.sections.join("\n")
    }
}

/// Walk the CV record and emit one HTML section per populated category, in
/// fixed order: Summary, Education, Experience, Publications, Awards,
/// Skills. Publication entries reference the parsed bibliography; unknown
/// keys are skipped with a diagnostic.
pub fn assemble_cv(cv: &CvRecord, bibliography: &Bibliography) -> CvAssembly {
    let mut assembly = CvAssembly::default();
    let highlight = cv.full_name();

    if let Some(summary) = &cv.summary {
        assembly.sections.push(format!(
            "<section class=\"cv-section\">\n  <h2>Summary</h2>\n  <p>{}</p>\n</section>",
            summary
        ));
    }

    if !cv.degrees.is_empty() {
        let mut html = String::from("<section class=\"cv-section\">\n  <h2>Education</h2>\n");
        for deg in &cv.degrees {
            let _ = write!(
                html,
                "  <div class=\"cv-entry\">\n    <div class=\"cv-entry-header\">\n      \
                 <span class=\"cv-degree\">{}, {}</span>\n      \
                 <span class=\"cv-year\">{}</span>\n    </div>\n    \
                 <div class=\"cv-school\">{}</div>\n  </div>\n",
                deg.degree, deg.discipline, deg.year, deg.school
            );
        }
        html.push_str("</section>");
        assembly.sections.push(html);
    }

    if !cv.employment.is_empty() {
        let mut html = String::from("<section class=\"cv-section\">\n  <h2>Experience</h2>\n");
        for job in &cv.employment {
            let (start, end) = job.date_range();
            let _ = write!(
                html,
                "  <div class=\"cv-entry\">\n    <div class=\"cv-entry-header\">\n      \
                 <span class=\"cv-title\">{}</span>\n      \
                 <span class=\"cv-dates\">{} – {}</span>\n    </div>\n    \
                 <div class=\"cv-org\">{}, {}</div>\n    \
                 <p class=\"cv-description\">{}</p>\n  </div>\n",
                job.title, start, end, job.affiliation, job.location, job.description
            );
        }
        html.push_str("</section>");
        assembly.sections.push(html);
    }

    if let Some(bib) = &cv.bibliography {
        let subsections: [(&str, &[String]); 3] = [
            ("Conference Papers", &bib.conference_papers),
            ("Journal Articles", &bib.journal_articles),
            ("Theses", &bib.theses),
        ];

        if subsections.iter().any(|(_, keys)| !keys.is_empty()) {
            let mut html =
                String::from("<section class=\"cv-section\">\n  <h2>Publications</h2>\n");
            for (heading, keys) in subsections {
                if keys.is_empty() {
                    continue;
                }
                let _ = write!(html, "  <h3>{}</h3>\n", heading);
                for key in keys {
                    match bibliography.get(key) {
                        Some(record) => {
                            let _ = write!(
                                html,
                                "  {}\n",
                                format_entry(record, Some(highlight.as_str()))
                            );
                        }
                        None => {
                            assembly.diagnostics.push(
                                Diagnostic::warning(
                                    "cv.unknown_key",
                                    format!(
                                        "CV references citation key '{}' not present in the bibliography",
                                        key
                                    ),
                                )
                                .with_key(key),
                            );
                        }
                    }
                }
            }
            html.push_str("</section>");
            assembly.sections.push(html);
        }
    }

    if !cv.awards.is_empty() {
        let mut html = String::from(
            "<section class=\"cv-section\">\n  <h2>Awards &amp; Recognition</h2>\n  <ul class=\"cv-list\">\n",
        );
        for award in &cv.awards {
            let _ = write!(
                html,
                "    <li>{}, {}</li>\n",
                award.title,
                award.year_string()
            );
        }
        html.push_str("  </ul>\n</section>");
        assembly.sections.push(html);
    }

    if !cv.skills.is_empty() {
        assembly.sections.push(format!(
            "<section class=\"cv-section\">\n  <h2>Skills</h2>\n  <p class=\"cv-skills\">{}</p>\n</section>",
            cv.skills.join(" · ")
        ));
    }

    assembly
}
