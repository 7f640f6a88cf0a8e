//! Shared model structs for diagnostics.

use serde::{Deserialize, Serialize};

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Warning,
    Error,
}

/// A non-fatal data-quality issue found while loading or assembling content.
///
/// Absence and malformed-data conditions are deliberately lenient (render
/// nothing for the affected piece); diagnostics make them visible without
/// turning them into failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Stable machine-readable code, e.g. "bibliography.duplicate_key".
    pub code: String,

    /// Human-readable message.
    pub message: String,

    pub severity: DiagnosticSeverity,

    /// Citation key this diagnostic refers to, if any.
    pub key: Option<String>,

    /// Source file path, if known.
    pub source_path: Option<String>,
}

impl Diagnostic {
    pub fn warning(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            severity: DiagnosticSeverity::Warning,
            key: None,
            source_path: None,
        }
    }

    pub fn with_key(mut self, key: &str) -> Self {
        self.key = Some(key.to_string());
        self
    }

    pub fn with_source_path(mut self, path: &str) -> Self {
        self.source_path = Some(path.to_string());
        self
    }
}
