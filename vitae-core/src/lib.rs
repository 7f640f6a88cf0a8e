//! # vitae-core
//!
//! Core library for the vitae academic site generator.
//!
//! This crate provides the bibliography parser, publication formatting,
//! CV assembly, and site configuration. Rendering to full pages lives in
//! `vitae-render`; the CLI in `vitae-cli`.

pub mod authors;
pub mod bibliography;
pub mod config;
pub mod cv;
pub mod format;
pub mod models;
pub mod publications;

pub use authors::format_authors;
pub use bibliography::{Bibliography, CitationRecord, EntryType};
pub use config::{Config, PageConfig, SiteConfig};
pub use cv::{assemble_cv, CvAssembly, CvRecord};
pub use format::{format_entry, venue};
pub use models::{Diagnostic, DiagnosticSeverity};
pub use publications::{merge_publications, MetadataOverlay, Publication, PublicationMeta};
