//! # vitae-render
//!
//! Template rendering library for vitae.
//!
//! This crate handles HTML page rendering using Askama.

pub mod templates;

pub use templates::{CvTemplate, IndexTemplate, NavLink, PageTemplate, PublicationsTemplate};
