//! Askama template definitions.

use askama::Template;
use vitae_core::Publication;

/// A navigation link in the site header.
#[derive(Debug, Clone)]
pub struct NavLink {
    pub href: String,
    pub label: String,
}

impl NavLink {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }
}

/// Landing page template
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    // Site metadata
    pub site_title: String,
    pub site_author: String,
    pub year: i32,
    pub nav: Vec<NavLink>,

    // Content
    pub name: String,
    pub description: String,
    pub intro: Option<String>,
}

/// Generic informational page template (research, blog, ...)
#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub site_title: String,
    pub site_author: String,
    pub year: i32,
    pub nav: Vec<NavLink>,

    pub title: String,
    pub body: String,
}

/// Publications list template
#[derive(Template)]
#[template(path = "publications.html")]
pub struct PublicationsTemplate {
    pub site_title: String,
    pub site_author: String,
    pub year: i32,
    pub nav: Vec<NavLink>,

    pub publications: Vec<Publication>,

    // Whether to render the equal-contribution legend
    pub has_equal_contrib: bool,
}

/// CV page template; `content` holds the pre-assembled section fragments
/// (or a placeholder when the CV record is missing).
#[derive(Template)]
#[template(path = "cv.html")]
pub struct CvTemplate {
    pub site_title: String,
    pub site_author: String,
    pub year: i32,
    pub nav: Vec<NavLink>,

    pub name: String,
    pub content: String,
}
