//! Author list formatting with name highlighting and equal-contribution
//! markers.

use std::collections::HashSet;

/// Format a raw `"A and B and C"` author field into a display string.
///
/// Each author given as `"Last, First"` is re-emitted as `"First Last"`.
/// When `highlight` (or any whitespace-delimited part of it) appears
/// case-insensitively within an author's name, that name is wrapped in a
/// highlight span. Authors whose zero-based position is in
/// `equal_contribution` get a superscript-style marker appended.
///
/// Joining: one author stands alone, two are joined with `" and "`, three
/// or more are comma-separated with `", and "` before the final author.
pub fn format_authors(
    raw: &str,
    highlight: Option<&str>,
    equal_contribution: Option<&HashSet<usize>>,
) -> String {
    let formatted: Vec<String> = raw
        .split(" and ")
        .map(str::trim)
        .enumerate()
        .map(|(i, author)| {
            let mut name = reorder_name(author);

            if let Some(target) = highlight {
                if name_matches(&name, target) {
                    name = format!("<span class=\"highlight\">{}</span>", name);
                }
            }

            if equal_contribution.is_some_and(|set| set.contains(&i)) {
                name.push_str("<span class=\"equal-contrib\">*</span>");
            }

            name
        })
        .collect();

    match formatted.len() {
        0 => String::new(),
        1 => formatted[0].clone(),
        2 => format!("{} and {}", formatted[0], formatted[1]),
        n => format!(
            "{}, and {}",
            formatted[..n - 1].join(", "),
            formatted[n - 1]
        ),
    }
}

/// Turn `"Last, First"` into `"First Last"`; names without a comma pass
/// through unchanged.
fn reorder_name(author: &str) -> String {
    let mut parts = author.split(',');
    match (parts.next(), parts.next()) {
        (Some(last), Some(first)) => format!("{} {}", first.trim(), last.trim()),
        _ => author.to_string(),
    }
}

fn name_matches(name: &str, target: &str) -> bool {
    let name_lower = name.to_lowercase();
    let target_lower = target.to_lowercase();
    name_lower.contains(&target_lower)
        || target_lower
            .split_whitespace()
            .any(|part| name_lower.contains(part))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_author_passes_through() {
        assert_eq!(format_authors("Ada Lovelace", None, None), "Ada Lovelace");
    }

    #[test]
    fn test_last_first_reordering() {
        assert_eq!(
            format_authors("Smith, Jane and Doe, John", None, None),
            "Jane Smith and John Doe"
        );
    }

    #[test]
    fn test_oxford_comma_join() {
        assert_eq!(format_authors("A and B and C", None, None), "A, B, and C");
    }

    #[test]
    fn test_highlight_by_surname() {
        let out = format_authors("Smith, Jane and Doe, John", Some("Smith"), None);
        assert_eq!(
            out,
            "<span class=\"highlight\">Jane Smith</span> and John Doe"
        );
    }

    #[test]
    fn test_highlight_matches_any_name_part() {
        // Full name supplied; only the surname appears in the author list.
        let out = format_authors("Smith, Jane", Some("Jane Q. Smith"), None);
        assert!(out.starts_with("<span class=\"highlight\">"));
    }

    #[test]
    fn test_highlight_is_case_insensitive() {
        let out = format_authors("SMITH, JANE", Some("smith"), None);
        assert!(out.contains("class=\"highlight\""));
    }

    #[test]
    fn test_equal_contribution_marker() {
        let set: HashSet<usize> = [0, 1].into_iter().collect();
        let out = format_authors("A and B and C", None, Some(&set));
        assert_eq!(
            out,
            "A<span class=\"equal-contrib\">*</span>, \
             B<span class=\"equal-contrib\">*</span>, and C"
        );
    }

    #[test]
    fn test_marker_follows_highlight_span() {
        let set: HashSet<usize> = [0].into_iter().collect();
        let out = format_authors("Smith, Jane", Some("Smith"), Some(&set));
        assert_eq!(
            out,
            "<span class=\"highlight\">Jane Smith</span><span class=\"equal-contrib\">*</span>"
        );
    }
}
