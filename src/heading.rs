//! Heading vocabulary for changelog documents.
//!
//! Version sections are introduced by lines of the form `## [<token>]`.
//! Two detectors, deliberately asymmetric:
//!
//! - the target heading is matched against the full caller-supplied token
//!   (`## [1.2.0]` — no `v` required), while
//! - the end of a section is any heading whose token starts with `v`
//!   (`## [v...]`), the convention ordinary version headings follow.

use regex::Regex;
use std::sync::LazyLock;

/// Matches the start of any ordinary version heading: `## [v...`.
static RE_VERSION_HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^## \[v").unwrap());

/// The heading marker introducing the section for `version`: `## [<version>]`.
///
/// Pure concatenation — the version is an opaque token, never parsed.
pub fn target_marker(version: &str) -> String {
    format!("## [{version}]")
}

/// Returns true if the line opens some version's section.
///
/// Headings with leading whitespace or a different heading level do not
/// match; such a line is swallowed into the current section rather than
/// ending it.
pub fn is_version_heading(line: &str) -> bool {
    RE_VERSION_HEADING.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_embeds_version() {
        assert_eq!(target_marker("1.2.0"), "## [1.2.0]");
        assert_eq!(target_marker("v1.2.0"), "## [v1.2.0]");
    }

    #[test]
    fn detects_version_heading() {
        assert!(is_version_heading("## [v1.0.0]"));
        assert!(is_version_heading("## [v1.0.0] - 2024-01-01"));
    }

    #[test]
    fn requires_v_in_brackets() {
        assert!(!is_version_heading("## [1.0.0]"));
        assert!(!is_version_heading("## [unreleased]"));
    }

    #[test]
    fn requires_exact_prefix() {
        assert!(!is_version_heading("  ## [v1.0.0]"));
        assert!(!is_version_heading("### [v1.0.0]"));
        assert!(!is_version_heading("- see ## [v1.0.0]"));
    }
}
