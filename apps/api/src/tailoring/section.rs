//! Section locator/editor — finds and replaces a named region of free-form resume text.
//!
//! Resumes have no schema, so boundaries are heuristic:
//! - the header is the first line that begins with the section name (any case)
//!   and is followed by a newline;
//! - the body starts on the next line and always includes that first line;
//! - any later line for which [`starts_new_section`] holds ends the body.
//!
//! A bullet that happens to start with a capital letter also ends the body.
//! Absence is not an error: `locate` returns "" and `replace` returns the input.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Scope of a tailoring request. `All` means the whole document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    All,
    Summary,
    Experience,
    Projects,
    Skills,
}

impl Section {
    pub const VARIANTS: [Section; 5] = [
        Section::All,
        Section::Summary,
        Section::Experience,
        Section::Projects,
        Section::Skills,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::All => "all",
            Section::Summary => "summary",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Skills => "skills",
        }
    }

    /// Header text to search for, or `None` for the whole-document scope.
    pub fn header(self) -> Option<&'static str> {
        match self {
            Section::All => None,
            other => Some(other.as_str()),
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

static SECTION_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]").expect("Failed to compile SECTION_START"));

/// Boundary heuristic: a line that begins with a capital letter looks like a new header.
pub fn starts_new_section(line: &str) -> bool {
    SECTION_START.is_match(line)
}

fn header_regex(section_name: &str) -> Option<Regex> {
    // A byte-order mark may precede a header on the first line.
    RegexBuilder::new(&format!(
        r"^\x{{FEFF}}?{}[^\n]*\n",
        regex::escape(section_name)
    ))
    .case_insensitive(true)
    .multi_line(true)
    .build()
    .ok()
}

/// Byte range of the body of `section_name`, excluding the header line and the
/// line ending (`\n` or `\r\n`) before the next header.
pub fn section_body_range(content: &str, section_name: &str) -> Option<Range<usize>> {
    let header = header_regex(section_name)?.find(content)?;
    let body_start = header.end();
    let rest = &content[body_start..];

    // The first line after the header is always part of the body.
    let Some(mut newline) = rest.find('\n') else {
        return Some(body_start..content.len());
    };

    loop {
        let line_start = newline + 1;
        let line_end = rest[line_start..]
            .find('\n')
            .map(|i| line_start + i)
            .unwrap_or(rest.len());

        if starts_new_section(&rest[line_start..line_end]) {
            let body_end = if rest[..newline].ends_with('\r') {
                newline - 1
            } else {
                newline
            };
            return Some(body_start..body_start + body_end);
        }
        if line_end == rest.len() {
            return Some(body_start..content.len());
        }
        newline = line_end;
    }
}

/// Trimmed body of the named section, or an empty string when it is absent.
pub fn locate(content: &str, section_name: &str) -> String {
    section_body_range(content, section_name)
        .map(|range| content[range].trim().to_string())
        .unwrap_or_default()
}

/// Replaces the body of the named section, keeping the header and everything
/// from the next header on. Returns `content` unchanged when the section is absent.
pub fn replace(content: &str, section_name: &str, new_body: &str) -> String {
    match section_body_range(content, section_name) {
        Some(range) => {
            let mut out = String::with_capacity(content.len() + new_body.len());
            out.push_str(&content[..range.start]);
            out.push_str(new_body);
            out.push_str(&content[range.end..]);
            out
        }
        None => content.to_string(),
    }
}

/// `locate` over a scope; `All` yields the whole document.
pub fn locate_section(content: &str, section: Section) -> String {
    match section.header() {
        Some(name) => locate(content, name),
        None => content.trim().to_string(),
    }
}

/// `replace` over a scope; `All` swaps the whole document.
pub fn replace_section(content: &str, section: Section, new_body: &str) -> String {
    match section.header() {
        Some(name) => replace(content, name, new_body),
        None => new_body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Doe\n\
        SUMMARY\n\
        backend engineer with 6 years of experience.\n\
        EXPERIENCE\n\
        Acme Corp - Staff Engineer\n\
        - built the billing pipeline\n\
        - cut p99 latency by 40%\n\
        PROJECTS\n\
        tailor: resume tooling\n\
        SKILLS\n\
        Rust, Go, PostgreSQL";

    #[test]
    fn test_locate_summary() {
        assert_eq!(
            locate(RESUME, "summary"),
            "backend engineer with 6 years of experience."
        );
    }

    #[test]
    fn test_locate_keeps_lowercase_continuation_lines() {
        assert_eq!(
            locate(RESUME, "experience"),
            "Acme Corp - Staff Engineer\n- built the billing pipeline\n- cut p99 latency by 40%"
        );
    }

    #[test]
    fn test_locate_last_section_runs_to_end() {
        assert_eq!(locate(RESUME, "skills"), "Rust, Go, PostgreSQL");
    }

    #[test]
    fn test_locate_missing_section_is_empty() {
        assert_eq!(locate(RESUME, "certifications"), "");
    }

    #[test]
    fn test_header_must_start_a_line() {
        let text = "Intro mentions skills here\nSKILLS\nrust";
        assert_eq!(locate(text, "skills"), "rust");
    }

    #[test]
    fn test_header_without_following_line_is_absent() {
        assert_eq!(locate("Jane\nSKILLS", "skills"), "");
        assert_eq!(replace("Jane\nSKILLS", "skills", "Rust"), "Jane\nSKILLS");
    }

    #[test]
    fn test_section_name_is_matched_literally() {
        let text = "C++ (expert)\nthings\nOther\nmore";
        assert_eq!(locate(text, "c++"), "things");
        assert_eq!(locate(text, "c.."), "");
    }

    #[test]
    fn test_capitalized_bullet_is_a_false_boundary() {
        let text = "SKILLS\nrust\nPython\ngo";
        assert_eq!(locate(text, "skills"), "rust");
    }

    #[test]
    fn test_replace_scenario_from_upload() {
        let content = "SUMMARY\nDid X.\nSKILLS\nPython";
        assert_eq!(
            replace(content, "summary", "Did X and Y."),
            "SUMMARY\nDid X and Y.\nSKILLS\nPython"
        );
    }

    #[test]
    fn test_replace_last_section() {
        let content = "SUMMARY\nDid X.\nSKILLS\nPython";
        assert_eq!(
            replace(content, "skills", "Python, Rust"),
            "SUMMARY\nDid X.\nSKILLS\nPython, Rust"
        );
    }

    #[test]
    fn test_replace_absent_section_is_noop() {
        let content = "SUMMARY\nDid X.\nSKILLS\nPython";
        assert_eq!(replace(content, "projects", "anything"), content);
    }

    #[test]
    fn test_locate_after_replace_returns_trimmed_body() {
        for section in ["summary", "experience", "projects", "skills"] {
            let body = "  rewritten line one\n- rewritten bullet two \n";
            let updated = replace(RESUME, section, body);
            assert_eq!(locate(&updated, section), body.trim(), "section {section}");
        }
    }

    #[test]
    fn test_replace_leaves_other_sections_intact() {
        let updated = replace(RESUME, "projects", "- resume tailoring service");
        assert_eq!(locate(&updated, "summary"), locate(RESUME, "summary"));
        assert_eq!(locate(&updated, "skills"), "Rust, Go, PostgreSQL");
        assert!(updated.starts_with("Jane Doe\nSUMMARY\n"));
    }

    #[test]
    fn test_crlf_lines() {
        let text = "SUMMARY\r\nDid X.\r\nSKILLS\r\nPython";
        assert_eq!(locate(text, "summary"), "Did X.");
        assert_eq!(locate(text, "skills"), "Python");
    }

    #[test]
    fn test_replace_keeps_crlf_line_endings() {
        let text = "SUMMARY\r\nDid X.\r\nSKILLS\r\nPython";
        assert_eq!(
            replace(text, "summary", "New"),
            "SUMMARY\r\nNew\r\nSKILLS\r\nPython"
        );
    }

    #[test]
    fn test_header_after_byte_order_mark() {
        let text = "\u{FEFF}SUMMARY\nDid X.\nSKILLS\nPython";
        assert_eq!(locate(text, "summary"), "Did X.");
        assert_eq!(
            replace(text, "summary", "Did X and Y."),
            "\u{FEFF}SUMMARY\nDid X and Y.\nSKILLS\nPython"
        );
    }

    #[test]
    fn test_all_scope_covers_whole_document() {
        assert_eq!(locate_section("  whole doc \n", Section::All), "whole doc");
        assert_eq!(replace_section("old", Section::All, "new"), "new");
        assert_eq!(
            replace_section("SUMMARY\nold\nSKILLS\nx", Section::Summary, "new"),
            "SUMMARY\nnew\nSKILLS\nx"
        );
    }

    #[test]
    fn test_boundary_heuristic() {
        assert!(starts_new_section("EDUCATION"));
        assert!(starts_new_section("Projects"));
        assert!(!starts_new_section("- bullet"));
        assert!(!starts_new_section("lowercase"));
        assert!(!starts_new_section(""));
    }

    #[test]
    fn test_section_serde_lowercase() {
        let section: Section = serde_json::from_str(r#""experience""#).unwrap();
        assert_eq!(section, Section::Experience);
        assert_eq!(serde_json::to_string(&Section::All).unwrap(), r#""all""#);
        assert!(serde_json::from_str::<Section>(r#""hobbies""#).is_err());
    }
}
