//! Keyword gap analysis — job-description words the resume never mentions.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

static KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-zA-Z]{4,}\b").expect("Failed to compile KEYWORD"));

fn keywords(text: &str) -> impl Iterator<Item = String> + '_ {
    KEYWORD.find_iter(text).map(|m| m.as_str().to_lowercase())
}

/// Lowercased words of four or more letters found in the job description but not in
/// the resume, deduplicated, in order of first appearance in the job description.
pub fn missing_keywords(resume: &str, job_description: &str) -> Vec<String> {
    let present: HashSet<String> = keywords(resume).collect();
    let mut seen = HashSet::new();

    keywords(job_description)
        .filter(|word| !present.contains(word))
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_missing_words_in_jd_order() {
        let resume = "Built services in Rust and Python.";
        let jd = "Looking for Kubernetes and Rust experience. Kubernetes required.";
        assert_eq!(
            missing_keywords(resume, jd),
            vec!["looking", "kubernetes", "experience", "required"]
        );
    }

    #[test]
    fn test_short_words_and_case_are_ignored() {
        let resume = "GOLANG expert";
        let jd = "Go and golang, SQL too";
        assert!(missing_keywords(resume, jd).is_empty());
    }

    #[test]
    fn test_empty_job_description() {
        assert!(missing_keywords("anything", "   ").is_empty());
    }
}
