use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::commit::CommitRecord;
use crate::models::conventions::ConventionReport;

const EXAMPLES_PER_PATTERN: usize = 5;

/// Named subject patterns, in report order. Extending the registry is
/// a data change only; the detection loop below never needs to know
/// the names.
static CONVENTION_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    vec![
        (
            "conventional_commits",
            Regex::new(r"^(feat|fix|docs|chore|test|refactor|style|perf|ci|build)(\(.+?\))?:")
                .expect("conventional_commits pattern"),
        ),
        (
            "jira_tickets",
            Regex::new(r"[A-Z]+-\d+").expect("jira_tickets pattern"),
        ),
        (
            "github_issues",
            Regex::new(r"#\d+").expect("github_issues pattern"),
        ),
        (
            "pr_references",
            Regex::new(r"PR #\d+").expect("pr_references pattern"),
        ),
    ]
});

/// Scan every commit subject against the pattern registry.
///
/// A subject counts at most once per pattern no matter how often the
/// regex matches inside it, and may count toward several patterns.
/// Every registry name is present in the result even with zero
/// matches.
pub fn detect_conventions(commits: &[CommitRecord]) -> ConventionReport {
    let mut patterns: IndexMap<String, Vec<String>> = IndexMap::new();
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for (name, _) in CONVENTION_PATTERNS.iter() {
        patterns.insert(name.to_string(), Vec::new());
        counts.insert(name.to_string(), 0);
    }

    for commit in commits {
        for (name, regex) in CONVENTION_PATTERNS.iter() {
            if !regex.is_match(&commit.subject) {
                continue;
            }
            if let Some(count) = counts.get_mut(*name) {
                *count += 1;
            }
            if let Some(examples) = patterns.get_mut(*name)
                && examples.len() < EXAMPLES_PER_PATTERN
            {
                examples.push(commit.subject.clone());
            }
        }
    }

    ConventionReport {
        patterns,
        counts,
        total_commits: commits.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(subject: &str) -> CommitRecord {
        CommitRecord {
            hash: "0000000".to_string(),
            subject: subject.to_string(),
            date: "2026-01-01".to_string(),
            author: "Alice".to_string(),
            files: Vec::new(),
        }
    }

    #[test]
    fn counts_conventional_commit_prefixes() {
        let commits = vec![
            commit("feat: add login"),
            commit("fix(auth): token refresh"),
            commit("random message"),
        ];
        let report = detect_conventions(&commits);

        assert_eq!(report.counts["conventional_commits"], 2);
        assert_eq!(
            report.patterns["conventional_commits"],
            vec!["feat: add login", "fix(auth): token refresh"]
        );
        assert_eq!(report.total_commits, 3);
    }

    #[test]
    fn all_registry_keys_present_without_matches() {
        let report = detect_conventions(&[commit("nothing of note")]);

        for key in [
            "conventional_commits",
            "jira_tickets",
            "github_issues",
            "pr_references",
        ] {
            assert_eq!(report.counts[key], 0, "count for {key}");
            assert!(report.patterns[key].is_empty(), "examples for {key}");
        }
    }

    #[test]
    fn subject_can_match_multiple_patterns() {
        let report = detect_conventions(&[commit("fix: close #42 (PROJ-7)")]);

        assert_eq!(report.counts["conventional_commits"], 1);
        assert_eq!(report.counts["github_issues"], 1);
        assert_eq!(report.counts["jira_tickets"], 1);
        assert_eq!(report.counts["pr_references"], 0);
    }

    #[test]
    fn counts_once_per_commit_despite_repeated_matches() {
        let report = detect_conventions(&[commit("see #1 #2 #3")]);
        assert_eq!(report.counts["github_issues"], 1);
    }

    #[test]
    fn examples_capped_at_five() {
        let commits: Vec<_> = (0..8).map(|i| commit(&format!("feat: change {i}"))).collect();
        let report = detect_conventions(&commits);

        assert_eq!(report.counts["conventional_commits"], 8);
        assert_eq!(report.patterns["conventional_commits"].len(), 5);
        assert_eq!(report.patterns["conventional_commits"][0], "feat: change 0");
        assert_eq!(report.patterns["conventional_commits"][4], "feat: change 4");
    }

    #[test]
    fn pr_reference_requires_pr_prefix() {
        let report = detect_conventions(&[commit("Merged PR #12"), commit("see #12")]);
        assert_eq!(report.counts["pr_references"], 1);
        assert_eq!(report.counts["github_issues"], 2);
    }

    #[test]
    fn prefix_must_be_at_subject_start() {
        let report = detect_conventions(&[commit("revert feat: add login")]);
        assert_eq!(report.counts["conventional_commits"], 0);
    }

    #[test]
    fn total_commits_matches_input_length() {
        let commits: Vec<_> = (0..17).map(|i| commit(&format!("msg {i}"))).collect();
        assert_eq!(detect_conventions(&commits).total_commits, 17);
    }
}
