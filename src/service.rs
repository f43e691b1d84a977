use anyhow::{Result, bail};
use tracing::{debug, warn};

use crate::engine::conventions::detect_conventions;
use crate::engine::file_patterns::analyze_file_patterns;
use crate::engine::history::parse_history;
use crate::engine::repo_info::repo_name_from_url;
use crate::engine::workflows::classify_workflows;
use crate::error::PulseError;
use crate::git::GitSource;
use crate::models::commit::CommitRecord;
use crate::models::report::{AnalysisMetadata, AnalysisReport, DateRange, RepoInfo};

// ---------------------------------------------------------------------------
// Analyzer: single-pass orchestration over one git source
// ---------------------------------------------------------------------------

pub struct Analyzer<'a> {
    source: &'a dyn GitSource,
}

impl<'a> Analyzer<'a> {
    pub fn new(source: &'a dyn GitSource) -> Self {
        Self { source }
    }

    /// Run the whole analysis: repository metadata, bounded history
    /// fetch, and the three counting passes, composed into one report.
    ///
    /// A failed history fetch degrades to an empty commit list; an
    /// empty list is fatal (`NO_COMMITS`) because every downstream
    /// aggregate is meaningless without commits. Metadata fetch
    /// failures degrade to empty fields, never errors.
    pub fn analyze(&self, max_commits: usize) -> Result<AnalysisReport> {
        debug!(max_commits, "analyze called");

        let repo = self.repo_info();
        let commits = self.recent_commits(max_commits);
        if commits.is_empty() {
            bail!(PulseError::no_commits());
        }

        let commit_conventions = detect_conventions(&commits);
        let file_patterns = analyze_file_patterns(&commits);
        let workflows = classify_workflows(&commits);

        // The list is most-recent-first: latest from the head,
        // earliest from the tail.
        let analysis_metadata = AnalysisMetadata {
            commits_analyzed: commits.len(),
            date_range: DateRange {
                earliest: commits[commits.len() - 1].date.clone(),
                latest: commits[0].date.clone(),
            },
        };

        debug!(
            commits_analyzed = commits.len(),
            workflow_tags = workflows.counts.len(),
            "analyze completed"
        );

        Ok(AnalysisReport {
            repo,
            analysis_metadata,
            commit_conventions,
            file_patterns,
            workflows,
        })
    }

    fn recent_commits(&self, max_commits: usize) -> Vec<CommitRecord> {
        match self.source.history(max_commits) {
            Ok(output) => {
                let commits = parse_history(&output);
                debug!(commits = commits.len(), "history parsed");
                commits
            }
            Err(e) => {
                warn!(error = %e, "history fetch failed");
                Vec::new()
            }
        }
    }

    fn repo_info(&self) -> RepoInfo {
        let url = self.source.remote_url().unwrap_or_else(|e| {
            warn!(error = %e, "remote url fetch failed");
            String::new()
        });
        let branch = self.source.current_branch().unwrap_or_else(|e| {
            warn!(error = %e, "branch fetch failed");
            String::new()
        });

        RepoInfo {
            name: repo_name_from_url(&url),
            url,
            branch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorCode, PulseError};

    /// Canned git source: each field is either fixed output or a
    /// simulated invocation failure.
    struct FakeGit {
        history: Result<String, ()>,
        remote_url: Result<String, ()>,
        branch: Result<String, ()>,
    }

    impl FakeGit {
        fn with_history(history: &str) -> Self {
            Self {
                history: Ok(history.to_string()),
                remote_url: Ok("git@github.com:acme/widgets.git".to_string()),
                branch: Ok("main".to_string()),
            }
        }
    }

    fn canned(value: &Result<String, ()>) -> Result<String> {
        match value {
            Ok(s) => Ok(s.clone()),
            Err(()) => Err(PulseError::new(ErrorCode::SourceUnavailable, "git failed").into()),
        }
    }

    impl GitSource for FakeGit {
        fn history(&self, _max_commits: usize) -> Result<String> {
            canned(&self.history)
        }

        fn remote_url(&self) -> Result<String> {
            canned(&self.remote_url)
        }

        fn current_branch(&self) -> Result<String> {
            canned(&self.branch)
        }
    }

    const TWO_COMMITS: &str = "\
aaa111|feat: add login|2026-02-03|Alice
src/auth.js
test/auth.test.js

bbb222|fix: PROJ-9 broken redirect|2026-01-28|Bob
src/auth.js
";

    #[test]
    fn analyze_composes_all_sections() {
        let git = FakeGit::with_history(TWO_COMMITS);
        let report = Analyzer::new(&git).analyze(200).unwrap();

        assert_eq!(report.repo.name, "widgets");
        assert_eq!(report.repo.branch, "main");
        assert_eq!(report.analysis_metadata.commits_analyzed, 2);
        assert_eq!(report.analysis_metadata.date_range.latest, "2026-02-03");
        assert_eq!(report.analysis_metadata.date_range.earliest, "2026-01-28");
        assert_eq!(report.commit_conventions.counts["conventional_commits"], 2);
        assert_eq!(report.commit_conventions.counts["jira_tickets"], 1);
        assert_eq!(report.workflows.counts["test_with_source"], 1);
        assert_eq!(
            report.file_patterns.most_changed_files[0],
            ("src/auth.js".to_string(), 2)
        );
    }

    #[test]
    fn failed_history_fetch_is_no_commits() {
        let git = FakeGit {
            history: Err(()),
            remote_url: Ok(String::new()),
            branch: Ok(String::new()),
        };
        let err = Analyzer::new(&git).analyze(200).unwrap_err();
        let pulse = err.downcast_ref::<PulseError>().unwrap();
        assert_eq!(pulse.code, ErrorCode::NoCommits);
    }

    #[test]
    fn empty_history_is_no_commits() {
        let git = FakeGit::with_history("");
        let err = Analyzer::new(&git).analyze(200).unwrap_err();
        let pulse = err.downcast_ref::<PulseError>().unwrap();
        assert_eq!(pulse.code, ErrorCode::NoCommits);
    }

    #[test]
    fn metadata_failures_degrade_to_empty_fields() {
        let git = FakeGit {
            history: Ok(TWO_COMMITS.to_string()),
            remote_url: Err(()),
            branch: Err(()),
        };
        let report = Analyzer::new(&git).analyze(200).unwrap();

        assert_eq!(report.repo.name, "unknown");
        assert_eq!(report.repo.url, "");
        assert_eq!(report.repo.branch, "");
    }

    #[test]
    fn single_commit_date_range_collapses() {
        let git = FakeGit::with_history("ccc|chore: bump|2026-03-01|Eve\nCargo.toml\n");
        let report = Analyzer::new(&git).analyze(200).unwrap();

        assert_eq!(report.analysis_metadata.date_range.earliest, "2026-03-01");
        assert_eq!(report.analysis_metadata.date_range.latest, "2026-03-01");
    }

    #[test]
    fn report_serialization_is_deterministic() {
        let git = FakeGit::with_history(TWO_COMMITS);
        let analyzer = Analyzer::new(&git);

        let first = serde_json::to_string_pretty(&analyzer.analyze(200).unwrap()).unwrap();
        let second = serde_json::to_string_pretty(&analyzer.analyze(200).unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
