use serde::Serialize;

use crate::models::conventions::ConventionReport;
use crate::models::file_patterns::FilePatternReport;
use crate::models::workflows::WorkflowReport;

/// Repository identity, read from git configuration.
#[derive(Debug, Clone, Serialize)]
pub struct RepoInfo {
    /// Final path segment of the remote URL, `.git` stripped;
    /// `"unknown"` when the URL is absent or unparseable.
    pub name: String,
    /// Remote URL verbatim, may be empty.
    pub url: String,
    /// Current branch, empty on a detached HEAD.
    pub branch: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DateRange {
    /// Date of the oldest analyzed commit (last list element).
    pub earliest: String,
    /// Date of the newest analyzed commit (first list element).
    pub latest: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisMetadata {
    pub commits_analyzed: usize,
    pub date_range: DateRange,
}

/// Terminal output of a run. Field order here is the serialized key
/// order; nothing in the document samples the clock, so identical
/// history yields byte-identical output.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub repo: RepoInfo,
    pub analysis_metadata: AnalysisMetadata,
    pub commit_conventions: ConventionReport,
    pub file_patterns: FilePatternReport,
    pub workflows: WorkflowReport,
}
