use indexmap::IndexMap;
use serde::Serialize;

/// Commit-message convention matches across the analyzed window.
///
/// Both maps hold every registry pattern name, in registry order, even
/// when nothing matched. A single subject may count toward several
/// patterns.
#[derive(Debug, Clone, Serialize)]
pub struct ConventionReport {
    /// Up to 5 example subjects per pattern, verbatim, insertion order.
    pub patterns: IndexMap<String, Vec<String>>,
    /// Commits matching each pattern (at most once per commit).
    pub counts: IndexMap<String, usize>,
    pub total_commits: usize,
}
