use indexmap::IndexMap;
use serde::Serialize;

/// A commit retained as an example of a workflow tag.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowExample {
    pub message: String,
    /// First 5 distinct files in original commit order.
    pub files: Vec<String>,
}

/// Heuristic workflow classification summary. Only tags that occurred
/// appear, in first-occurrence order.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowReport {
    pub counts: IndexMap<String, usize>,
    /// Up to 3 examples per tag, first-encountered-first-kept.
    pub examples: IndexMap<String, Vec<WorkflowExample>>,
}
