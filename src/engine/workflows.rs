use indexmap::{IndexMap, IndexSet};

use crate::models::commit::CommitRecord;
use crate::models::workflows::{WorkflowExample, WorkflowReport};

const EXAMPLES_PER_TAG: usize = 3;
const FILES_PER_EXAMPLE: usize = 5;

/// A tag predicate sees the commit's deduplicated file set (first
/// occurrence order kept) and the lowercased subject.
type TagPredicate = fn(&IndexSet<String>, &str) -> bool;

/// Named workflow tags, in evaluation order.
const WORKFLOW_TAGS: &[(&str, TagPredicate)] = &[
    ("test_with_source", test_with_source),
    ("database_migration", database_migration),
    ("documented_change", documented_change),
];

fn is_test_path(path: &str) -> bool {
    path.contains("test") || path.contains("spec")
}

/// At least one test-looking path and at least one that is not.
fn test_with_source(files: &IndexSet<String>, _subject: &str) -> bool {
    files.iter().any(|f| is_test_path(f)) && files.iter().any(|f| !is_test_path(f))
}

fn database_migration(files: &IndexSet<String>, _subject: &str) -> bool {
    files.iter().any(|f| {
        let lower = f.to_lowercase();
        lower.contains("migration") || lower.contains("schema")
    })
}

/// A markdown or docs path changed alongside at least one non-test
/// path.
fn documented_change(files: &IndexSet<String>, _subject: &str) -> bool {
    files.iter().any(|f| f.ends_with(".md") || f.contains("docs"))
        && files.iter().any(|f| !is_test_path(f))
}

/// Bucket each commit into zero or more workflow tags.
///
/// Tags are non-exclusive; duplicates within one commit's file list
/// are collapsed before the predicates run, so they cannot tilt the
/// test/source partition. Examples are first-encountered-first-kept.
pub fn classify_workflows(commits: &[CommitRecord]) -> WorkflowReport {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    let mut examples: IndexMap<String, Vec<WorkflowExample>> = IndexMap::new();

    for commit in commits {
        let files: IndexSet<String> = commit.files.iter().cloned().collect();
        let subject = commit.subject.to_lowercase();

        for (name, predicate) in WORKFLOW_TAGS {
            if !predicate(&files, &subject) {
                continue;
            }

            *counts.entry(name.to_string()).or_insert(0) += 1;

            let kept = examples.entry(name.to_string()).or_default();
            if kept.len() < EXAMPLES_PER_TAG {
                kept.push(WorkflowExample {
                    message: commit.subject.clone(),
                    files: files.iter().take(FILES_PER_EXAMPLE).cloned().collect(),
                });
            }
        }
    }

    WorkflowReport { counts, examples }
}
