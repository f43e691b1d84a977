use std::cmp::Reverse;

use indexmap::IndexMap;

use crate::models::commit::CommitRecord;
use crate::models::file_patterns::FilePatternReport;

const TOP_FILES: usize = 20;
const TOP_EXTENSIONS: usize = 10;
const TOP_DIRECTORIES: usize = 15;
const COCHANGE_FILES: usize = 10;
const COCHANGE_PARTNERS: usize = 5;

/// Insertion-ordered counter. `most_common` sorts by descending count
/// with a stable sort, so equal counts keep first-seen order.
#[derive(Debug, Default)]
struct Counter(IndexMap<String, usize>);

impl Counter {
    fn add(&mut self, key: &str) {
        *self.0.entry(key.to_string()).or_insert(0) += 1;
    }

    fn most_common(self, n: usize) -> Vec<(String, usize)> {
        let mut entries: Vec<(String, usize)> = self.0.into_iter().collect();
        entries.sort_by_key(|&(_, count)| Reverse(count));
        entries.truncate(n);
        entries
    }
}

/// Aggregate per-file change counts, extension counts, directory
/// activity, and the co-change matrix in one pass over the commits.
///
/// Extension and directory are literal string splits: the substring
/// after the last `.` and the prefix before the last `/`. Paths
/// without the separator contribute nothing to that aggregate.
///
/// The pair loop is O(files²) per commit; the bounded commit window
/// keeps that cheap, and the plain nested loop preserves encounter
/// order, which the tie-breaking and the first-10 cut depend on.
pub fn analyze_file_patterns(commits: &[CommitRecord]) -> FilePatternReport {
    let mut file_changes = Counter::default();
    let mut extension_counts = Counter::default();
    let mut directory_counts = Counter::default();
    let mut cochanges: IndexMap<String, Counter> = IndexMap::new();

    for commit in commits {
        for file in &commit.files {
            file_changes.add(file);

            if let Some((_, extension)) = file.rsplit_once('.') {
                extension_counts.add(extension);
            }
            if let Some((directory, _)) = file.rsplit_once('/') {
                directory_counts.add(directory);
            }
        }

        // Pairs are counted per index pair and stored under whichever
        // file came first in the commit's list, never mirrored.
        for (i, first) in commit.files.iter().enumerate() {
            for second in &commit.files[i + 1..] {
                if second == first {
                    continue;
                }
                cochanges.entry(first.clone()).or_default().add(second);
            }
        }
    }

    let file_cochanges = cochanges
        .into_iter()
        .take(COCHANGE_FILES)
        .map(|(file, partners)| {
            let top: IndexMap<String, usize> =
                partners.most_common(COCHANGE_PARTNERS).into_iter().collect();
            (file, top)
        })
        .collect();

    FilePatternReport {
        most_changed_files: file_changes.most_common(TOP_FILES),
        extension_counts: extension_counts.most_common(TOP_EXTENSIONS),
        active_directories: directory_counts.most_common(TOP_DIRECTORIES),
        file_cochanges,
    }
}
