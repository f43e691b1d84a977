use indexmap::IndexMap;
use serde::Serialize;

/// File-level change aggregates over the analyzed window.
///
/// All rankings break count ties by first-encountered order.
#[derive(Debug, Clone, Serialize)]
pub struct FilePatternReport {
    /// Top 20 (path, change count) pairs.
    pub most_changed_files: Vec<(String, usize)>,
    /// Top 10 (extension, count) pairs; paths without `.` excluded.
    pub extension_counts: Vec<(String, usize)>,
    /// Top 15 (directory, count) pairs; paths without `/` excluded.
    pub active_directories: Vec<(String, usize)>,
    /// First 10 leading files, each with its top 5 co-change partners.
    /// Keyed asymmetrically: the partner followed the leading file in
    /// some commit's file list.
    pub file_cochanges: IndexMap<String, IndexMap<String, usize>>,
}
