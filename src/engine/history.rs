use crate::models::commit::CommitRecord;

/// Parse `git log --name-only --pretty=format:%H|%s|%ad|%an` output
/// into commit records, most-recent-first.
///
/// Line rules:
/// - a line containing `|` is a metadata candidate; with at least 3
///   fields it starts a new record (author defaults to empty when the
///   4th field is missing), with fewer it is dropped;
/// - any other non-blank line is a file path, trimmed and attached to
///   the most recent record;
/// - blank lines and file paths preceding any metadata line are
///   skipped.
///
/// Malformed input never fails: best-effort partial results beat a
/// hard error on one bad record.
pub fn parse_history(output: &str) -> Vec<CommitRecord> {
    let mut commits: Vec<CommitRecord> = Vec::new();

    for line in output.lines() {
        if line.contains('|') {
            let parts: Vec<&str> = line.split('|').collect();
            if parts.len() >= 3 {
                commits.push(CommitRecord {
                    hash: parts[0].to_string(),
                    subject: parts[1].to_string(),
                    date: parts[2].to_string(),
                    author: parts.get(3).map(|s| s.to_string()).unwrap_or_default(),
                    files: Vec::new(),
                });
            }
        } else if !line.trim().is_empty()
            && let Some(current) = commits.last_mut()
        {
            current.files.push(line.trim().to_string());
        }
    }

    commits
}
