/// One commit in the analyzed window, as parsed from `git log`.
///
/// Built once by the history parser and never mutated. `files` keeps
/// the order git reported, including duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub hash: String,
    /// First line of the commit message.
    pub subject: String,
    /// Calendar date (`--date=short`), most-recent-first in the list.
    pub date: String,
    /// Author name, may be empty.
    pub author: String,
    pub files: Vec<String>,
}
