use once_cell::sync::Lazy;
use regex::Regex;

/// Name reported when the remote URL is absent or unparseable.
pub const UNKNOWN_REPO: &str = "unknown";

/// Trailing `owner/repo[.git]` of an SSH or HTTPS remote URL.
static REPO_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[:/]([^/]+)/([^/]+?)(\.git)?$").expect("repo name pattern"));

/// Extract the repository name from a remote URL, `.git` stripped.
pub fn repo_name_from_url(url: &str) -> String {
    if url.is_empty() {
        return UNKNOWN_REPO.to_string();
    }
    REPO_NAME
        .captures(url)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNKNOWN_REPO.to_string())
}
