pub mod conventions;
pub mod file_patterns;
pub mod history;
pub mod repo_info;
pub mod workflows;
