pub mod commit;
pub mod conventions;
pub mod file_patterns;
pub mod report;
pub mod workflows;
