use clap::Parser;

#[derive(Parser)]
#[command(
    name = "repo-pulse",
    version,
    about = "Git commit history pattern analysis CLI"
)]
pub struct Cli {
    /// Number of recent commits to analyze
    #[arg(short = 'n', long, default_value = "200")]
    pub commits: usize,

    /// Output JSON file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<std::path::PathBuf>,

    /// Path to the git repository (default: current directory)
    #[arg(long)]
    pub repo_path: Option<std::path::PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,
}
