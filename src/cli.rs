use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "check-licenses")]
#[command(about = "Audit an SBOM against the allowed licenses in .licensee.json")]
#[command(version)]
pub struct Cli {
    /// Project root containing .licensee.json and sbom.json (default: current directory)
    #[arg(long)]
    pub project_root: Option<PathBuf>,

    /// Allow-list file, relative to the project root
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// SBOM file, relative to the project root
    #[arg(long)]
    pub sbom: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress the report; only the exit status is meaningful
    #[arg(short, long)]
    pub quiet: bool,
}
