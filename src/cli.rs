use std::path::PathBuf;

use clap::Parser;

/// Post-edit hook that keeps Docker Compose services in sync with the workspace.
///
/// Reads a tool event as JSON from stdin. When the edited file is one that
/// changes a container image (package manifests, lock files, Dockerfiles,
/// compose files), runs `docker compose up --build -d`. Any other edit is
/// left to hot reload.
#[derive(Parser, Debug, Default)]
#[command(name = "docker-sync", version, about, long_about = None)]
pub struct Cli {
    /// Container CLI used for the rebuild (invoked as `<PROGRAM> compose up --build -d`).
    #[arg(long, value_name = "PROGRAM", default_value = "docker")]
    pub program: String,

    /// Extra critical pattern, appended after the built-in set. May be repeated.
    #[arg(long = "pattern", value_name = "LITERAL")]
    pub patterns: Vec<String>,

    /// Directory to run the rebuild in. Defaults to the current directory.
    #[arg(long, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// Classify and report, but do not run the rebuild.
    #[arg(long)]
    pub dry_run: bool,

    /// Print debug diagnostics to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}
