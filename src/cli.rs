use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "qbpush", version, about = "QuickBase code page deployment CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload every file in the code pages folder, one request per file.
    Deploy,
    /// List the files a deploy run would attempt.
    Pages,
    /// Report configuration and folder readiness without deploying.
    Check,
}
