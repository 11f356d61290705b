use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tidyarch",
    about = "Arch Linux gaming workstation maintenance — diagnostics and cache cleanup",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check GPU driver, kernel, and session state (read-only)
    Doctor,

    /// Clean Steam, shader, package, and log caches (requires --confirm to actually delete)
    Clean {
        /// Actually delete files. Without this flag, behaves like a scan.
        #[arg(long)]
        confirm: bool,
    },
}
