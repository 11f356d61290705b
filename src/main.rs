mod clean;
mod cli;
mod disk_info;
mod doctor;
mod exec;
mod output;
mod utils;

use clap::Parser;

fn main() {
    let args = cli::Cli::parse();

    match args.command {
        cli::Command::Doctor => {
            let any_failed = doctor::run_doctor();
            if any_failed {
                std::process::exit(1);
            }
        }
        cli::Command::Clean { confirm } => clean::run_clean(confirm),
    }
}
