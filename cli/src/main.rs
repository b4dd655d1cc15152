use anyhow::Result;
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::commands::{check, generate};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate { path, out_dir } => generate::generate_command(path, out_dir),
        Commands::Check { path } => check::check_command(path),
    }
}
