use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "matwrap")]
#[command(about = "MATLAB binding-code generator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the proxy and wrapper sources from an interface description
    Generate {
        /// Path to the interface description (.toml)
        path: String,
        /// Directory the generated sources are written to
        #[arg(short, long, default_value = "generated")]
        out_dir: String,
    },
    /// Load an interface description and run a full generation pass without
    /// writing anything
    Check {
        /// Path to the interface description (.toml)
        path: String,
    },
}
