mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "varsheet",
    version,
    about = "Export design variables as light/dark and responsive CSS theme files"
)]
struct Cli {
    /// Path to config.toml (defaults to the XDG location)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Profile to use from the config file
    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved settings
    Doctor,

    /// Generate the theme stylesheets from a variable dump
    Export(ExportArgs),

    /// Show the resolved values of every collection and mode
    Inspect(InspectArgs),
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Variable dump to read (.json, .yaml or .yml)
    #[arg(long, short)]
    pub input: PathBuf,

    /// Theme name used for file names and class selectors
    #[arg(long, short)]
    pub theme: String,

    /// Directory to write the stylesheets into (defaults to the profile's output_dir)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Print the download message as JSON instead of writing files
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Variable dump to read (.json, .yaml or .yml)
    #[arg(long, short)]
    pub input: PathBuf,

    /// Print the resolved index as JSON
    #[arg(long)]
    pub json: bool,
}

fn main() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();
    let profile = cli.profile.as_deref();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(config, profile),
        Commands::Export(args) => cmd::export::run(config, profile, &args),
        Commands::Inspect(args) => cmd::inspect::run(config, profile, &args),
    }
}
