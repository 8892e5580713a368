use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Resolves JavaFX module dependencies for a target platform.
#[derive(Debug, Parser)]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub cmd: Command,
    /// Configuration file, ignored when missing.
    #[arg(short, long, default_value = "fxresolve.toml")]
    pub config: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prints the coordinates to add to each build configuration
    Resolve {
        #[command(flatten)]
        request: RequestArgs,
    },
    /// Prints the transitive closure of the selected modules
    Modules {
        /// `;` separated module ids, `ALL` selects every module
        #[arg(short, long)]
        modules: Option<String>,
    },
    /// Prints the classifier and archive suffix of a platform
    Classifier {
        #[arg(long)]
        platform: Option<String>,
        #[arg(long)]
        arch: Option<String>,
    },
}

/// Overrides of the configured request.
#[derive(Debug, Default, Args)]
pub struct RequestArgs {
    /// `;` separated module ids, `ALL` selects every module
    #[arg(short, long)]
    pub modules: Option<String>,
    /// Literal version or special case such as `#latest#`, `#early#` or `#<pattern>#`
    #[arg(short = 't', long)]
    pub target_version: Option<String>,
    #[arg(long)]
    pub platform: Option<String>,
    #[arg(long)]
    pub arch: Option<String>,
    /// Build configuration receiving the dependencies, may be repeated
    #[arg(long = "configuration")]
    pub configurations: Vec<String>,
    /// Search endpoint of the artifact index
    #[arg(long, env = "FXRESOLVE_INDEX_ENDPOINT")]
    pub endpoint: Option<String>,
}
