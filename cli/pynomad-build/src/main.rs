//! pynomad-build — resolve the build configuration for the PyNomad
//! extension module and hand it to the external extension builder.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "pynomad-build",
    version,
    about = "Build-configuration resolver for the PyNomad extension module"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a build plan from a raw setup invocation
    Resolve {
        /// Output format (human, json, toml)
        #[arg(long)]
        format: Option<String>,
        /// Write the plan document to a file instead of stdout
        #[arg(long)]
        output: Option<String>,
        /// Host platform override (e.g. linux, darwin, win32); defaults
        /// to the running OS
        #[arg(long)]
        platform: Option<String>,
        /// Raw setup tokens: either `<openmp-flag> <root-build-dir>
        /// <builder-args>...` (building in place) or `<builder-args>...`
        /// (installing)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        tokens: Vec<String>,
    },
    /// Check the toolchain this host would build with
    Doctor {
        /// Host platform override (e.g. linux, darwin, win32)
        #[arg(long)]
        platform: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Resolve {
            format,
            output,
            platform,
            tokens,
        } => commands::resolve::run(
            &tokens,
            platform.as_deref(),
            format.as_deref(),
            output.as_deref(),
        ),
        Commands::Doctor { platform } => commands::doctor::run(platform.as_deref()),
    }
}
