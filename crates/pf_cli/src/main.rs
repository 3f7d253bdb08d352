//! Pitchfield CLI
//!
//! Compute pitch control / xG / pass-success fields from JSON requests

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "pf_cli")]
#[command(about = "Compute football pitch probability fields", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Compute one field from a JSON request file
    Compute {
        /// Request JSON file path
        #[arg(long)]
        request: PathBuf,

        /// Output JSON file path (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Base config file (YAML, or JSON by extension)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Pretty-print the response
        #[arg(long, default_value = "false")]
        pretty: bool,
    },

    /// List formation presets
    Formations,

    /// List model parameter presets
    Presets,

    /// Show grid dimensions for a resolution
    Grid {
        /// Grid step in meters (config value when omitted)
        #[arg(long)]
        resolution: Option<f64>,

        /// Base config file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Compute { request, out, config, pretty } => {
            tracing::info!("computing field from {}", request.display());
            let response = pf_cli::compute_from_file(&request, config.as_deref())?;
            match pf_cli::write_response(&response, out.as_deref(), pretty)? {
                Some(json) => println!("{json}"),
                None => {
                    if let Some(path) = &out {
                        eprintln!("wrote {}x{} field to {}", response.nx, response.ny, path.display());
                    }
                }
            }
        }

        Commands::Formations => {
            for line in pf_cli::formation_summaries() {
                println!("{line}");
            }
        }

        Commands::Presets => {
            for line in pf_cli::preset_summaries() {
                println!("{line}");
            }
        }

        Commands::Grid { resolution, config } => {
            let config = pf_cli::load_config(config.as_deref())?;
            let (nx, ny) = pf_cli::grid_summary(&config, resolution)?;
            println!("nx={nx} ny={ny} cells={}", nx * ny);
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("pf_cli is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
