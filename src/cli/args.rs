use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "parkfactor-processor")]
#[command(about = "Weather-adjusted MLB ballpark offensive factor processor")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the weather-adjusted park factor report
    Report {
        #[arg(
            short,
            long,
            help = "Output JSON file path [default: data/park-factors.json]"
        )]
        output_file: Option<PathBuf>,

        #[arg(
            long,
            default_value = "false",
            help = "Skip the weather API and use synthetic observations"
        )]
        offline: bool,

        #[arg(short, long, default_value = "false", help = "Suppress progress output")]
        quiet: bool,
    },

    /// Display a previously generated report
    Show {
        #[arg(
            short,
            long,
            help = "Report JSON file path [default: data/park-factors.json]"
        )]
        file: Option<PathBuf>,

        #[arg(short, long, help = "Show a single team's weather summary (e.g. BOS)")]
        team: Option<String>,
    },

    /// Validate the static stadium catalog and base factor table
    Validate,
}
