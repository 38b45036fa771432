use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "breadboard",
    about = "Breadboard: synthesize truth tables from circuits laid out on a breadboard",
    version
)]
pub struct Cli {
    /// Log synthesis steps to stderr (overridden by BREADBOARD_LOG)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Trace the board of a layout file and print its truth table
    Synth {
        /// Layout file (.toml, otherwise JSON)
        layout: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a persisted truth table and describe it
    Inspect {
        /// Truth table JSON file
        table: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the catalog of recognized circuits
    Known {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
