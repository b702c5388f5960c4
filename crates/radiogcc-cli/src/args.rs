use clap::{Parser, Subcommand};

/// CLI arguments for radiogcc-cli
#[derive(Debug, Parser)]
#[command(
    name = "radiogcc",
    version,
    about = "CLI for resolving broadcast country identity (GCC) from RDS/DAB signals"
)]
pub struct CliArgs {
    /// Path to a countries CSV file (default: the table bundled with radiogcc-core)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the country table
    Stats,

    /// List all countries in the table
    Countries,

    /// Lookup a country by ISO 3166-1 alpha-2 code
    Country {
        /// ISO code (e.g. DE, ch)
        code: String,
    },

    /// Resolve the GCC candidates for a location and a received signal
    Resolve {
        /// ISO 3166-1 alpha-2 code of the listener's location
        #[arg(long, conflicts_with = "ecc")]
        country: Option<String>,

        /// Extended Country Code of the listener's location (2 hex digits)
        #[arg(long)]
        ecc: Option<String>,

        /// Received RDS Programme Identification code (4 hex digits)
        #[arg(long, conflicts_with = "sid")]
        pi: Option<String>,

        /// Received DAB Service Identifier (4 or 8 hex digits)
        #[arg(long)]
        sid: Option<String>,

        /// Emit the matches as JSON
        #[arg(long)]
        json: bool,
    },
}
