use clap::{ArgAction, Parser, Subcommand};
use gazetteer_core::{Level, MATCH_THRESHOLD};
use std::path::PathBuf;

/// CLI arguments for gazetteer
#[derive(Debug, Parser)]
#[command(
    name = "gazetteer",
    version,
    about = "Match and resolve Bangladeshi district / upazila / union names against a gazetteer"
)]
pub struct CliArgs {
    /// Directory holding names.json and union_names.json (default: bundled sample or $GAZETTEER_DATA_DIR)
    #[arg(short = 'd', long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Explicit district -> upazilas table (overrides --data-dir)
    #[arg(long, global = true, requires = "unions")]
    pub districts: Option<PathBuf>,

    /// Explicit upazila -> unions table (overrides --data-dir)
    #[arg(long, global = true, requires = "districts")]
    pub unions: Option<PathBuf>,

    /// Do not read or write the binary cache next to the tables
    #[arg(long = "no-cache", global = true)]
    pub no_cache: bool,

    /// Minimum similarity (0..=1) for a fuzzy match to be accepted
    #[arg(
        short = 't',
        long,
        global = true,
        default_value_t = MATCH_THRESHOLD,
        value_parser = parse_threshold
    )]
    pub threshold: f64,

    /// More log output (-v info, -vv debug, -vvv trace); RUST_LOG wins if set
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the gazetteer contents
    Stats,

    /// List all districts
    Districts,

    /// List the upazilas of a district
    Upazilas {
        /// Exact district name
        district: String,
    },

    /// List the unions of an upazila
    Unions {
        /// Exact upazila name
        upazila: String,
    },

    /// Match one name at one level
    Match {
        /// district, upazila (or thana) or union
        level: Level,
        /// Free-form name to match
        input: String,
        /// Parent name that narrows the search (district for upazilas, upazila for unions)
        #[arg(short, long)]
        parent: Option<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a (partial) district / upazila / union triple
    Resolve {
        #[arg(long)]
        district: Option<String>,
        #[arg(long)]
        upazila: Option<String>,
        #[arg(long)]
        union: Option<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that a name exists exactly; exits with status 1 if it does not
    Validate {
        level: Level,
        name: String,
        /// Parent the name must belong to
        #[arg(short, long)]
        parent: Option<String>,
    },

    /// Resolve the location fields of JSON Lines records (stdin if no file)
    Batch {
        /// Input file with one JSON object per line
        input: Option<PathBuf>,
    },
}

fn parse_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{s:?} is not a number: {e}"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("threshold must be between 0 and 1, got {value}"))
    }
}
