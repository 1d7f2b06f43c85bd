use clap::{Args, Parser, Subcommand, ValueEnum};
use lockdown_core::network::{EYEBALL_URL_TEMPLATE, HEGEMONY_URL};
use lockdown_core::RecordKey;
use std::path::PathBuf;

/// CLI arguments for lockdown
#[derive(Debug, Parser)]
#[command(
    name = "lockdown",
    version,
    about = "Turn a pasted lockdown table into country records with eyeball-network dependencies",
    subcommand_negates_reqs = true
)]
pub struct CliArgs {
    /// Text file with one lockdown per line (country, [subdivision], start, end, scope)
    #[arg(required = true)]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub build: BuildArgs,

    /// Custom country dataset (.json or .json.gz) instead of the bundled one
    #[arg(long = "countries", global = true)]
    pub countries: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Output file, overwritten if present
    #[arg(short = 'o', long = "output", default_value = lockdown_core::writer::DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Number of eyeball networks requested per country
    #[arg(long = "top", default_value_t = 10)]
    pub top: usize,

    /// Key of the output mapping
    #[arg(long = "key", value_enum, default_value_t = KeyArg::Name)]
    pub key: KeyArg,

    /// Do not query hegemony scores for the eyeball networks
    #[arg(long = "skip-dependencies")]
    pub skip_dependencies: bool,

    /// Eyeball service URL template ({cc} and {top} are substituted)
    #[arg(long = "eyeball-url", env = "LOCKDOWN_EYEBALL_URL", default_value = EYEBALL_URL_TEMPLATE)]
    pub eyeball_url: String,

    /// Hegemony service URL
    #[arg(long = "hegemony-url", env = "LOCKDOWN_HEGEMONY_URL", default_value = HEGEMONY_URL)]
    pub hegemony_url: String,

    /// HTTP timeout in seconds (0 disables it)
    #[arg(long = "timeout", default_value_t = 60)]
    pub timeout: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KeyArg {
    /// Resolved country name
    Name,
    /// ISO2 code
    Cc,
}

impl From<KeyArg> for RecordKey {
    fn from(k: KeyArg) -> Self {
        match k {
            KeyArg::Name => RecordKey::Name,
            KeyArg::Cc => RecordKey::Cc,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify every line offline and print the outcome
    Parse {
        /// Text file with one lockdown per line
        input: PathBuf,
    },

    /// Resolve a country name (optionally with a subdivision) to ISO2 and continent
    Resolve {
        /// Country name, e.g. "Ivory Coast" or "United"
        name: String,
        /// Extra text tried when the bare name is unresolved, e.g. "Kingdom"
        subdivision: Option<String>,
    },

    /// List the countries of the dataset
    Countries,
}
