use clap::{Args, Parser, Subcommand};
use linecat::core::models::kind::CatalogKind;
use linecat::engine::transitions::TransitionFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "linecat - Look up molecules and spectral lines in local JPL and CDMS catalogs.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a TOML configuration file.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the JPL/ and COLOGNE/ catalog folders.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Maximum number of matching transitions read from one file.
    #[arg(short = 'm', long, global = true, value_name = "INT")]
    pub max_transitions: Option<usize>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S max-transitions=5000
    #[arg(short = 'S', long = "set", global = true, value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every molecule of a catalog whose transitions file is present.
    Molecules {
        /// Catalog to read: 'jpl' or 'cologne' (alias 'cdms').
        #[arg(short, long, value_name = "KIND")]
        kind: CatalogKind,
    },
    /// Print the directory line of the first molecule matching NAME.
    Molecule {
        /// Text to look for in the directory line (case-sensitive).
        name: String,
        #[arg(short, long, value_name = "KIND")]
        kind: CatalogKind,
    },
    /// Print the first transition of a molecule whose line contains KEY.
    Transition(TransitionArgs),
    /// Print a transition followed by its neighbours within a frequency window.
    Window(WindowArgs),
}

/// Arguments for the `transition` subcommand.
#[derive(Args, Debug)]
pub struct TransitionArgs {
    /// Text to look for in the transition line, e.g. a frequency as printed in the file.
    pub key: String,

    #[command(flatten)]
    pub target: MoleculeTarget,

    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Arguments for the `window` subcommand.
#[derive(Args, Debug)]
pub struct WindowArgs {
    #[command(flatten)]
    pub anchor: WindowAnchor,

    #[command(flatten)]
    pub target: MoleculeTarget,

    /// Full width of the window in MHz.
    #[arg(short, long, value_name = "MHZ", allow_negative_numbers = true)]
    pub width: f64,

    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Args, Debug)]
pub struct MoleculeTarget {
    /// Molecule name as it appears in the catalog directory.
    #[arg(short = 'M', long, value_name = "NAME")]
    pub molecule: String,

    /// Catalog to read: 'jpl' or 'cologne' (alias 'cdms').
    #[arg(short, long, value_name = "KIND")]
    pub kind: CatalogKind,
}

/// How the centre of a window is chosen. Exactly one must be given.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct WindowAnchor {
    /// Centre on the first transition whose line contains this text.
    #[arg(long, value_name = "TEXT")]
    pub key: Option<String>,
    /// Centre on this frequency and anchor on the nearest transition.
    #[arg(short, long, value_name = "MHZ")]
    pub frequency: Option<f64>,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct FilterArgs {
    /// Keep transitions whose upper-state temperature is below this (K). 0 disables.
    #[arg(long, value_name = "KELVIN", default_value_t = 0.0)]
    pub max_temperature: f64,

    /// Keep transitions whose log10 intensity is above this. 0 disables.
    #[arg(
        long,
        value_name = "LOG10",
        default_value_t = 0.0,
        allow_negative_numbers = true
    )]
    pub min_intensity: f64,
}

impl From<FilterArgs> for TransitionFilter {
    fn from(args: FilterArgs) -> Self {
        TransitionFilter::new(args.max_temperature, args.min_intensity)
    }
}
