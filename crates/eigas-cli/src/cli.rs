use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "EIGAs CLI - Compare protein structures through spectral fingerprints of their alpha-carbon contact maps.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the per-residue spectral fingerprint of one protein.
    Fingerprint(FingerprintArgs),
    /// Align the fingerprints of two proteins.
    Align(AlignArgs),
    /// Compare every pair among several proteins.
    Batch(BatchArgs),
}

/// Arguments for the `fingerprint` subcommand.
#[derive(Args, Debug)]
pub struct FingerprintArgs {
    /// Coordinate file with one `x y z` alpha-carbon position per line.
    #[arg(required = true, value_name = "FILE")]
    pub input: PathBuf,

    /// Override the contact cutoff distance from the config file.
    #[arg(short = 'k', long, value_name = "FLOAT")]
    pub cutoff: Option<f64>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S fingerprint.cutoff=10.0
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

/// Arguments for the `align` subcommand.
#[derive(Args, Debug)]
pub struct AlignArgs {
    /// Coordinate file of the first protein.
    #[arg(required = true, value_name = "FILE1")]
    pub input1: PathBuf,

    /// Coordinate file of the second protein.
    #[arg(required = true, value_name = "FILE2")]
    pub input2: PathBuf,

    #[command(flatten)]
    pub overrides: ComparisonOverrides,
}

/// Arguments for the `batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Coordinate files of the proteins to compare.
    #[arg(required = true, num_args = 2.., value_name = "FILES")]
    pub inputs: Vec<PathBuf>,

    #[command(flatten)]
    pub overrides: ComparisonOverrides,
}

/// Command-line overrides for the comparison settings of the config file.
#[derive(Args, Debug, Default, Clone)]
pub struct ComparisonOverrides {
    /// Override the contact cutoff distance.
    #[arg(short = 'k', long, value_name = "FLOAT")]
    pub cutoff: Option<f64>,

    /// Override the gap penalty.
    #[arg(short = 'g', long, value_name = "FLOAT")]
    pub gap_penalty: Option<f64>,

    #[command(flatten)]
    pub mode: ModeFlags,

    /// Override the number of gaps a local segment may contain.
    #[arg(long, value_name = "INT")]
    pub max_gaps: Option<usize>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S alignment.max-gaps=2
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

/// Mutually exclusive flags selecting the alignment mode.
#[derive(Args, Debug, Default, Clone, Copy)]
#[group(required = false, multiple = false)]
pub struct ModeFlags {
    /// Align the full fingerprints (Needleman-Wunsch style).
    #[arg(long)]
    pub global: bool,
    /// Report every disjoint local segment (Smith-Waterman style).
    #[arg(long)]
    pub local: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn align_arguments_parse_with_overrides() {
        let cli = Cli::parse_from([
            "eigas", "-vv", "align", "a.txt", "b.txt", "--local", "--max-gaps", "2", "-g", "0.5",
        ]);
        assert_eq!(cli.verbose, 2);
        let Commands::Align(args) = cli.command else {
            panic!("Expected 'align' subcommand");
        };
        assert_eq!(args.input1, PathBuf::from("a.txt"));
        assert!(args.overrides.mode.local);
        assert!(!args.overrides.mode.global);
        assert_eq!(args.overrides.max_gaps, Some(2));
        assert_eq!(args.overrides.gap_penalty, Some(0.5));
        assert_eq!(args.overrides.cutoff, None);
    }

    #[test]
    fn global_and_local_flags_conflict() {
        let result = Cli::try_parse_from(["eigas", "align", "a", "b", "--local", "--global"]);
        assert!(result.is_err());
    }

    #[test]
    fn batch_requires_at_least_two_inputs() {
        assert!(Cli::try_parse_from(["eigas", "batch", "only.txt"]).is_err());
        let cli = Cli::try_parse_from(["eigas", "batch", "a", "b", "c"]).unwrap();
        let Commands::Batch(args) = cli.command else {
            panic!("Expected 'batch' subcommand");
        };
        assert_eq!(args.inputs.len(), 3);
    }

    #[test]
    fn global_options_are_accepted_after_the_subcommand() {
        let cli = Cli::parse_from(["eigas", "fingerprint", "p.txt", "-c", "eigas.toml", "-j", "4"]);
        assert_eq!(cli.config, Some(PathBuf::from("eigas.toml")));
        assert_eq!(cli.threads, Some(4));
    }
}
