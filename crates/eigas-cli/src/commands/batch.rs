use crate::cli::BatchArgs;
use crate::config::PartialComparisonConfig;
use crate::coords::TextCoordinates;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use eigas::engine::progress::ProgressReporter;
use eigas::workflows::{self, compare::PairComparison};
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

pub fn run(args: BatchArgs, config_path: Option<&Path>, show_progress: bool) -> Result<()> {
    let config = PartialComparisonConfig::load(config_path)?.merge_with_cli(&args.overrides)?;
    info!(?config, "Comparison configuration resolved.");

    let providers = args
        .inputs
        .iter()
        .map(|path| TextCoordinates::from_file(path))
        .collect::<Result<Vec<_>>>()?;
    info!("Loaded {} coordinate file(s).", providers.len());

    let progress_handler = if show_progress {
        CliProgressHandler::new()
    } else {
        CliProgressHandler::hidden()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let proteins = workflows::fingerprint::run(&providers, config.cutoff, &reporter)?;
    let comparisons = workflows::compare::run(&proteins, &config, &reporter)?;

    write_table(&comparisons, &mut io::stdout().lock())?;
    Ok(())
}

fn write_table(comparisons: &[PairComparison], out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "name1\tname2\tlen1\tlen2\tscore\taligned\taligned_fraction\tnormalized_score"
    )?;
    for c in comparisons {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{:.6}\t{}\t{:.4}\t{:.6}",
            c.name1,
            c.name2,
            c.len1,
            c.len2,
            c.score,
            c.aligned,
            c.scores.aligned_fraction,
            c.scores.normalized_score
        )?;
    }
    Ok(())
}
