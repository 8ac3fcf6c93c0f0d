use super::{format_index, format_span};
use crate::cli::AlignArgs;
use crate::config::PartialComparisonConfig;
use crate::coords::TextCoordinates;
use crate::error::Result;
use eigas::core::protein::Protein;
use eigas::engine::config::{AlignmentMode, ComparisonConfig};
use eigas::engine::error::{AlignmentError, EngineError};
use eigas::engine::global::global_align;
use eigas::engine::local::local_align;
use eigas::engine::metrics::normalized_scores;
use eigas::engine::result::AlignmentResult;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

pub fn run(args: AlignArgs, config_path: Option<&Path>) -> Result<()> {
    let config = PartialComparisonConfig::load(config_path)?.merge_with_cli(&args.overrides)?;
    info!(?config, "Comparison configuration resolved.");

    let coords1 = TextCoordinates::from_file(&args.input1)?;
    let coords2 = TextCoordinates::from_file(&args.input2)?;
    let protein1 = Protein::new(&coords1, config.cutoff).map_err(EngineError::from)?;
    let protein2 = Protein::new(&coords2, config.cutoff).map_err(EngineError::from)?;

    write_alignment(&protein1, &protein2, &config, &mut io::stdout().lock())
}

fn write_alignment(
    protein1: &Protein,
    protein2: &Protein,
    config: &ComparisonConfig,
    out: &mut impl Write,
) -> Result<()> {
    let alignment_error = |source: AlignmentError| EngineError::Alignment {
        protein1: protein1.name().to_string(),
        protein2: protein2.name().to_string(),
        source,
    };
    let fingerprint1 = protein1.fingerprint();
    let fingerprint2 = protein2.fingerprint();

    writeln!(
        out,
        "# {} ({} residues) vs {} ({} residues)",
        protein1.name(),
        protein1.len(),
        protein2.name(),
        protein2.len()
    )?;

    match config.mode {
        AlignmentMode::Global => {
            let result = global_align(fingerprint1, fingerprint2, &config.scoring)
                .map_err(alignment_error)?;
            let scores = normalized_scores(
                &result,
                protein1.len(),
                protein2.len(),
                config.mode,
                &config.scoring,
            );
            writeln!(out, "mode\tglobal")?;
            writeln!(out, "score\t{:.6}", result.score)?;
            writeln!(out, "aligned\t{}", scores.aligned)?;
            writeln!(out, "aligned_fraction\t{:.4}", scores.aligned_fraction)?;
            writeln!(out, "normalized_score\t{:.6}", scores.normalized_score)?;
            write_columns(&result, out)?;
        }
        AlignmentMode::Local { max_gaps } => {
            let segments = local_align(fingerprint1, fingerprint2, &config.scoring, max_gaps)
                .map_err(alignment_error)?;
            writeln!(out, "mode\tlocal (max gaps {})", max_gaps)?;
            writeln!(out, "segments\t{}", segments.len())?;
            writeln!(out, "# rank\tscore\taligned\tgaps\tspan1\tspan2")?;
            for (rank, segment) in segments.iter().enumerate() {
                writeln!(
                    out,
                    "{}\t{:.6}\t{}\t{}\t{}\t{}",
                    rank + 1,
                    segment.score,
                    segment.aligned_count(),
                    segment.gap_count(),
                    format_span(segment.span1()),
                    format_span(segment.span2())
                )?;
            }
            if let Some(best) = segments.best() {
                write_columns(best, out)?;
            }
        }
    }
    Ok(())
}

fn write_columns(result: &AlignmentResult, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "# columns")?;
    for (index1, index2) in result.columns() {
        writeln!(out, "{}\t{}", format_index(index1), format_index(index2))?;
    }
    Ok(())
}
