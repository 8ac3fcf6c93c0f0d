use crate::cli::{ComparisonOverrides, FingerprintArgs};
use crate::config::PartialComparisonConfig;
use crate::coords::TextCoordinates;
use crate::error::Result;
use eigas::core::protein::Protein;
use eigas::engine::error::EngineError;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

pub fn run(args: FingerprintArgs, config_path: Option<&Path>) -> Result<()> {
    let overrides = ComparisonOverrides {
        cutoff: args.cutoff,
        set_values: args.set_values,
        ..Default::default()
    };
    let config = PartialComparisonConfig::load(config_path)?.merge_with_cli(&overrides)?;

    info!("Loading coordinates from {:?}", &args.input);
    let coords = TextCoordinates::from_file(&args.input)?;
    let protein = Protein::new(&coords, config.cutoff).map_err(EngineError::from)?;

    write_fingerprint(&protein, &mut io::stdout().lock())?;
    Ok(())
}

fn write_fingerprint(protein: &Protein, out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "# {} ({} residues, cutoff {})",
        protein.name(),
        protein.len(),
        protein.cutoff()
    )?;
    for (index, value) in protein.fingerprint().iter().enumerate() {
        writeln!(out, "{}\t{:.6}", index, value)?;
    }
    Ok(())
}
