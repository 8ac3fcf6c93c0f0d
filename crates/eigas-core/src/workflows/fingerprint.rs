use crate::core::protein::{CoordinateProvider, Protein, ProteinError};
use crate::engine::config::ConfigError;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub const PHASE_NAME: &str = "Fingerprinting";

/// Builds one [`Protein`] per provider, in input order.
///
/// Fails with the first construction error in input order.
#[instrument(skip_all, name = "fingerprint_workflow", fields(proteins = providers.len(), cutoff = cutoff))]
pub fn run<P>(
    providers: &[P],
    cutoff: f64,
    reporter: &ProgressReporter,
) -> Result<Vec<Protein>, EngineError>
where
    P: CoordinateProvider + Sync,
{
    if !(cutoff.is_finite() && cutoff > 0.0) {
        return Err(ConfigError::InvalidParameter {
            name: "cutoff",
            value: cutoff,
        }
        .into());
    }

    reporter.report(Progress::PhaseStart { name: PHASE_NAME });

    if providers.is_empty() {
        warn!("No coordinate providers given. Nothing to fingerprint.");
        reporter.report(Progress::PhaseFinish);
        return Ok(Vec::new());
    }

    let results: Vec<Result<Protein, ProteinError>> = reporter.task(providers.len(), || {
        #[cfg(not(feature = "parallel"))]
        let iterator = providers.iter();

        #[cfg(feature = "parallel")]
        let iterator = providers.par_iter();

        iterator
            .map(|provider| {
                let protein = Protein::new(provider, cutoff);
                reporter.report(Progress::TaskIncrement);
                protein
            })
            .collect()
    });

    let mut proteins = Vec::with_capacity(results.len());
    for result in results {
        proteins.push(result?);
    }

    info!(
        proteins = proteins.len(),
        residues = proteins.iter().map(Protein::len).sum::<usize>(),
        "Fingerprinting finished."
    );
    reporter.report(Progress::PhaseFinish);
    Ok(proteins)
}
