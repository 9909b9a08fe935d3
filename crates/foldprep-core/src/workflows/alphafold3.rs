use crate::core::models::catalog::Catalogs;
use crate::core::models::job::{Af3Job, Cycles, TargetSpec};
use crate::engine::builder;
use crate::engine::error::BuildError;
use rand::Rng;
use tracing::info;

/// Builds the AlphaFold3 job cycles for a whole specification.
///
/// Seed generation draws from `rng`, so a seeded generator makes the run
/// fully deterministic.
pub fn build_job_cycles(
    spec: &TargetSpec,
    catalogs: &Catalogs,
    rng: &mut impl Rng,
) -> Result<Cycles<Af3Job>, BuildError> {
    let mut cycles = Vec::with_capacity(spec.cycles.len());

    for (cycle, declarations) in &spec.cycles {
        info!("Creating job cycle '{cycle}'");
        let jobs = builder::build_af3_cycle(declarations, catalogs, rng)?;
        info!("{} job(s) built for cycle '{cycle}'", jobs.len());
        cycles.push((cycle.clone(), jobs));
    }

    Ok(cycles)
}
