use crate::core::models::catalog::Catalogs;
use crate::core::models::job::{Cycles, FastaJob, TargetSpec};
use crate::engine::builder::{self, FastaVariant};
use crate::engine::error::BuildError;
use tracing::info;

/// Builds the AlphaFold2 job cycles for a whole specification: one FASTA job
/// per declaration, protein chains only.
pub fn build_job_cycles(
    spec: &TargetSpec,
    catalogs: &Catalogs,
) -> Result<Cycles<FastaJob>, BuildError> {
    let mut cycles = Vec::with_capacity(spec.cycles.len());

    for (cycle, declarations) in &spec.cycles {
        info!("Creating job cycle '{cycle}'");
        let jobs = builder::build_fasta_cycle(declarations, catalogs, FastaVariant::AlphaFold2)?;
        info!("{} job(s) built for cycle '{cycle}'", jobs.len());
        cycles.push((cycle.clone(), jobs));
    }

    Ok(cycles)
}
