use crate::core::models::catalog::Catalogs;
use crate::core::models::job::{Cycles, FastaJob, TargetSpec};
use crate::engine::builder::{self, FastaVariant};
use crate::engine::error::BuildError;
use tracing::info;

/// Builds the ColabFold job cycles for a whole specification: one FASTA job
/// per declaration, all chains joined into a single record under the job-name
/// header.
pub fn build_job_cycles(
    spec: &TargetSpec,
    catalogs: &Catalogs,
) -> Result<Cycles<FastaJob>, BuildError> {
    let mut cycles = Vec::with_capacity(spec.cycles.len());

    for (cycle, declarations) in &spec.cycles {
        info!("Creating job cycle '{cycle}'");
        let jobs = builder::build_fasta_cycle(declarations, catalogs, FastaVariant::ColabFold)?;
        info!("{} job(s) built for cycle '{cycle}'", jobs.len());
        cycles.push((cycle.clone(), jobs));
    }

    Ok(cycles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::catalog::{AliasMap, SequenceCatalog};

    #[test]
    fn jobs_collapse_into_one_record_with_joined_chains() {
        let proteins = SequenceCatalog::from([
            ("P1".to_string(), "MKVLAA".to_string()),
            ("P2".to_string(), "GGG".to_string()),
        ]);
        let nucleic_acids = SequenceCatalog::new();
        let aliases = AliasMap::new();
        let spec: TargetSpec = serde_yaml::from_str(
            "\
complexes:
  - name: p1_p2
    entities:
      - name: P1
        type: proteinChain
      - name: P2
        type: proteinChain
",
        )
        .unwrap();

        let cycles = build_job_cycles(
            &spec,
            &Catalogs {
                proteins: &proteins,
                nucleic_acids: &nucleic_acids,
                aliases: &aliases,
            },
        )
        .unwrap();

        let job = &cycles[0].1[0];
        assert_eq!(job.records.len(), 1);
        assert_eq!(job.records[0].header, "p1_p2");
        assert_eq!(job.records[0].sequence, "MKVLAA:\nGGG");
    }
}
