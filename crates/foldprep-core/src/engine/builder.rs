use super::error::BuildError;
use super::formatter;
use super::resolver;
use crate::core::models::catalog::Catalogs;
use crate::core::models::entity::{EntityType, ResolvedEntity};
use crate::core::models::job::{Af3Job, FastaJob, FastaRecord, JobDeclaration, SeedSpec};
use rand::Rng;
use std::collections::HashMap;
use tracing::warn;

/// Seeds are drawn from `[1, SEED_MULTIPLIER * requested)`.
const SEED_MULTIPLIER: u64 = 10;

/// Which sequence-only output family a FASTA job targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FastaVariant {
    AlphaFold2,
    ColabFold,
}

/// Builds the AlphaFold3 jobs for one declaration: resolves and formats every
/// entity, derives the job name if none was declared, and fans the job out
/// into one job per model seed.
pub fn build_af3_jobs(
    declaration: &JobDeclaration,
    catalogs: &Catalogs,
    rng: &mut impl Rng,
) -> Result<Vec<Af3Job>, BuildError> {
    let resolved = resolve_entities(declaration, catalogs)?;
    let sequences: Vec<_> = resolved.iter().map(formatter::af3_sequence).collect();
    let base_name = declaration
        .name
        .clone()
        .unwrap_or_else(|| per_instance_job_name(&resolved));

    let seeds = expand_seeds(declaration.model_seeds.as_ref(), rng)?;
    if seeds.is_empty() {
        return Ok(vec![Af3Job {
            name: base_name,
            model_seeds: Vec::new(),
            sequences,
        }]);
    }

    Ok(seeds
        .into_iter()
        .map(|seed| Af3Job {
            name: format!("{base_name}_{seed}"),
            model_seeds: vec![seed],
            sequences: sequences.clone(),
        })
        .collect())
}

/// Builds the single FASTA job for one declaration. Only protein chains
/// survive into the output; the seed concept does not exist here, so each
/// declaration maps to exactly one job.
pub fn build_fasta_job(
    declaration: &JobDeclaration,
    catalogs: &Catalogs,
    variant: FastaVariant,
) -> Result<FastaJob, BuildError> {
    let resolved = resolve_entities(declaration, catalogs)?;
    let chains: Vec<&ResolvedEntity> = resolved
        .iter()
        .filter(|entity| entity.entity_type == EntityType::ProteinChain)
        .collect();

    let name = declaration
        .name
        .clone()
        .unwrap_or_else(|| grouped_job_name(&chains));

    if chains.len() != resolved.len() {
        warn!(
            "Only proteinChain entities are supported for this format. \
             '{name}' will be created with only the proteinChain entities."
        );
    }

    let mut records: Vec<FastaRecord> = Vec::new();
    for chain in &chains {
        for record in formatter::fasta_records(chain) {
            // Identical declarations produce identical headers; keep the first.
            if !records.iter().any(|existing| existing.header == record.header) {
                records.push(record);
            }
        }
    }

    let records = match variant {
        FastaVariant::AlphaFold2 => records,
        FastaVariant::ColabFold => vec![formatter::colabfold_record(&name, &records)],
    };

    Ok(FastaJob { name, records })
}

/// Builds one cycle's AlphaFold3 job list, concatenating each declaration's
/// fan-out in declaration order.
pub fn build_af3_cycle(
    declarations: &[JobDeclaration],
    catalogs: &Catalogs,
    rng: &mut impl Rng,
) -> Result<Vec<Af3Job>, BuildError> {
    let mut jobs = Vec::new();
    for declaration in declarations {
        jobs.extend(build_af3_jobs(declaration, catalogs, rng)?);
    }
    Ok(jobs)
}

/// Builds one cycle's FASTA job list in declaration order.
pub fn build_fasta_cycle(
    declarations: &[JobDeclaration],
    catalogs: &Catalogs,
    variant: FastaVariant,
) -> Result<Vec<FastaJob>, BuildError> {
    declarations
        .iter()
        .map(|declaration| build_fasta_job(declaration, catalogs, variant))
        .collect()
}

/// Draws `requested` distinct seeds uniformly from `[1, 10 * requested)`.
pub fn generate_seeds(requested: usize, rng: &mut impl Rng) -> Result<Vec<u64>, BuildError> {
    let available = (SEED_MULTIPLIER * requested as u64).saturating_sub(1);
    if requested as u64 > available {
        return Err(BuildError::InsufficientSeedRange {
            requested,
            available,
        });
    }
    let sample = rand::seq::index::sample(rng, available as usize, requested);
    Ok(sample.into_iter().map(|index| index as u64 + 1).collect())
}

fn expand_seeds(
    seeds: Option<&SeedSpec>,
    rng: &mut impl Rng,
) -> Result<Vec<u64>, BuildError> {
    match seeds {
        None => Ok(Vec::new()),
        Some(SeedSpec::Count(requested)) => generate_seeds(*requested as usize, rng),
        Some(SeedSpec::List(list)) => Ok(list.clone()),
    }
}

fn resolve_entities(
    declaration: &JobDeclaration,
    catalogs: &Catalogs,
) -> Result<Vec<ResolvedEntity>, BuildError> {
    declaration
        .entities
        .iter()
        .map(|entity| resolver::resolve(entity, catalogs).map_err(BuildError::from))
        .collect()
}

/// AlphaFold3 naming: one fragment per entity instance, declaration order.
fn per_instance_job_name(entities: &[ResolvedEntity]) -> String {
    entities
        .iter()
        .map(ResolvedEntity::name_fragment)
        .collect::<Vec<_>>()
        .join("_")
}

/// Sequence-only naming: one fragment per distinct `(name, start, end)` group
/// in first-seen order, with the maximum count seen in the group. Duplicate
/// declarations of the same fragment do not inflate the name.
fn grouped_job_name(chains: &[&ResolvedEntity]) -> String {
    let mut order: Vec<(&str, i64, i64)> = Vec::new();
    let mut max_counts: HashMap<(&str, i64, i64), u32> = HashMap::new();

    for entity in chains {
        let key = (entity.name.as_str(), entity.start, entity.end);
        let count = max_counts.entry(key).or_insert_with(|| {
            order.push(key);
            0
        });
        *count = (*count).max(entity.count);
    }

    order
        .iter()
        .map(|&(name, start, end)| {
            format!("{}_{}_{}to{}", name, max_counts[&(name, start, end)], start, end)
        })
        .collect::<Vec<_>>()
        .join("_")
}
