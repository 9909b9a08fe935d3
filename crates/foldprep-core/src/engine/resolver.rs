use super::error::ResolveError;
use crate::core::constants::{self, DEFAULT_MAX_TEMPLATE_DATE, EntityRules};
use crate::core::models::catalog::{Catalogs, lookup_sequence};
use crate::core::models::entity::{
    EntityDeclaration, EntityType, Glycan, Modification, ResolvedEntity, TemplateSettings,
};
use tracing::warn;

/// Resolves one entity declaration against the sequence catalogs.
///
/// Looks the raw sequence up (alias key first, raw name second), computes the
/// effective `[start, end]` window, slices the sequence to it, renumbers every
/// annotation position relative to the slice, and validates the result
/// against the per-type rule table.
pub fn resolve(
    declaration: &EntityDeclaration,
    catalogs: &Catalogs,
) -> Result<ResolvedEntity, ResolveError> {
    let entity_type: EntityType = declaration.entity_type.parse()?;
    let rules = constants::rules_for(entity_type);

    if let Some(codes) = rules.small_molecule_codes {
        if !codes.contains(declaration.name.as_str()) {
            return Err(ResolveError::InvalidSmallMolecule {
                name: declaration.name.clone(),
                entity_type,
            });
        }
    }

    let raw_sequence = if rules.has_sequence {
        let catalog = match entity_type {
            EntityType::ProteinChain => catalogs.proteins,
            _ => catalogs.nucleic_acids,
        };
        Some(
            lookup_sequence(catalog, catalogs.aliases, &declaration.name)
                .ok_or_else(|| ResolveError::SequenceNotFound(declaration.name.clone()))?,
        )
    } else {
        None
    };

    let (start, end) = effective_range(declaration, raw_sequence)?;
    let real_sequence = match raw_sequence {
        Some(sequence) => slice_sequence(sequence, start, end, &declaration.name)?,
        None => String::new(),
    };

    let modifications = renumber_modifications(
        declaration,
        entity_type,
        rules,
        start,
        real_sequence.len(),
    )?;
    let glycans = renumber_glycans(declaration, entity_type, rules, start, real_sequence.len())?;

    let template =
        (entity_type == EntityType::ProteinChain).then(|| template_settings(declaration));

    Ok(ResolvedEntity {
        name: declaration.name.clone(),
        entity_type,
        count: declaration.count,
        real_sequence,
        start,
        end,
        modifications,
        glycans,
        template,
    })
}

/// The window to slice: an explicit range if declared, otherwise the full
/// sequence, or `[1, 1]` for entities without one.
fn effective_range(
    declaration: &EntityDeclaration,
    sequence: Option<&str>,
) -> Result<(i64, i64), ResolveError> {
    let Some(range) = &declaration.range else {
        return Ok(match sequence {
            Some(sequence) => (1, sequence.len() as i64),
            None => (1, 1),
        });
    };

    let &[start, end] = range.as_slice() else {
        return Err(ResolveError::InvalidRange {
            name: declaration.name.clone(),
            message: format!("expected two values (start and end), got {}", range.len()),
        });
    };

    if start < 1 || start > end {
        return Err(ResolveError::InvalidRange {
            name: declaration.name.clone(),
            message: format!("[{start}, {end}] must satisfy 1 <= start <= end"),
        });
    }

    if let Some(sequence) = sequence {
        if end > sequence.len() as i64 {
            return Err(ResolveError::InvalidRange {
                name: declaration.name.clone(),
                message: format!(
                    "end {end} is past the end of the {}-residue sequence",
                    sequence.len()
                ),
            });
        }
    }

    Ok((start, end))
}

fn slice_sequence(
    sequence: &str,
    start: i64,
    end: i64,
    name: &str,
) -> Result<String, ResolveError> {
    sequence
        .get(start as usize - 1..end as usize)
        .map(str::to_string)
        .ok_or_else(|| ResolveError::InvalidRange {
            name: name.to_string(),
            message: format!("[{start}, {end}] does not fall on sequence boundaries"),
        })
}

/// Renumbers the declared modifications relative to `start` and validates
/// their positions, then their codes, against the rule table.
fn renumber_modifications(
    declaration: &EntityDeclaration,
    entity_type: EntityType,
    rules: &EntityRules,
    start: i64,
    length: usize,
) -> Result<Vec<Modification>, ResolveError> {
    let Some(declared) = declaration.modifications.as_deref().filter(|m| !m.is_empty()) else {
        return Ok(Vec::new());
    };

    let Some(codes) = rules.modification_codes else {
        return Err(ResolveError::UnsupportedAnnotation {
            name: declaration.name.clone(),
            entity_type,
            annotation: "Modifications",
        });
    };

    let mut modifications = Vec::with_capacity(declared.len());
    for (code, position) in declared {
        let relative = position - start + 1;
        if relative < 1 || relative > length as i64 {
            return Err(ResolveError::InvalidAnnotationPosition {
                name: declaration.name.clone(),
                annotation: "modification",
                position: relative,
                length,
            });
        }
        modifications.push(Modification {
            code: code.clone(),
            position: relative,
        });
    }

    for modification in &modifications {
        if !codes.contains(modification.code.as_str()) {
            return Err(ResolveError::InvalidAnnotationType {
                name: declaration.name.clone(),
                entity_type,
                code: modification.code.clone(),
            });
        }
    }

    Ok(modifications)
}

fn renumber_glycans(
    declaration: &EntityDeclaration,
    entity_type: EntityType,
    rules: &EntityRules,
    start: i64,
    length: usize,
) -> Result<Vec<Glycan>, ResolveError> {
    let Some(declared) = declaration.glycans.as_deref().filter(|g| !g.is_empty()) else {
        return Ok(Vec::new());
    };

    if !rules.glycans_allowed {
        return Err(ResolveError::UnsupportedAnnotation {
            name: declaration.name.clone(),
            entity_type,
            annotation: "Glycans",
        });
    }

    let mut glycans = Vec::with_capacity(declared.len());
    for (residues, position) in declared {
        let relative = position - start + 1;
        if relative < 1 || relative > length as i64 {
            return Err(ResolveError::InvalidAnnotationPosition {
                name: declaration.name.clone(),
                annotation: "glycan",
                position: relative,
                length,
            });
        }
        glycans.push(Glycan {
            residues: residues.clone(),
            position: relative,
        });
    }

    Ok(glycans)
}

fn template_settings(declaration: &EntityDeclaration) -> TemplateSettings {
    if declaration.use_structure_template.unwrap_or(true) {
        TemplateSettings {
            use_structure_template: true,
            max_template_date: Some(
                declaration
                    .max_template_date
                    .clone()
                    .unwrap_or_else(|| DEFAULT_MAX_TEMPLATE_DATE.to_string()),
            ),
        }
    } else {
        if declaration.max_template_date.is_some() {
            warn!(
                "maxTemplateDate is provided for '{}' but useStructureTemplate is false. Ignoring maxTemplateDate.",
                declaration.name
            );
        }
        TemplateSettings {
            use_structure_template: false,
            max_template_date: None,
        }
    }
}
