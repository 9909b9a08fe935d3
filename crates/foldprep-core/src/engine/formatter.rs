use crate::core::constants::DEFAULT_MAX_TEMPLATE_DATE;
use crate::core::models::entity::{EntityType, ResolvedEntity};
use crate::core::models::job::{
    AfSequence, BaseModParam, FastaRecord, GlycanParam, IonParams, LigandParams, NucleicAcidParams,
    ProteinChainParams, PtmParam,
};

/// Shapes a resolved entity into one AlphaFold3 `sequences` entry.
pub fn af3_sequence(entity: &ResolvedEntity) -> AfSequence {
    match entity.entity_type {
        EntityType::ProteinChain => {
            let (use_structure_template, max_template_date) = match &entity.template {
                Some(template) => (
                    template.use_structure_template,
                    template.max_template_date.clone(),
                ),
                None => (true, Some(DEFAULT_MAX_TEMPLATE_DATE.to_string())),
            };
            AfSequence::ProteinChain(ProteinChainParams {
                sequence: entity.real_sequence.clone(),
                glycans: entity
                    .glycans
                    .iter()
                    .map(|glycan| GlycanParam {
                        residues: glycan.residues.clone(),
                        position: glycan.position,
                    })
                    .collect(),
                modifications: entity
                    .modifications
                    .iter()
                    .map(|modification| PtmParam {
                        ptm_type: modification.code.clone(),
                        ptm_position: modification.position,
                    })
                    .collect(),
                count: entity.count,
                max_template_date,
                use_structure_template,
            })
        }
        EntityType::DnaSequence | EntityType::RnaSequence => {
            let params = NucleicAcidParams {
                sequence: entity.real_sequence.clone(),
                modifications: entity
                    .modifications
                    .iter()
                    .map(|modification| BaseModParam {
                        modification_type: modification.code.clone(),
                        base_position: modification.position,
                    })
                    .collect(),
                count: entity.count,
            };
            if entity.entity_type == EntityType::DnaSequence {
                AfSequence::DnaSequence(params)
            } else {
                AfSequence::RnaSequence(params)
            }
        }
        EntityType::Ligand => AfSequence::Ligand(LigandParams {
            ligand: entity.name.clone(),
            count: entity.count,
        }),
        EntityType::Ion => AfSequence::Ion(IonParams {
            ion: entity.name.clone(),
            count: entity.count,
        }),
    }
}

/// FASTA records for one protein chain, one per requested copy. The header
/// carries the copy index and the sliced window:
/// `{name}_{copyIndex}_{start}to{end}`.
pub fn fasta_records(entity: &ResolvedEntity) -> Vec<FastaRecord> {
    (1..=entity.count)
        .map(|copy| FastaRecord {
            header: format!(
                "{}_{}_{}to{}",
                entity.name, copy, entity.start, entity.end
            ),
            sequence: entity.real_sequence.clone(),
        })
        .collect()
}

/// Collapses a job's chain records into the single ColabFold record: all
/// chain sequences joined under the job-name header.
pub fn colabfold_record(job_name: &str, records: &[FastaRecord]) -> FastaRecord {
    let sequence = records
        .iter()
        .map(|record| record.sequence.as_str())
        .collect::<Vec<_>>()
        .join(":\n");
    FastaRecord {
        header: job_name.to_string(),
        sequence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::entity::{Glycan, Modification, TemplateSettings};

    fn protein(count: u32) -> ResolvedEntity {
        ResolvedEntity {
            name: "CheY".to_string(),
            entity_type: EntityType::ProteinChain,
            count,
            real_sequence: "KVLA".to_string(),
            start: 2,
            end: 5,
            modifications: vec![Modification {
                code: "CCD_SEP".to_string(),
                position: 2,
            }],
            glycans: vec![Glycan {
                residues: "NAG".to_string(),
                position: 3,
            }],
            template: Some(TemplateSettings {
                use_structure_template: true,
                max_template_date: Some("2021-09-30".to_string()),
            }),
        }
    }

    #[test]
    fn protein_chain_entry_carries_annotations_and_template() {
        let value = serde_json::to_value(af3_sequence(&protein(2))).unwrap();
        let body = &value["proteinChain"];
        assert_eq!(body["sequence"], "KVLA");
        assert_eq!(body["count"], 2);
        assert_eq!(body["modifications"][0]["ptmType"], "CCD_SEP");
        assert_eq!(body["modifications"][0]["ptmPosition"], 2);
        assert_eq!(body["glycans"][0]["residues"], "NAG");
        assert_eq!(body["glycans"][0]["position"], 3);
        assert_eq!(body["maxTemplateDate"], "2021-09-30");
        assert_eq!(body["useStructureTemplate"], true);
    }

    #[test]
    fn rna_entry_uses_base_modification_keys() {
        let entity = ResolvedEntity {
            name: "ssrA".to_string(),
            entity_type: EntityType::RnaSequence,
            count: 1,
            real_sequence: "AUCG".to_string(),
            start: 1,
            end: 4,
            modifications: vec![Modification {
                code: "CCD_PSU".to_string(),
                position: 3,
            }],
            glycans: Vec::new(),
            template: None,
        };
        let value = serde_json::to_value(af3_sequence(&entity)).unwrap();
        let body = &value["rnaSequence"];
        assert_eq!(body["modifications"][0]["modificationType"], "CCD_PSU");
        assert_eq!(body["modifications"][0]["basePosition"], 3);
        assert!(body.get("glycans").is_none());
    }

    #[test]
    fn ligand_entry_repeats_the_identifier_under_its_key() {
        let entity = ResolvedEntity {
            name: "CCD_ATP".to_string(),
            entity_type: EntityType::Ligand,
            count: 3,
            real_sequence: String::new(),
            start: 1,
            end: 1,
            modifications: Vec::new(),
            glycans: Vec::new(),
            template: None,
        };
        let value = serde_json::to_value(af3_sequence(&entity)).unwrap();
        assert_eq!(value["ligand"]["ligand"], "CCD_ATP");
        assert_eq!(value["ligand"]["count"], 3);
        assert!(value["ligand"].get("sequence").is_none());
    }

    #[test]
    fn fasta_records_materialize_one_record_per_copy() {
        let records = fasta_records(&protein(3));
        let headers: Vec<&str> = records.iter().map(|r| r.header.as_str()).collect();
        assert_eq!(headers, vec!["CheY_1_2to5", "CheY_2_2to5", "CheY_3_2to5"]);
        assert!(records.iter().all(|r| r.sequence == "KVLA"));
    }

    #[test]
    fn colabfold_record_joins_chains_under_the_job_name() {
        let records = vec![
            FastaRecord {
                header: "CheY_1_1to4".to_string(),
                sequence: "KVLA".to_string(),
            },
            FastaRecord {
                header: "CheA_1_1to3".to_string(),
                sequence: "GGG".to_string(),
            },
        ];
        let joined = colabfold_record("chey_chea", &records);
        assert_eq!(joined.header, "chey_chea");
        assert_eq!(joined.sequence, "KVLA:\nGGG");
    }
}
