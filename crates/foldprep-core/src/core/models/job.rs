use super::entity::EntityDeclaration;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// The `modelSeeds` field of a job declaration.
///
/// An integer asks the builder to generate that many seeds; a list is used
/// verbatim. An absent field (the `Option` around this) leaves seeding to the
/// downstream tool.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SeedSpec {
    Count(u32),
    List(Vec<u64>),
}

/// One job as declared in the target specification.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobDeclaration {
    pub name: Option<String>,
    pub model_seeds: Option<SeedSpec>,
    pub entities: Vec<EntityDeclaration>,
}

/// A whole target specification: named job cycles in declaration order.
///
/// YAML mappings lose their order through map-based deserialization, so this
/// carries its own visitor that collects `(cycle, jobs)` entries as they
/// appear in the file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TargetSpec {
    pub cycles: Vec<(String, Vec<JobDeclaration>)>,
}

impl<'de> Deserialize<'de> for TargetSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SpecVisitor;

        impl<'de> Visitor<'de> for SpecVisitor {
            type Value = TargetSpec;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a mapping of cycle names to job lists")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut cycles = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Vec<JobDeclaration>>()? {
                    cycles.push(entry);
                }
                Ok(TargetSpec { cycles })
            }
        }

        deserializer.deserialize_map(SpecVisitor)
    }
}

/// A fully-built AlphaFold3 job, ready for serialization.
///
/// An empty `model_seeds` list means the downstream tool picks its own seed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Af3Job {
    pub name: String,
    #[serde(rename = "modelSeeds")]
    pub model_seeds: Vec<u64>,
    pub sequences: Vec<AfSequence>,
}

/// One entry of an AlphaFold3 job's `sequences` list.
///
/// External tagging gives exactly the `{type: {...}}` object shape the tool
/// expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AfSequence {
    #[serde(rename = "proteinChain")]
    ProteinChain(ProteinChainParams),
    #[serde(rename = "dnaSequence")]
    DnaSequence(NucleicAcidParams),
    #[serde(rename = "rnaSequence")]
    RnaSequence(NucleicAcidParams),
    #[serde(rename = "ligand")]
    Ligand(LigandParams),
    #[serde(rename = "ion")]
    Ion(IonParams),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProteinChainParams {
    pub sequence: String,
    pub glycans: Vec<GlycanParam>,
    pub modifications: Vec<PtmParam>,
    pub count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_template_date: Option<String>,
    pub use_structure_template: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NucleicAcidParams {
    pub sequence: String,
    pub modifications: Vec<BaseModParam>,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LigandParams {
    pub ligand: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IonParams {
    pub ion: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlycanParam {
    pub residues: String,
    pub position: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PtmParam {
    pub ptm_type: String,
    pub ptm_position: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseModParam {
    pub modification_type: String,
    pub base_position: i64,
}

/// One `>{header}` / sequence entry of a FASTA job file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub header: String,
    pub sequence: String,
}

/// A fully-built job for the sequence-only variants (AlphaFold2, ColabFold).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaJob {
    pub name: String,
    pub records: Vec<FastaRecord>,
}

/// Named job cycles in specification order, the top-level output unit.
pub type Cycles<J> = Vec<(String, Vec<J>)>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_spec_distinguishes_count_from_list() {
        let count: SeedSpec = serde_yaml::from_str("3").unwrap();
        assert_eq!(count, SeedSpec::Count(3));

        let list: SeedSpec = serde_yaml::from_str("[5, 9]").unwrap();
        assert_eq!(list, SeedSpec::List(vec![5, 9]));
    }

    #[test]
    fn job_declaration_parses_without_name_or_seeds() {
        let yaml = "\
entities:
  - name: CheY
    type: proteinChain
";
        let declaration: JobDeclaration = serde_yaml::from_str(yaml).unwrap();
        assert!(declaration.name.is_none());
        assert!(declaration.model_seeds.is_none());
        assert_eq!(declaration.entities.len(), 1);
    }

    #[test]
    fn target_spec_preserves_cycle_order() {
        let yaml = "\
screen_b:
  - entities:
      - name: CheY
        type: proteinChain
screen_a:
  - entities:
      - name: CheA
        type: proteinChain
";
        let spec: TargetSpec = serde_yaml::from_str(yaml).unwrap();
        let names: Vec<&str> = spec.cycles.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["screen_b", "screen_a"]);
    }

    #[test]
    fn protein_chain_serializes_under_its_type_tag() {
        let entry = AfSequence::ProteinChain(ProteinChainParams {
            sequence: "MKVLAA".to_string(),
            glycans: Vec::new(),
            modifications: Vec::new(),
            count: 1,
            max_template_date: Some("2021-09-30".to_string()),
            use_structure_template: true,
        });
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["proteinChain"]["sequence"], "MKVLAA");
        assert_eq!(value["proteinChain"]["maxTemplateDate"], "2021-09-30");
        assert_eq!(value["proteinChain"]["useStructureTemplate"], true);
    }

    #[test]
    fn template_date_is_omitted_when_templates_are_disabled() {
        let entry = AfSequence::ProteinChain(ProteinChainParams {
            sequence: "MKVLAA".to_string(),
            glycans: Vec::new(),
            modifications: Vec::new(),
            count: 1,
            max_template_date: None,
            use_structure_template: false,
        });
        let value = serde_json::to_value(&entry).unwrap();
        assert!(value["proteinChain"].get("maxTemplateDate").is_none());
        assert_eq!(value["proteinChain"]["useStructureTemplate"], false);
    }

    #[test]
    fn ion_serializes_with_identifier_under_own_key() {
        let entry = AfSequence::Ion(IonParams {
            ion: "MG".to_string(),
            count: 2,
        });
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["ion"]["ion"], "MG");
        assert_eq!(value["ion"]["count"], 2);
    }

    #[test]
    fn af3_job_serializes_model_seeds_even_when_empty() {
        let job = Af3Job {
            name: "CheY_1_1to6".to_string(),
            model_seeds: Vec::new(),
            sequences: Vec::new(),
        };
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["modelSeeds"], serde_json::json!([]));
    }
}
