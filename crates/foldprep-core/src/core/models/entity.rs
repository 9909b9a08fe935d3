use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

/// The five entity kinds a job may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    ProteinChain,
    DnaSequence,
    RnaSequence,
    Ligand,
    Ion,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown entity type '{0}'. Expected one of: proteinChain, dnaSequence, rnaSequence, ligand, ion.")]
pub struct UnknownEntityTypeError(pub String);

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::ProteinChain => "proteinChain",
            EntityType::DnaSequence => "dnaSequence",
            EntityType::RnaSequence => "rnaSequence",
            EntityType::Ligand => "ligand",
            EntityType::Ion => "ion",
        }
    }
}

impl FromStr for EntityType {
    type Err = UnknownEntityTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "proteinChain" => Ok(EntityType::ProteinChain),
            "dnaSequence" => Ok(EntityType::DnaSequence),
            "rnaSequence" => Ok(EntityType::RnaSequence),
            "ligand" => Ok(EntityType::Ligand),
            "ion" => Ok(EntityType::Ion),
            other => Err(UnknownEntityTypeError(other.to_string())),
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entity as declared in the target specification.
///
/// `entity_type` stays a raw string at parse time; the resolver owns the
/// unknown-type failure. Annotation positions are 1-indexed against the
/// *original* (unsliced) sequence.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EntityDeclaration {
    pub name: String,
    #[serde(rename = "type")]
    pub entity_type: String,
    #[serde(default = "default_count")]
    pub count: u32,
    /// Optional `[start, end]`, 1-indexed inclusive. Kept as a raw list so a
    /// wrong arity is reported as a validation error, not a parse error.
    pub range: Option<Vec<i64>>,
    /// `[code, position]` pairs (PTMs for proteins, base modifications for
    /// nucleic acids).
    pub modifications: Option<Vec<(String, i64)>>,
    /// `[residueSpec, position]` pairs; protein chains only.
    pub glycans: Option<Vec<(String, i64)>>,
    pub use_structure_template: Option<bool>,
    pub max_template_date: Option<String>,
}

fn default_count() -> u32 {
    1
}

/// Structural-template configuration for a protein chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSettings {
    pub use_structure_template: bool,
    /// Populated only when templates are enabled.
    pub max_template_date: Option<String>,
}

/// A modification with its position renumbered relative to the sliced sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modification {
    pub code: String,
    pub position: i64,
}

/// A glycosylation site with its position renumbered relative to the sliced
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glycan {
    pub residues: String,
    pub position: i64,
}

/// A fully-resolved entity: sequence sliced, annotations renumbered and
/// validated. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEntity {
    pub name: String,
    pub entity_type: EntityType,
    pub count: u32,
    /// Catalog sequence sliced to `[start, end]`; empty for ligand/ion.
    pub real_sequence: String,
    pub start: i64,
    pub end: i64,
    pub modifications: Vec<Modification>,
    pub glycans: Vec<Glycan>,
    /// Present only for protein chains.
    pub template: Option<TemplateSettings>,
}

impl ResolvedEntity {
    /// Name fragment used when deriving a job name: `{name}_{count}_{start}to{end}`.
    pub fn name_fragment(&self) -> String {
        format!("{}_{}_{}to{}", self.name, self.count, self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_type_round_trips_through_str() {
        for tag in ["proteinChain", "dnaSequence", "rnaSequence", "ligand", "ion"] {
            let parsed: EntityType = tag.parse().unwrap();
            assert_eq!(parsed.as_str(), tag);
        }
    }

    #[test]
    fn unknown_entity_type_is_rejected() {
        let err = "proteinchain".parse::<EntityType>().unwrap_err();
        assert_eq!(err, UnknownEntityTypeError("proteinchain".to_string()));
    }

    #[test]
    fn declaration_parses_with_defaults() {
        let yaml = "name: CheY\ntype: proteinChain\n";
        let declaration: EntityDeclaration = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(declaration.name, "CheY");
        assert_eq!(declaration.count, 1);
        assert!(declaration.range.is_none());
        assert!(declaration.use_structure_template.is_none());
    }

    #[test]
    fn declaration_parses_annotations_as_pairs() {
        let yaml = "\
name: CheY
type: proteinChain
count: 2
range: [10, 120]
modifications:
  - [CCD_SEP, 15]
glycans:
  - [NAG, 20]
";
        let declaration: EntityDeclaration = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(declaration.range, Some(vec![10, 120]));
        assert_eq!(
            declaration.modifications,
            Some(vec![("CCD_SEP".to_string(), 15)])
        );
        assert_eq!(declaration.glycans, Some(vec![("NAG".to_string(), 20)]));
    }

    #[test]
    fn declaration_rejects_unknown_fields() {
        let yaml = "name: CheY\ntype: proteinChain\ncopies: 3\n";
        assert!(serde_yaml::from_str::<EntityDeclaration>(yaml).is_err());
    }

    #[test]
    fn name_fragment_concatenates_name_count_and_range() {
        let entity = ResolvedEntity {
            name: "CheY".to_string(),
            entity_type: EntityType::ProteinChain,
            count: 2,
            real_sequence: "MKVLAA".to_string(),
            start: 1,
            end: 6,
            modifications: Vec::new(),
            glycans: Vec::new(),
            template: None,
        };
        assert_eq!(entity.name_fragment(), "CheY_2_1to6");
    }
}
