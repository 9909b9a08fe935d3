use super::models::entity::EntityType;
use phf::{Set, phf_set};

/// Default cutoff date for structural templates when a protein chain does not
/// override it.
pub const DEFAULT_MAX_TEMPLATE_DATE: &str = "2021-09-30";

/// Post-translational modifications accepted on protein chains (CCD codes).
pub static PROTEIN_MODIFICATIONS: Set<&'static str> = phf_set! {
    "CCD_SEP", "CCD_TPO", "CCD_PTR", "CCD_NEP", "CCD_HIP", "CCD_ALY",
    "CCD_MLY", "CCD_M3L", "CCD_MLZ", "CCD_2MR", "CCD_AGM", "CCD_MCS",
    "CCD_HYP", "CCD_HY3", "CCD_LYZ", "CCD_AHB", "CCD_P1L", "CCD_SNN",
    "CCD_SNC", "CCD_TRF", "CCD_KCR", "CCD_CIR", "CCD_YHA",
};

/// Base modifications accepted on DNA sequences.
pub static DNA_MODIFICATIONS: Set<&'static str> = phf_set! {
    "CCD_5CM", "CCD_C34", "CCD_5HC", "CCD_6OG", "CCD_6MA", "CCD_1CC",
    "CCD_8OG", "CCD_5FC", "CCD_3DR",
};

/// Base modifications accepted on RNA sequences.
pub static RNA_MODIFICATIONS: Set<&'static str> = phf_set! {
    "CCD_PSU", "CCD_5MC", "CCD_OMC", "CCD_4OC", "CCD_5MU", "CCD_OMU",
    "CCD_UR3", "CCD_A2M", "CCD_MA6", "CCD_6MZ", "CCD_2MG", "CCD_OMG",
    "CCD_7MG", "CCD_RSQ",
};

/// Ligand identifiers accepted as `ligand` entities.
pub static LIGANDS: Set<&'static str> = phf_set! {
    "CCD_ADP", "CCD_ATP", "CCD_AMP", "CCD_GTP", "CCD_GDP", "CCD_FAD",
    "CCD_NAD", "CCD_NAP", "CCD_NDP", "CCD_HEM", "CCD_HEC", "CCD_PLM",
    "CCD_OLA", "CCD_MYR", "CCD_CIT", "CCD_CLA", "CCD_CHL", "CCD_BCL",
    "CCD_BCB",
};

/// Ion identifiers accepted as `ion` entities.
pub static IONS: Set<&'static str> = phf_set! {
    "MG", "ZN", "CL", "CA", "NA", "MN", "K", "FE", "CU", "CO",
};

/// Validation rules for one entity type.
///
/// Annotation eligibility is encoded here rather than branched on at every
/// call site: modifications are legal exactly when `modification_codes` is
/// populated, and small-molecule name checks apply exactly when
/// `small_molecule_codes` is populated.
#[derive(Debug, Clone, Copy)]
pub struct EntityRules {
    pub has_sequence: bool,
    pub glycans_allowed: bool,
    pub modification_codes: Option<&'static Set<&'static str>>,
    pub small_molecule_codes: Option<&'static Set<&'static str>>,
}

static PROTEIN_CHAIN_RULES: EntityRules = EntityRules {
    has_sequence: true,
    glycans_allowed: true,
    modification_codes: Some(&PROTEIN_MODIFICATIONS),
    small_molecule_codes: None,
};

static DNA_SEQUENCE_RULES: EntityRules = EntityRules {
    has_sequence: true,
    glycans_allowed: false,
    modification_codes: Some(&DNA_MODIFICATIONS),
    small_molecule_codes: None,
};

static RNA_SEQUENCE_RULES: EntityRules = EntityRules {
    has_sequence: true,
    glycans_allowed: false,
    modification_codes: Some(&RNA_MODIFICATIONS),
    small_molecule_codes: None,
};

static LIGAND_RULES: EntityRules = EntityRules {
    has_sequence: false,
    glycans_allowed: false,
    modification_codes: None,
    small_molecule_codes: Some(&LIGANDS),
};

static ION_RULES: EntityRules = EntityRules {
    has_sequence: false,
    glycans_allowed: false,
    modification_codes: None,
    small_molecule_codes: Some(&IONS),
};

pub fn rules_for(entity_type: EntityType) -> &'static EntityRules {
    match entity_type {
        EntityType::ProteinChain => &PROTEIN_CHAIN_RULES,
        EntityType::DnaSequence => &DNA_SEQUENCE_RULES,
        EntityType::RnaSequence => &RNA_SEQUENCE_RULES,
        EntityType::Ligand => &LIGAND_RULES,
        EntityType::Ion => &ION_RULES,
    }
}
