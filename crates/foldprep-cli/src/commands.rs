pub mod check;
pub mod generate;

use crate::cli::InputArgs;
use crate::error::Result;
use foldprep::core::io::{alias, fasta, spec};
use foldprep::core::models::catalog::{AliasMap, Catalogs, SequenceCatalog};
use foldprep::core::models::job::TargetSpec;
use tracing::info;

/// All inputs fully materialized before any resolution starts.
pub(crate) struct LoadedInputs {
    pub proteins: SequenceCatalog,
    pub nucleic_acids: SequenceCatalog,
    pub aliases: AliasMap,
    pub spec: TargetSpec,
}

impl LoadedInputs {
    pub fn catalogs(&self) -> Catalogs<'_> {
        Catalogs {
            proteins: &self.proteins,
            nucleic_acids: &self.nucleic_acids,
            aliases: &self.aliases,
        }
    }
}

pub(crate) fn load_inputs(args: &InputArgs) -> Result<LoadedInputs> {
    info!("Loading protein sequences from {:?}", args.sequences);
    let proteins = fasta::load_catalog(&args.sequences)?;

    let nucleic_acids = match &args.nucleic_sequences {
        Some(path) => {
            info!("Loading nucleic-acid sequences from {:?}", path);
            fasta::load_catalog(path)?
        }
        None => SequenceCatalog::new(),
    };

    let aliases = match &args.aliases {
        Some(path) => {
            info!("Loading alias map from {:?}", path);
            alias::load_alias_map(path)?
        }
        None => AliasMap::new(),
    };

    info!("Loading target specification from {:?}", args.targets);
    let spec = spec::load_spec(&args.targets)?;

    Ok(LoadedInputs {
        proteins,
        nucleic_acids,
        aliases,
        spec,
    })
}
