use super::IoError;
use crate::core::models::catalog::SequenceCatalog;
use bio::io::fasta;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Loads a FASTA file into a sequence catalog, keyed by record id.
pub fn load_catalog(path: &Path) -> Result<SequenceCatalog, IoError> {
    let file = File::open(path).map_err(|e| IoError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    let reader = fasta::Reader::new(file);

    let mut catalog = SequenceCatalog::new();
    for record in reader.records() {
        let record = record.map_err(|e| IoError::Fasta {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let sequence =
            String::from_utf8(record.seq().to_vec()).map_err(|_| IoError::NonUtf8Sequence {
                id: record.id().to_string(),
                path: path.to_string_lossy().to_string(),
            })?;
        catalog.insert(record.id().to_string(), sequence);
    }

    debug!("Loaded {} sequence(s) from {:?}", catalog.len(), path);
    Ok(catalog)
}
