use crate::core::models::entity::{EntityType, UnknownEntityTypeError};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error(transparent)]
    UnknownEntityType(#[from] UnknownEntityTypeError),

    #[error("Could not find the entity sequence for '{0}'")]
    SequenceNotFound(String),

    #[error("Invalid small molecule '{name}' for {entity_type} entity")]
    InvalidSmallMolecule { name: String, entity_type: EntityType },

    #[error("Invalid range for '{name}': {message}")]
    InvalidRange { name: String, message: String },

    #[error(
        "Invalid {annotation} position in '{name}': position {position} falls outside the {length}-residue sequence"
    )]
    InvalidAnnotationPosition {
        name: String,
        annotation: &'static str,
        position: i64,
        length: usize,
    },

    #[error("Invalid modification type '{code}' for {entity_type} entity '{name}'")]
    InvalidAnnotationType {
        name: String,
        entity_type: EntityType,
        code: String,
    },

    #[error("{annotation} are not supported for {entity_type} entities ('{name}')")]
    UnsupportedAnnotation {
        name: String,
        entity_type: EntityType,
        annotation: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("Cannot draw {requested} distinct seed(s) from [1, {available}]")]
    InsufficientSeedRange { requested: usize, available: u64 },
}
