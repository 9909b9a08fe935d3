//! # Core Module
//!
//! Foundation layer of the library: static reference tables, the data model for
//! job-cycle specifications and their resolved forms, and file I/O adapters.
//!
//! ## Architecture
//!
//! - **Reference Tables** ([`constants`]) - Allow-lists for post-translational and
//!   base modifications, ligands and ions, plus the per-entity-type validation rules
//! - **Data Model** ([`models`]) - Entity/job/cycle declarations as parsed from the
//!   specification, resolved entities, and the serialized job representations
//! - **File I/O** ([`io`]) - Sequence catalog (FASTA), alias map (JSON) and target
//!   specification (YAML) loaders, and the job file writers
//!
//! Everything in this layer is stateless; the resolution logic lives in
//! [`crate::engine`].

pub mod constants;
pub mod io;
pub mod models;
