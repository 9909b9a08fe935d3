//! # Foldprep Core Library
//!
//! A library for turning user-authored job-cycle specifications of molecular
//! entities into the input files consumed by the AlphaFold2, AlphaFold3 and
//! ColabFold structure-prediction tools.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains the static allow-list tables, the data
//!   model (entity/job declarations and their resolved forms), and the I/O adapters
//!   for the FASTA, JSON and YAML inputs and the generated job files.
//!
//! - **[`engine`]: The Logic Core.** Resolves entity declarations against the
//!   sequence catalogs (lookup, slicing, annotation renumbering, validation),
//!   formats resolved entities for each target variant, and builds deterministic,
//!   fully-named jobs including model-seed generation and fan-out.
//!
//! - **[`workflows`]: The Public API.** Per-variant entry points that run a whole
//!   specification through the engine and return the job cycles ready to be written.

pub mod core;
pub mod engine;
pub mod workflows;
