//! # Workflows Module
//!
//! The public, per-variant entry points of the library. Each takes a parsed
//! target specification plus the lookup catalogs and returns the complete job
//! cycles for that variant, ready for the writers in
//! [`crate::core::io::writer`].
//!
//! All three walk cycles and job declarations in specification order and fail
//! fast on the first resolution error.

pub mod alphafold2;
pub mod alphafold3;
pub mod colabfold;
