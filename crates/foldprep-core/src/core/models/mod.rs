//! Data model for job-cycle specifications and their resolved forms.
//!
//! [`catalog`] holds the read-only sequence catalogs and alias map,
//! [`entity`] the per-entity declaration and its resolved counterpart, and
//! [`job`] the job/cycle declarations plus the serialized job representations
//! for each target variant.

pub mod catalog;
pub mod entity;
pub mod job;
