//! # Engine Module
//!
//! The resolution and job-building logic: turning entity declarations into
//! validated [`ResolvedEntity`](crate::core::models::entity::ResolvedEntity)
//! values ([`resolver`]), shaping them for each target variant
//! ([`formatter`]), and assembling deterministic, fully-named jobs and cycles
//! including model-seed generation and fan-out ([`builder`]).
//!
//! Every failure is fatal and propagates out of the current cycle; the two
//! recoverable conditions (an ignored `maxTemplateDate`, non-protein entities
//! declared for a protein-only format) surface as `tracing` warnings instead.

pub mod builder;
pub mod error;
pub mod formatter;
pub mod resolver;
