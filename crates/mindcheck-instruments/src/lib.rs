//! mindcheck-instruments
//!
//! Screening test definitions, the score-to-severity mapping, and the
//! question flow that drives one run of a test to completion.

pub mod catalog;
pub mod error;
pub mod flow;
pub mod scoring;
