//! mindcheck-bedrock
//!
//! Text generation through Bedrock, and the two features built on it:
//! suggesting which test to take next, and analyzing completed results.
//! Both degrade to a deterministic default when generation is disabled,
//! slow, or failing.

pub mod analysis;
pub mod converse;
pub mod error;
pub mod fallback;
pub mod generator;
pub mod prompt;
pub mod suggest;
