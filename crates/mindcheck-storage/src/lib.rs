//! mindcheck-storage
//!
//! Session-scoped key-value storage and the append-only result store
//! built on top of it.

pub mod error;
pub mod results;
pub mod session;
pub mod state;
