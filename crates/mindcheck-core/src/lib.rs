//! mindcheck-core
//!
//! Pure domain types shared by every Mindcheck crate: recorded answers,
//! completed test results, suggestion answers, session key conventions,
//! and the plain-text results report. No I/O lives here.

pub mod error;
pub mod models;
pub mod report;
pub mod session_keys;
