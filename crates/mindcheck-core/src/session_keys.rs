//! Session storage key conventions.
//!
//! Pure constants. These define the layout of entries in a
//! session-scoped key-value store.

/// Completed test results for the session, stored as one JSON array.
pub const TEST_RESULTS: &str = "test_results";

/// Suggestion answers collected so far in the session.
pub const SUGGESTION_ANSWERS: &str = "suggestion_answers";

/// Most recent narrative analysis of the session's results.
pub const ANALYSIS: &str = "analysis";
