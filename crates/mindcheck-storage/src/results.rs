use mindcheck_core::models::result::TestResult;
use mindcheck_core::session_keys;
use tracing::{info, warn};

use crate::error::StorageError;
use crate::session::SessionStore;
use crate::state;

/// Append-only collection of completed test results for one session.
///
/// All results live under a single key as one JSON array. Every append
/// rewrites the array with one `set`, so a reader never sees a partially
/// written result.
#[derive(Debug, Clone)]
pub struct ResultStore<S> {
    store: S,
}

impl<S: SessionStore> ResultStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Append a completed result. Appending the same result twice records it
    /// twice.
    pub fn append(&self, result: &TestResult) -> Result<(), StorageError> {
        let mut results = self.read_all()?;
        results.push(result.clone());
        state::save_state(&self.store, session_keys::TEST_RESULTS, &results)?;

        info!(
            run_id = %result.run_id,
            test_id = %result.test_id,
            count = results.len(),
            "test result stored"
        );
        Ok(())
    }

    /// Read every stored result in append order.
    ///
    /// A missing entry reads as empty. So does an entry that no longer
    /// parses as a list of results.
    pub fn read_all(&self) -> Result<Vec<TestResult>, StorageError> {
        match state::load_state::<Vec<TestResult>>(&self.store, session_keys::TEST_RESULTS) {
            Ok(results) => Ok(results.unwrap_or_default()),
            Err(StorageError::Serialization(e)) => {
                warn!(error = %e, "stored test results are malformed, treating as empty");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(session_keys::TEST_RESULTS)
    }
}
