use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use mindcheck_core::models::result::TestResult;
use mindcheck_core::session_keys;
use mindcheck_storage::session::SessionStore;

use crate::error::ApiError;
use crate::state::AppState;

/// Results of the session in completion order. Unknown sessions have none.
pub async fn list_results(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Vec<TestResult>>, ApiError> {
    let mut sessions = state.sessions.lock().await;
    let results = match sessions.get_mut(session_id) {
        Some(session) => session.results().read_all()?,
        None => Vec::new(),
    };
    Ok(Json(results))
}

/// Forget every result of the session along with its analysis.
pub async fn clear_results(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<()>, ApiError> {
    let mut sessions = state.sessions.lock().await;
    if let Some(session) = sessions.get_mut(session_id) {
        session.results().clear()?;
        session.store.remove(session_keys::ANALYSIS)?;
        tracing::info!(session_id = %session_id, "results cleared");
    }
    Ok(Json(()))
}
