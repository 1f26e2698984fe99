use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use mindcheck_core::report::{render_text_report, REPORT_FILENAME};
use mindcheck_core::session_keys;
use mindcheck_storage::state::{load_state, save_state};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct AnalysisResponse {
    pub analysis: String,
}

/// Generate a fresh analysis of the session's results and keep it for the
/// report.
pub async fn analyze_results(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let results = {
        let mut sessions = state.sessions.lock().await;
        match sessions.get_mut(session_id) {
            Some(session) => session.results().read_all()?,
            None => Vec::new(),
        }
    };

    // The lock is not held while the model runs.
    let analysis = state.analyst.analyze(&results).await;

    store_analysis(&state, session_id, results.len(), &analysis).await?;

    Ok(Json(AnalysisResponse { analysis }))
}

/// Download results and analysis as a plain-text document.
///
/// Uses the last stored analysis, generating and storing one if the session
/// has none. Completing a run discards the stored analysis, so it always covers the
/// results listed beside it.
pub async fn download_report(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let (results, stored) = {
        let mut sessions = state.sessions.lock().await;
        match sessions.get_mut(session_id) {
            Some(session) => (
                session.results().read_all()?,
                load_state::<String>(&session.store, session_keys::ANALYSIS)?,
            ),
            None => (Vec::new(), None),
        }
    };

    let analysis = match stored {
        Some(analysis) => analysis,
        None => {
            let analysis = state.analyst.analyze(&results).await;
            store_analysis(&state, session_id, results.len(), &analysis).await?;
            analysis
        }
    };
    let body = render_text_report(&results, &analysis);

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{REPORT_FILENAME}\""),
            ),
        ],
        body,
    )
        .into_response())
}

/// Keep `analysis` for the report, unless the session's results changed
/// while it was being written.
async fn store_analysis(
    state: &AppState,
    session_id: Uuid,
    analyzed: usize,
    analysis: &str,
) -> Result<(), ApiError> {
    if analyzed == 0 {
        return Ok(());
    }
    let mut sessions = state.sessions.lock().await;
    if let Some(session) = sessions.get_mut(session_id)
        && session.results().read_all()?.len() == analyzed
    {
        save_state(&session.store, session_keys::ANALYSIS, &analysis)?;
    }
    Ok(())
}
