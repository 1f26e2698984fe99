use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mindcheck_core::models::answer::Answer;
use mindcheck_core::models::result::TestResult;
use mindcheck_core::session_keys;
use mindcheck_instruments::catalog::Question;
use mindcheck_instruments::flow::{FlowState, Progress, QuestionFlow};
use mindcheck_storage::session::SessionStore;

use crate::error::ApiError;
use crate::state::{AppState, Run};

/// Everything the client needs to render a run.
#[derive(Serialize)]
pub struct RunView {
    pub run_id: Uuid,
    pub test_id: String,
    pub test_name: String,
    #[serde(flatten)]
    pub state: FlowState,
    pub progress: Progress,
    pub current_question: Option<Question>,
    pub answers: Vec<Answer>,
    pub result: Option<TestResult>,
}

impl RunView {
    fn of(run: &Run) -> Self {
        Self {
            run_id: run.run_id(),
            test_id: run.test().id.clone(),
            test_name: run.test().name.clone(),
            state: run.state(),
            progress: run.progress(),
            current_question: run.current_question().cloned(),
            answers: run.answers().to_vec(),
            result: run.result().cloned(),
        }
    }
}

#[derive(Deserialize)]
pub struct StartRunRequest {
    pub test_id: String,
}

#[derive(Deserialize)]
pub struct AnswerRequest {
    pub index: usize,
    pub option: usize,
}

#[derive(Deserialize)]
pub struct MoveRequest {
    pub index: usize,
}

pub async fn start_run(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<StartRunRequest>,
) -> Result<Json<RunView>, ApiError> {
    let mut sessions = state.sessions.lock().await;
    let session = sessions.open(session_id);

    let run = QuestionFlow::start(&state.catalog, &req.test_id, session.results())?;
    let view = RunView::of(&run);
    session.runs.insert(run.run_id(), run);
    Ok(Json(view))
}

pub async fn get_run(
    State(state): State<AppState>,
    Path((session_id, run_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<RunView>, ApiError> {
    let mut sessions = state.sessions.lock().await;
    let run = sessions.existing(session_id)?.run_mut(run_id)?;
    Ok(Json(RunView::of(run)))
}

pub async fn answer_question(
    State(state): State<AppState>,
    Path((session_id, run_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<RunView>, ApiError> {
    let mut sessions = state.sessions.lock().await;
    let session = sessions.existing(session_id)?;
    let run = session.run_mut(run_id)?;
    run.answer(req.index, req.option)?;
    let view = RunView::of(run);

    if run.is_completed() {
        // The stored analysis no longer describes every result.
        session.store.remove(session_keys::ANALYSIS)?;
        session.runs.remove(&run_id);
    }
    Ok(Json(view))
}

pub async fn skip_question(
    State(state): State<AppState>,
    Path((session_id, run_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<MoveRequest>,
) -> Result<Json<RunView>, ApiError> {
    let mut sessions = state.sessions.lock().await;
    let run = sessions.existing(session_id)?.run_mut(run_id)?;
    run.skip(req.index);
    Ok(Json(RunView::of(run)))
}

pub async fn previous_question(
    State(state): State<AppState>,
    Path((session_id, run_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<MoveRequest>,
) -> Result<Json<RunView>, ApiError> {
    let mut sessions = state.sessions.lock().await;
    let run = sessions.existing(session_id)?.run_mut(run_id)?;
    run.back(req.index);
    Ok(Json(RunView::of(run)))
}
