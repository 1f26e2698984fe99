use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use mindcheck_bedrock::suggest::Suggestion;
use mindcheck_core::models::suggestion::{
    SuggestionAnswers, SuggestionField, SuggestionQuestion, SUGGESTION_QUESTIONS,
};
use mindcheck_core::session_keys;
use mindcheck_storage::session::SessionStore;
use mindcheck_storage::state::{load_state, save_state};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RecordAnswerRequest {
    pub answer: String,
}

pub async fn list_questions() -> Json<[SuggestionQuestion; 4]> {
    Json(SUGGESTION_QUESTIONS)
}

/// Suggest a test from answers supplied in the request body.
pub async fn suggest_test(
    State(state): State<AppState>,
    Json(answers): Json<SuggestionAnswers>,
) -> Json<Suggestion> {
    Json(state.matcher.suggest(&answers).await)
}

pub async fn get_answers(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SuggestionAnswers>, ApiError> {
    let mut sessions = state.sessions.lock().await;
    let answers: SuggestionAnswers = match sessions.get_mut(session_id) {
        Some(session) => {
            load_state(&session.store, session_keys::SUGGESTION_ANSWERS)?.unwrap_or_default()
        }
        None => SuggestionAnswers::default(),
    };
    Ok(Json(answers))
}

/// Record one questionnaire answer. The answer must be one of the
/// question's options.
pub async fn record_answer(
    State(state): State<AppState>,
    Path((session_id, field)): Path<(Uuid, String)>,
    Json(req): Json<RecordAnswerRequest>,
) -> Result<Json<SuggestionAnswers>, ApiError> {
    let field: SuggestionField = field.parse()?;
    let question = SUGGESTION_QUESTIONS
        .iter()
        .find(|q| q.field == field)
        .ok_or_else(|| ApiError::NotFound(format!("no question for {}", field.as_str())))?;
    if !question.options.iter().any(|o| *o == req.answer) {
        return Err(ApiError::BadRequest(format!(
            "'{}' is not an option for {}",
            req.answer,
            field.as_str()
        )));
    }

    let mut sessions = state.sessions.lock().await;
    let session = sessions.open(session_id);
    let mut answers: SuggestionAnswers =
        load_state(&session.store, session_keys::SUGGESTION_ANSWERS)?.unwrap_or_default();
    answers.record(field, req.answer);
    save_state(&session.store, session_keys::SUGGESTION_ANSWERS, &answers)?;
    if answers.is_complete() {
        tracing::info!(session_id = %session_id, "suggestion questionnaire complete");
    }

    Ok(Json(answers))
}

/// Suggest a test from the session's recorded answers. Every question must
/// be answered first. The answers are discarded once used.
pub async fn suggest_for_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Suggestion>, ApiError> {
    let answers: SuggestionAnswers = {
        let mut sessions = state.sessions.lock().await;
        match sessions.get_mut(session_id) {
            Some(session) => {
                load_state(&session.store, session_keys::SUGGESTION_ANSWERS)?.unwrap_or_default()
            }
            None => SuggestionAnswers::default(),
        }
    };

    if let Some(missing) = answers.first_unanswered() {
        return Err(ApiError::BadRequest(format!(
            "question '{}' has not been answered",
            missing.as_str()
        )));
    }

    let suggestion = state.matcher.suggest(&answers).await;

    let mut sessions = state.sessions.lock().await;
    if let Some(session) = sessions.get_mut(session_id) {
        session.store.remove(session_keys::SUGGESTION_ANSWERS)?;
    }

    Ok(Json(suggestion))
}
