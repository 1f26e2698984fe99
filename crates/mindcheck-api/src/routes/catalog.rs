use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use mindcheck_instruments::catalog::Test;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct TestSummary {
    id: String,
    name: String,
    description: String,
    category: String,
    question_count: usize,
}

pub async fn list_tests(State(state): State<AppState>) -> Json<Vec<TestSummary>> {
    let tests = state
        .catalog
        .tests()
        .iter()
        .map(|t| TestSummary {
            id: t.id.clone(),
            name: t.name.clone(),
            description: t.description.clone(),
            category: t.category().to_string(),
            question_count: t.questions.len(),
        })
        .collect();
    Json(tests)
}

pub async fn get_test(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Test>, ApiError> {
    let test = state
        .catalog
        .find_test(&id)
        .ok_or_else(|| ApiError::NotFound(format!("test not found: {id}")))?;
    Ok(Json(test.as_ref().clone()))
}
