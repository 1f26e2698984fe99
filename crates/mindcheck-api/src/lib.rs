//! mindcheck-api
//!
//! HTTP surface of the screening service: the catalog, per-session test
//! runs and results, test suggestion, and results analysis.

use axum::middleware as axum_mw;
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Catalog
        .route("/tests", get(routes::catalog::list_tests))
        .route("/tests/{id}", get(routes::catalog::get_test))
        // Runs
        .route("/sessions/{session_id}/runs", post(routes::runs::start_run))
        .route(
            "/sessions/{session_id}/runs/{run_id}",
            get(routes::runs::get_run),
        )
        .route(
            "/sessions/{session_id}/runs/{run_id}/answer",
            post(routes::runs::answer_question),
        )
        .route(
            "/sessions/{session_id}/runs/{run_id}/skip",
            post(routes::runs::skip_question),
        )
        .route(
            "/sessions/{session_id}/runs/{run_id}/back",
            post(routes::runs::previous_question),
        )
        // Results
        .route(
            "/sessions/{session_id}/results",
            get(routes::results::list_results).delete(routes::results::clear_results),
        )
        .route(
            "/sessions/{session_id}/analysis",
            post(routes::analysis::analyze_results),
        )
        .route(
            "/sessions/{session_id}/report",
            get(routes::analysis::download_report),
        )
        // Suggestion
        .route("/suggest", post(routes::suggest::suggest_test))
        .route("/suggest/questions", get(routes::suggest::list_questions))
        .route(
            "/sessions/{session_id}/suggestion",
            get(routes::suggest::get_answers).post(routes::suggest::suggest_for_session),
        )
        .route(
            "/sessions/{session_id}/suggestion/{field}",
            put(routes::suggest::record_answer),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
