use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Request logging middleware.
///
/// Logs every API request as a structured `api_request` event carrying the
/// method, path, status and, for session routes, the session id. Request
/// bodies are never logged since they hold questionnaire answers.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    tracing::info!(
        method = %method,
        path = %path,
        session_id = session_id_of(&path).unwrap_or("-"),
        status = response.status().as_u16(),
        "api_request"
    );

    response
}

/// The session id segment of a `/sessions/{session_id}/...` path.
pub fn session_id_of(path: &str) -> Option<&str> {
    path.strip_prefix("/sessions/")?
        .split('/')
        .next()
        .filter(|id| !id.is_empty())
}
