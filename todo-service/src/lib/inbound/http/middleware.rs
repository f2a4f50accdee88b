use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::inbound::http::router::AppState;
use crate::user::models::User;

/// Request-scoped carrier for the authenticated identity.
///
/// Inserted into request extensions by the gate; the inner user is reachable
/// only through [`CurrentUser::user`] or the [`CurrentUser::get`] accessor,
/// so unrelated extensions cannot collide with it.
#[derive(Debug, Clone)]
pub struct CurrentUser(User);

impl CurrentUser {
    pub fn user(&self) -> &User {
        &self.0
    }

    /// Companion accessor: the identity the gate stored for this request,
    /// or `None` when the gate did not run or stored nothing.
    pub fn get(extensions: &http::Extensions) -> Option<&User> {
        extensions.get::<CurrentUser>().map(CurrentUser::user)
    }
}

/// Request gate: resolves the bearer token and attaches the identity.
///
/// Short-circuits with 401 before the downstream handler on any failure:
/// missing or unreadable header, wrong scheme, or a token that does not
/// resolve to a live user.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)?;

    let user = state.auth_service.resolve_token(token).await.map_err(|e| {
        tracing::warn!("Token resolution failed: {}", e);
        unauthorized("Invalid or expired token")
    })?;

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}

// Scheme match is case-sensitive: exactly "Bearer". Whitespace around the
// remaining token is trimmed, so "Bearer   tok  " yields "tok".
fn extract_bearer_token(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| unauthorized("Missing Authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| unauthorized("Invalid Authorization header"))?;

    let token = auth_str
        .strip_prefix("Bearer")
        .ok_or_else(|| unauthorized("Invalid Authorization header format. Expected: Bearer <token>"))?;

    Ok(token.trim())
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": message
        })),
    )
        .into_response()
}
