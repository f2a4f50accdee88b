use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::TokenResponseData;
use crate::inbound::http::router::AppState;
use crate::user::models::SignupRequest;

pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupRequestBody>,
) -> Result<ApiSuccess<TokenResponseData>, ApiError> {
    state
        .auth_service
        .signup(body.into_request())
        .await
        .map_err(ApiError::from)
        .map(|token| ApiSuccess::new(StatusCode::OK, TokenResponseData { token }))
}

/// HTTP request body for signup (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequestBody {
    email: String,
    password: String,
    password_confirmation: String,
}

impl SignupRequestBody {
    fn into_request(self) -> SignupRequest {
        SignupRequest {
            email: self.email,
            password: self.password,
            password_confirmation: self.password_confirmation,
        }
    }
}
