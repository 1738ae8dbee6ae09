// src/presentation/http/controllers/auth.rs
use crate::application::commands::accounts::{LoginCommand, RegisterCommand};
use crate::application::dto::AccountActionDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LogoutRequest {
    pub username: String,
}

/// Business rejections come back as a structured body with a 400 status;
/// the matching audit entry is already committed by then.
fn respond(outcome: AccountActionDto) -> impl IntoResponse {
    let status = if outcome.success {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(outcome))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created.", body = AccountActionDto),
        (status = 400, description = "Registration rejected.", body = AccountActionDto)
    ),
    tag = "Auth"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RegisterRequest>,
) -> HttpResult<impl IntoResponse> {
    let outcome = state
        .services
        .account_commands
        .register(RegisterCommand {
            username: payload.username,
            password: payload.password,
            confirm_password: payload.confirm_password,
        })
        .await
        .into_http()?;

    Ok(respond(outcome))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted.", body = AccountActionDto),
        (status = 400, description = "Credentials rejected.", body = AccountActionDto)
    ),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<impl IntoResponse> {
    let outcome = state
        .services
        .account_commands
        .login(LoginCommand {
            username: payload.username,
            password: payload.password,
        })
        .await
        .into_http()?;

    Ok(respond(outcome))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    request_body = LogoutRequest,
    responses((status = 200, description = "Logout recorded.", body = AccountActionDto)),
    tag = "Auth"
)]
pub async fn logout(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LogoutRequest>,
) -> HttpResult<impl IntoResponse> {
    let outcome = state
        .services
        .account_commands
        .logout(payload.username)
        .await
        .into_http()?;

    Ok(respond(outcome))
}
