//! Account routes: register and login, both answering `{ token, user }`.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::services::session;
use crate::services::users::{self, UserError, UserView};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CredentialsBody {
    email: String,
    password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthBody {
    pub token: String,
    pub user: UserView,
}

pub(crate) fn user_error_to_status(err: &UserError) -> StatusCode {
    match err {
        UserError::InvalidEmail | UserError::MissingPassword => StatusCode::BAD_REQUEST,
        UserError::EmailTaken => StatusCode::CONFLICT,
        UserError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        UserError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(err: UserError) -> Response {
    let status = user_error_to_status(&err);
    let message = if let UserError::Db(e) = &err {
        tracing::error!(error = %e, "user query failed");
        "internal server error".to_owned()
    } else {
        err.to_string()
    };
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

fn rejection_response(rejection: JsonRejection) -> Response {
    let status = rejection.status();
    (status, Json(serde_json::json!({ "error": rejection.body_text() }))).into_response()
}

async fn issue_session(state: &AppState, user: UserView, status: StatusCode) -> Response {
    match session::create_session(&state.pool, user.id).await {
        Ok(token) => (status, Json(AuthBody { token, user })).into_response(),
        Err(e) => error_response(UserError::Db(e)),
    }
}

/// `POST /users/register`: create an account and sign it in.
pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<CredentialsBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return rejection_response(rejection),
    };
    let user = match users::register(&state.pool, &body.email, &body.password).await {
        Ok(user) => user,
        Err(e) => return error_response(e),
    };
    tracing::info!(user_id = %user.id, "user registered");
    issue_session(&state, user, StatusCode::CREATED).await
}

/// `POST /users/login`: check credentials and issue a session token.
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<CredentialsBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return rejection_response(rejection),
    };
    let user = match users::login(&state.pool, &body.email, &body.password).await {
        Ok(user) => user,
        Err(e) => {
            if matches!(e, UserError::InvalidCredentials) {
                tracing::info!("login rejected");
            }
            return error_response(e);
        }
    };
    tracing::info!(user_id = %user.id, "user logged in");
    issue_session(&state, user, StatusCode::OK).await
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
