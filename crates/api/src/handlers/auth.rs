//! Handlers for the `/auth` resource (login, logout, session).

use aerodesk_core::error::CoreError;
use aerodesk_core::roles::Role;
use aerodesk_db::models::user::UserResponse;
use aerodesk_db::repositories::UserRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::{generate_session_token, SESSION_COOKIE};
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::middleware::auth::Principal;
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub email: String,
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
}

fn session_cookie(value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

/// POST /api/auth/login
///
/// Verifies email + password, returns a session token and sets it as the
/// `session` cookie for page navigation.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidJson(input): ValidJson<LoginRequest>,
) -> AppResult<(CookieJar, Json<LoginResponse>)> {
    let user = UserRepo::find_by_email(&state.pool, input.email.trim())
        .await?
        .ok_or_else(invalid_credentials)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(user_id = user.id, "Rejected login with wrong password");
        return Err(invalid_credentials());
    }

    let role: Role = user
        .role
        .parse()
        .map_err(|e: CoreError| AppError::InternalError(e.to_string()))?;
    let token = generate_session_token(user.id, role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, role = %role, "User logged in");

    let jar = jar.add(session_cookie(token.clone(), state.config.secure_cookies));
    Ok((
        jar,
        Json(LoginResponse {
            token,
            expires_in: state.config.jwt.expires_in_secs(),
            user: user.into(),
        }),
    ))
}

/// POST /api/auth/logout
///
/// Sessions are stateless, so logging out only clears the cookie.
pub async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/").build());
    (jar, StatusCode::NO_CONTENT)
}

/// GET /api/auth/session
///
/// The user behind the current session, or 401.
pub async fn session(
    State(state): State<AppState>,
    principal: Principal,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, principal.id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Session user no longer exists".into()))
        })?;
    Ok(Json(user.into()))
}
