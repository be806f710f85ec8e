//! Handlers for the `/users` resource. Admin only.
//!
//! Passwords are hashed with Argon2id before they reach the repository and
//! hashes never leave the server: every response is a [`UserResponse`].

use aerodesk_core::roles::{ensure_admin_remains, Role, ROLE_ADMIN};
use aerodesk_core::types::DbId;
use aerodesk_db::models::user::{
    CreateUser, NewUserRequest, UpdateUser, UpdateUserRequest, UserResponse, DEFAULT_POSITION,
};
use aerodesk_db::repositories::UserRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ensure_unique;
use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ValidJson};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

async fn ensure_email_free(state: &AppState, email: &str, current: Option<DbId>) -> AppResult<()> {
    let holder = UserRepo::find_by_email(&state.pool, email).await?;
    ensure_unique(holder.map(|u| u.id), current, || {
        format!("A user with email {email} already exists")
    })
}

fn hash(password: &str) -> AppResult<String> {
    hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))
}

/// POST /api/users
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ValidJson(input): ValidJson<NewUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    ensure_email_free(&state, &input.email, None).await?;

    let position = input
        .position
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_POSITION.to_string());
    let create = CreateUser {
        email: input.email,
        password_hash: hash(&input.password)?,
        name: input.name,
        role: input.role,
        position,
    };
    let user = UserRepo::create(&state.pool, &create).await?;
    tracing::info!(new_user_id = user.id, role = %user.role, user_id = admin.id, "User created");
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /api/users
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /api/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("User", id))?;
    Ok(Json(user.into()))
}

/// PATCH /api/users/{id}
///
/// A supplied password is re-hashed. Demoting the last admin is refused.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ApiPath(id): ApiPath<DbId>,
    ValidJson(input): ValidJson<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    let stored = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("User", id))?;

    if let Some(email) = &input.email {
        ensure_email_free(&state, email, Some(id)).await?;
    }
    let demotes_admin = stored.role == ROLE_ADMIN && input.role == Some(Role::User);
    if demotes_admin {
        ensure_admin_remains(UserRepo::count_admins(&state.pool).await?, true)?;
    }

    let password_hash = input.password.as_deref().map(hash).transpose()?;
    let update = UpdateUser {
        email: input.email,
        password_hash,
        name: input.name,
        role: input.role,
        position: input.position,
    };
    let user = UserRepo::update(&state.pool, id, &update)
        .await?
        .ok_or(AppError::not_found("User", id))?;
    tracing::info!(target_user_id = id, user_id = admin.id, "User updated");
    Ok(Json(user.into()))
}

/// DELETE /api/users/{id}
///
/// Deleting the last admin is refused.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    let stored = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("User", id))?;
    if stored.role == ROLE_ADMIN {
        ensure_admin_remains(UserRepo::count_admins(&state.pool).await?, true)?;
    }

    if UserRepo::delete(&state.pool, id).await? {
        tracing::info!(target_user_id = id, user_id = admin.id, "User deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("User", id))
    }
}
