//! First-run admin provisioning.

use aerodesk_core::roles::Role;
use aerodesk_core::types::DbId;
use aerodesk_db::models::user::{CreateUser, DEFAULT_POSITION};
use aerodesk_db::repositories::UserRepo;
use aerodesk_db::DbPool;

use crate::auth::password::{hash_password, MIN_PASSWORD_LENGTH};
use crate::config::BootstrapAdmin;
use crate::error::{AppError, AppResult};

/// Create the configured admin account when the portal has no admin yet.
///
/// Returns the id of the new account, or `None` when an admin already exists.
pub async fn ensure_admin(pool: &DbPool, admin: &BootstrapAdmin) -> AppResult<Option<DbId>> {
    if UserRepo::count_admins(pool).await? > 0 {
        return Ok(None);
    }
    if admin.password.len() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(format!(
            "BOOTSTRAP_ADMIN_PASSWORD must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    let password_hash = hash_password(&admin.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: admin.email.clone(),
            password_hash,
            name: "Administrator".to_string(),
            role: Role::Admin,
            position: DEFAULT_POSITION.to_string(),
        },
    )
    .await?;
    Ok(Some(user.id))
}
