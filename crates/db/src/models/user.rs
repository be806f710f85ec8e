//! Portal user model and DTOs.

use aerodesk_core::roles::Role;
use aerodesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Default `position` for users created without one.
pub const DEFAULT_POSITION: &str = "Employee";

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub role: String,
    pub position: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: DbId,
    pub email: String,
    pub name: String,
    pub role: String,
    pub position: String,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
            position: user.position,
            created_at: user.created_at,
        }
    }
}

/// Request body for creating a user. The password is plain text here and
/// is hashed before it reaches [`CreateUser`].
#[derive(Debug, Deserialize, Validate)]
pub struct NewUserRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub password: String,
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub name: String,
    pub role: Role,
    pub position: Option<String>,
}

/// Request body for updating a user. A supplied password is re-hashed.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub password: Option<String>,
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub name: Option<String>,
    pub role: Option<Role>,
    pub position: Option<String>,
}

/// Insert DTO with the password already hashed.
#[derive(Debug)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub role: Role,
    pub position: String,
}

/// Patch DTO with the password (if any) already hashed.
#[derive(Debug, Default)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub name: Option<String>,
    pub role: Option<Role>,
    pub position: Option<String>,
}
