//! Per-request authentication/authorization gate.
//!
//! Every request passes through [`gate`]. Public paths go straight through.
//! Anything else needs a valid session: unauthenticated API calls get a 401
//! JSON body, unauthenticated page loads are redirected to `/login`. Pages
//! under `/admin` additionally require the admin role; other users are sent
//! back to `/dashboard`. API-level admin checks happen in the handlers via
//! [`RequireAdmin`](super::rbac::RequireAdmin).

use aerodesk_core::error::CoreError;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use super::auth::resolve_principal;
use crate::error::AppError;
use crate::state::AppState;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// What a path requires of the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Admin,
}

/// Classify a request path.
pub fn classify(path: &str) -> Access {
    if path == LOGIN_PATH
        || path == "/favicon.ico"
        || path == "/health"
        || has_segment_prefix(path, "/api/auth")
        || has_segment_prefix(path, "/assets")
    {
        Access::Public
    } else if has_segment_prefix(path, "/admin") {
        Access::Admin
    } else {
        Access::Authenticated
    }
}

/// Whether the path is part of the JSON API rather than a page.
pub fn is_api_path(path: &str) -> bool {
    has_segment_prefix(path, "/api")
}

/// `prefix` itself or anything below it, but not `/adminx` for `/admin`.
fn has_segment_prefix(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Middleware entry point; install with `axum::middleware::from_fn_with_state`.
pub async fn gate(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let path = req.uri().path().to_owned();
    let access = classify(&path);
    if access == Access::Public {
        return next.run(req).await;
    }

    let Some(principal) = resolve_principal(req.headers(), &state.config.jwt) else {
        tracing::debug!(%path, "Unauthenticated request");
        return if is_api_path(&path) {
            AppError::Core(CoreError::Unauthorized("Authentication required".into()))
                .into_response()
        } else {
            Redirect::to(LOGIN_PATH).into_response()
        };
    };

    if access == Access::Admin && !principal.is_admin() {
        tracing::debug!(%path, user_id = principal.id, "Non-admin sent back to dashboard");
        return Redirect::to(DASHBOARD_PATH).into_response();
    }

    req.extensions_mut().insert(principal);
    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_paths() {
        for path in [
            "/login",
            "/favicon.ico",
            "/health",
            "/api/auth/login",
            "/api/auth/session",
            "/assets/app.js",
        ] {
            assert_eq!(classify(path), Access::Public, "{path}");
        }
    }

    #[test]
    fn admin_pages() {
        assert_eq!(classify("/admin"), Access::Admin);
        assert_eq!(classify("/admin/users"), Access::Admin);
        assert_eq!(classify("/administrator"), Access::Authenticated);
    }

    #[test]
    fn everything_else_needs_a_session() {
        for path in ["/", "/dashboard", "/api/flight", "/api/users/1", "/loginx", "/api/authx"] {
            assert_eq!(classify(path), Access::Authenticated, "{path}");
        }
    }

    #[test]
    fn api_paths_are_recognised() {
        assert!(is_api_path("/api"));
        assert!(is_api_path("/api/flight/3"));
        assert!(!is_api_path("/apix"));
        assert!(!is_api_path("/dashboard"));
    }
}
