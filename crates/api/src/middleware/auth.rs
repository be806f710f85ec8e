//! Identity resolution and the [`Principal`] extractor.

use aerodesk_core::error::CoreError;
use aerodesk_core::roles::Role;
use aerodesk_core::types::DbId;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum_extra::extract::CookieJar;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::{Authorization, HeaderMapExt};

use crate::auth::jwt::{validate_token, JwtConfig, SESSION_COOKIE};
use crate::error::AppError;
use crate::state::AppState;

/// The identity behind one request.
///
/// Resolved once by the gate and stored in request extensions. Handlers take
/// it as an extractor parameter:
///
/// ```ignore
/// async fn my_handler(principal: Principal) -> AppResult<Json<()>> {
///     tracing::info!(user_id = principal.id, role = %principal.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub id: DbId,
    pub role: Role,
}

impl Principal {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// The session token sent with a request: the `Authorization: Bearer`
/// header wins, otherwise the `session` cookie.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(Authorization(bearer)) = headers.typed_get::<Authorization<Bearer>>() {
        return Some(bearer.token().to_string());
    }
    CookieJar::from_headers(headers)
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}

/// Resolve the principal from request headers.
///
/// `None` means unauthenticated: no token, a bad signature, an expired
/// token, or a role this service does not know.
pub fn resolve_principal(headers: &HeaderMap, config: &JwtConfig) -> Option<Principal> {
    let token = session_token(headers)?;
    let claims = validate_token(&token, config).ok()?;
    let role = claims.role.parse::<Role>().ok()?;
    Some(Principal {
        id: claims.sub,
        role,
    })
}

impl FromRequestParts<AppState> for Principal {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(principal) = parts.extensions.get::<Principal>() {
            return Ok(*principal);
        }
        // Public routes are not gated, so resolve directly.
        resolve_principal(&parts.headers, &state.config.jwt).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Authentication required".into(),
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::generate_session_token;
    use axum::http::header::{AUTHORIZATION, COOKIE};
    use axum::http::HeaderValue;

    fn config() -> JwtConfig {
        JwtConfig {
            secret: "gate-test-secret".into(),
            expiry_mins: 5,
        }
    }

    #[test]
    fn bearer_header_is_preferred_over_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer from-header"));
        headers.insert(COOKIE, HeaderValue::from_static("session=from-cookie"));
        assert_eq!(session_token(&headers).as_deref(), Some("from-header"));
    }

    #[test]
    fn cookie_is_used_without_header() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("theme=dark; session=abc"));
        assert_eq!(session_token(&headers).as_deref(), Some("abc"));
    }

    #[test]
    fn no_token_means_no_principal() {
        assert!(resolve_principal(&HeaderMap::new(), &config()).is_none());
    }

    #[test]
    fn valid_token_resolves_principal() {
        let token = generate_session_token(9, Role::User, &config()).unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        assert_eq!(
            resolve_principal(&headers, &config()),
            Some(Principal {
                id: 9,
                role: Role::User
            })
        );
    }

    #[test]
    fn tampered_token_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("session=not.a.jwt"));
        assert!(resolve_principal(&headers, &config()).is_none());
    }
}
