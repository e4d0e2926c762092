//! JWT-based authentication extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use famtree_core::access::Viewer;
use famtree_core::error::CoreError;
use famtree_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from a JWT Bearer token in the `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
}

impl AuthUser {
    pub fn viewer(&self) -> Viewer {
        Viewer::user(self.user_id)
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?.ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Missing Authorization header".into(),
            ))
        })?;

        let user_id = user_id_from_token(token, state)?;
        Ok(AuthUser { user_id })
    }
}

/// Optional authentication: no `Authorization` header means an anonymous
/// viewer, but a header carrying a bad token is still rejected.
#[derive(Debug, Clone, Default)]
pub struct MaybeAuthUser {
    pub user_id: Option<DbId>,
}

impl MaybeAuthUser {
    pub fn viewer(&self) -> Viewer {
        Viewer {
            user_id: self.user_id,
        }
    }
}

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id = match bearer_token(parts)? {
            Some(token) => Some(user_id_from_token(token, state)?),
            None => None,
        };
        Ok(MaybeAuthUser { user_id })
    }
}

/// Extract the bearer token, if an `Authorization` header is present.
fn bearer_token(parts: &Parts) -> Result<Option<&str>, AppError> {
    let Some(header) = parts.headers.get("authorization") else {
        return Ok(None);
    };

    let token = header
        .to_str()
        .ok()
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;
    Ok(Some(token))
}

fn user_id_from_token(token: &str, state: &AppState) -> Result<DbId, AppError> {
    let claims = validate_token(token, state.jwt()).map_err(|_| {
        AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
    })?;
    Ok(claims.sub)
}
