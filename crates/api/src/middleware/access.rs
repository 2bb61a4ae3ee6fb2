//! Route-level access gate.
//!
//! Runs before routing reaches any handler: resolves the requirement with
//! [`required_access`], verifies the bearer token when one is needed, checks
//! the scope, and stores the verified [`AuthUser`] in the request extensions.

use albums_core::error::CoreError;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::auth::policy::{required_access, Access};
use crate::error::AppError;
use crate::middleware::auth::{authenticate, AuthUser};
use crate::state::AppState;

/// Axum middleware enforcing [`required_access`] for every request.
///
/// - no or invalid token where one is needed: 401
/// - valid token without the required scope: 403
pub async fn enforce_access_policy(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let access = required_access(request.method().as_str(), request.uri().path());

    if access != Access::Public {
        let user = authenticate(request.headers(), &state.config.jwt)?;

        if let Access::Scope(scope) = access {
            if !user.has_scope(scope) {
                tracing::info!(
                    username = %user.username,
                    scope,
                    path = %request.uri().path(),
                    "Request denied: missing scope"
                );
                return Err(AppError::Core(CoreError::Forbidden(format!(
                    "Scope '{scope}' required"
                ))));
            }
        }

        request.extensions_mut().insert::<AuthUser>(user);
    }

    Ok(next.run(request).await)
}
